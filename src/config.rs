//! Editor settings passed down to the page and components.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::graph::{Bounds, GraphModel, LabelScheme};

/// Drawing surface size and model options for one editor instance.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	pub width: f64,
	pub height: f64,
	/// Minimum distance between a vertex centre and the canvas border.
	pub margin: f64,
	pub vertex_radius: f64,
	pub labels: LabelScheme,
	/// Fixed placement seed; the wall clock is used when unset.
	pub seed: Option<u64>,
}

impl Default for EditorConfig {
	fn default() -> Self {
		let bounds = Bounds::default();
		Self {
			width: bounds.width,
			height: bounds.height,
			margin: bounds.margin,
			vertex_radius: 15.0,
			labels: LabelScheme::Alphabetic,
			seed: None,
		}
	}
}

impl EditorConfig {
	pub fn bounds(&self) -> Bounds {
		Bounds {
			width: self.width,
			height: self.height,
			margin: self.margin,
		}
	}

	/// Empty graph placing vertices inside this config's bounds.
	pub fn build_model(&self) -> GraphModel {
		let seed = self.seed.unwrap_or_else(clock_seed);
		log::debug!("placement seed {seed}");
		GraphModel::new(self.bounds(), self.labels, SmallRng::seed_from_u64(seed))
	}
}

fn clock_seed() -> u64 {
	js_sys::Date::now() as u64
}
