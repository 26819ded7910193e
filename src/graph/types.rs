use std::cmp::Ordering;
use std::fmt;

/// Label identifying a vertex, e.g. `"A"` or `"AB"`.
///
/// Labels are ordered shortlex: shorter labels sort first, labels of equal
/// length compare byte-wise. For single-letter labels this is plain
/// alphabetical order, and past `"Z"` it keeps `"AA"` after `"Z"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VertexId(String);

impl VertexId {
	pub fn new(label: impl Into<String>) -> Self {
		Self(label.into())
	}

	/// Parses a label coming from a form control; blank input means "no vertex".
	pub fn from_input(value: &str) -> Option<Self> {
		let value = value.trim();
		(!value.is_empty()).then(|| Self::new(value))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Ord for VertexId {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0
			.len()
			.cmp(&other.0.len())
			.then_with(|| self.0.cmp(&other.0))
	}
}

impl PartialOrd for VertexId {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl fmt::Display for VertexId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for VertexId {
	fn from(label: &str) -> Self {
		Self::new(label)
	}
}

impl From<String> for VertexId {
	fn from(label: String) -> Self {
		Self(label)
	}
}

/// Position of a vertex on the drawing surface, in canvas units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

impl Position {
	pub fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance(&self, other: &Position) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Area new vertices are placed in: the canvas minus `margin` on every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
	pub margin: f64,
}

impl Bounds {
	pub fn contains(&self, position: &Position) -> bool {
		axis_contains(position.x, self.width, self.margin)
			&& axis_contains(position.y, self.height, self.margin)
	}
}

impl Default for Bounds {
	fn default() -> Self {
		Self {
			width: 800.0,
			height: 500.0,
			margin: 30.0,
		}
	}
}

fn axis_contains(value: f64, extent: f64, margin: f64) -> bool {
	if extent - margin > margin {
		value >= margin && value < extent - margin
	} else {
		value == extent / 2.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn shortlex_order() {
		let mut ids: Vec<VertexId> = ["AA", "B", "Z", "A", "AB"].into_iter().map(VertexId::from).collect();
		ids.sort();
		let labels: Vec<&str> = ids.iter().map(VertexId::as_str).collect();
		assert_eq!(labels, ["A", "B", "Z", "AA", "AB"]);
	}

	#[test]
	fn numeric_labels_sort_by_value() {
		assert!(VertexId::from("2") < VertexId::from("10"));
	}

	#[test]
	fn blank_input_is_no_vertex() {
		assert_eq!(VertexId::from_input(""), None);
		assert_eq!(VertexId::from_input("  "), None);
		assert_eq!(VertexId::from_input("C"), Some(VertexId::from("C")));
	}

	#[test]
	fn bounds_respect_margin() {
		let bounds = Bounds::default();
		assert!(bounds.contains(&Position::new(30.0, 30.0)));
		assert!(!bounds.contains(&Position::new(29.9, 100.0)));
		assert!(!bounds.contains(&Position::new(100.0, 470.0)));
	}
}
