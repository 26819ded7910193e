use std::collections::BTreeMap;

use log::{debug, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::error::{GraphError, GraphResult};
use super::label::LabelScheme;
use super::types::{Bounds, Position, VertexId};
use super::views::{AdjacencyList, AdjacencyMatrix};

#[derive(Clone, Debug)]
struct Vertex {
	position: Position,
	/// Targets of outgoing edges, in the order the edges were added.
	successors: Vec<VertexId>,
}

/// Editable directed graph.
///
/// Vertices are kept in label order, each with its own successor list, so
/// every edge endpoint is always a present vertex: edges are only stored
/// under an existing source, validated on insert and pruned when a vertex
/// goes away.
#[derive(Clone, Debug)]
pub struct GraphModel {
	vertices: BTreeMap<VertexId, Vertex>,
	/// Number of vertices ever created. Never decremented, so labels of
	/// removed vertices are not handed out again.
	next_label: usize,
	labels: LabelScheme,
	bounds: Bounds,
	rng: SmallRng,
}

impl GraphModel {
	pub fn new(bounds: Bounds, labels: LabelScheme, rng: SmallRng) -> Self {
		Self {
			vertices: BTreeMap::new(),
			next_label: 0,
			labels,
			bounds,
			rng,
		}
	}

	/// Empty graph with default bounds and alphabetic labels.
	pub fn seeded(seed: u64) -> Self {
		Self::new(
			Bounds::default(),
			LabelScheme::default(),
			SmallRng::seed_from_u64(seed),
		)
	}

	/// Creates a vertex with the next label at a random spot inside the bounds.
	pub fn add_vertex(&mut self) -> VertexId {
		let id = self.labels.label(self.next_label);
		self.next_label += 1;
		let position = self.place();
		debug!("added vertex {id} at ({:.1}, {:.1})", position.x, position.y);
		self.vertices.insert(
			id.clone(),
			Vertex {
				position,
				successors: Vec::new(),
			},
		);
		id
	}

	/// Removes the vertex and every edge touching it. Unknown ids are ignored.
	pub fn remove_vertex(&mut self, id: &VertexId) -> bool {
		let Some(removed) = self.vertices.remove(id) else {
			return false;
		};
		let mut incoming = 0;
		for vertex in self.vertices.values_mut() {
			let before = vertex.successors.len();
			vertex.successors.retain(|to| to != id);
			incoming += before - vertex.successors.len();
		}
		debug!(
			"removed vertex {id} with {} outgoing and {incoming} incoming edges",
			removed.successors.len()
		);
		true
	}

	/// Adds the edge `from -> to`. Adding an existing edge is a no-op; a
	/// missing endpoint is reported and leaves the graph untouched.
	pub fn add_edge(&mut self, from: &VertexId, to: &VertexId) -> GraphResult<()> {
		let to_missing = !self.vertices.contains_key(to);
		match self.vertices.get_mut(from) {
			Some(source) if !to_missing => {
				if !source.successors.contains(to) {
					source.successors.push(to.clone());
					debug!("added edge {from} -> {to}");
				}
				Ok(())
			}
			source => {
				let err = GraphError::MissingVertex {
					from: source.is_none().then(|| from.clone()),
					to: to_missing.then(|| to.clone()),
				};
				warn!("rejected edge {from} -> {to}: {err}");
				Err(err)
			}
		}
	}

	/// Removes the edge `from -> to` if present.
	pub fn remove_edge(&mut self, from: &VertexId, to: &VertexId) -> bool {
		let Some(source) = self.vertices.get_mut(from) else {
			return false;
		};
		let Some(at) = source.successors.iter().position(|s| s == to) else {
			return false;
		};
		source.successors.remove(at);
		debug!("removed edge {from} -> {to}");
		true
	}

	pub fn adjacency_list(&self) -> AdjacencyList {
		AdjacencyList::from_graph(self)
	}

	pub fn adjacency_matrix(&self) -> AdjacencyMatrix {
		AdjacencyMatrix::from_graph(self)
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn edge_count(&self) -> usize {
		self.vertices.values().map(|v| v.successors.len()).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	pub fn contains_vertex(&self, id: &VertexId) -> bool {
		self.vertices.contains_key(id)
	}

	pub fn contains_edge(&self, from: &VertexId, to: &VertexId) -> bool {
		self.successors(from)
			.is_some_and(|successors| successors.contains(to))
	}

	pub fn position(&self, id: &VertexId) -> Option<Position> {
		self.vertices.get(id).map(|v| v.position)
	}

	/// Outgoing edge targets of `id` in insertion order.
	pub fn successors(&self, id: &VertexId) -> Option<&[VertexId]> {
		self.vertices.get(id).map(|v| v.successors.as_slice())
	}

	/// Vertices in label order.
	pub fn vertices(&self) -> impl Iterator<Item = (&VertexId, Position)> + '_ {
		self.vertices.iter().map(|(id, v)| (id, v.position))
	}

	/// Edges grouped by source in label order, insertion order within a source.
	pub fn edges(&self) -> impl Iterator<Item = (&VertexId, &VertexId)> + '_ {
		self.vertices
			.iter()
			.flat_map(|(from, v)| v.successors.iter().map(move |to| (from, to)))
	}

	pub fn sorted_ids(&self) -> Vec<VertexId> {
		self.vertices.keys().cloned().collect()
	}

	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	pub fn label_scheme(&self) -> LabelScheme {
		self.labels
	}

	fn place(&mut self) -> Position {
		let Bounds {
			width,
			height,
			margin,
		} = self.bounds;
		Position {
			x: sample_axis(&mut self.rng, width, margin),
			y: sample_axis(&mut self.rng, height, margin),
		}
	}
}

/// Uniform in `[margin, extent - margin)`, or the centre if the canvas is
/// too small to leave a margin on both sides.
fn sample_axis(rng: &mut impl Rng, extent: f64, margin: f64) -> f64 {
	let (lo, hi) = (margin, extent - margin);
	if hi > lo {
		rng.random_range(lo..hi)
	} else {
		extent / 2.0
	}
}
