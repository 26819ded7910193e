//! Alternate representations derived from a [`GraphModel`].
//!
//! Both views are recomputed from scratch on every call and never cached,
//! so they always reflect the graph they were built from.

use std::collections::HashMap;
use std::fmt;

use super::model::GraphModel;
use super::types::VertexId;

/// Direct successors of every vertex, vertices in label order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyList {
	entries: Vec<(VertexId, Vec<VertexId>)>,
}

impl AdjacencyList {
	pub fn from_graph(graph: &GraphModel) -> Self {
		let entries = graph
			.vertices()
			.map(|(id, _)| {
				let successors = graph.successors(id).unwrap_or_default().to_vec();
				(id.clone(), successors)
			})
			.collect();
		Self { entries }
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Successors of `id`, `None` if the vertex is not part of the graph.
	pub fn get(&self, id: &VertexId) -> Option<&[VertexId]> {
		self.entries
			.binary_search_by(|(entry, _)| entry.cmp(id))
			.ok()
			.map(|at| self.entries[at].1.as_slice())
	}

	pub fn iter(&self) -> impl Iterator<Item = (&VertexId, &[VertexId])> + '_ {
		self.entries
			.iter()
			.map(|(id, successors)| (id, successors.as_slice()))
	}
}

/// One line per vertex: `A → [ B, C ]`.
impl fmt::Display for AdjacencyList {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (id, successors) in self.iter() {
			let joined = successors
				.iter()
				.map(VertexId::as_str)
				.collect::<Vec<_>>()
				.join(", ");
			writeln!(f, "{id} → [ {joined} ]")?;
		}
		Ok(())
	}
}

/// Square 0/1 matrix over the vertices in label order; `cell(i, j)` is 1
/// iff there is an edge `ids[i] -> ids[j]`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
	ids: Vec<VertexId>,
	cells: Vec<Vec<u8>>,
}

impl AdjacencyMatrix {
	pub fn from_graph(graph: &GraphModel) -> Self {
		let ids = graph.sorted_ids();
		let index: HashMap<&VertexId, usize> =
			ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
		let mut cells = vec![vec![0; ids.len()]; ids.len()];

		for (from, to) in graph.edges() {
			if let (Some(&row), Some(&col)) = (index.get(from), index.get(to)) {
				cells[row][col] = 1;
			}
		}

		Self { ids, cells }
	}

	pub fn ids(&self) -> &[VertexId] {
		&self.ids
	}

	pub fn cells(&self) -> &[Vec<u8>] {
		&self.cells
	}

	/// Number of rows (and columns).
	pub fn dim(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
		self.cells.get(row)?.get(col).copied()
	}

	pub fn index_of(&self, id: &VertexId) -> Option<usize> {
		self.ids.binary_search(id).ok()
	}

	pub fn has_edge(&self, from: &VertexId, to: &VertexId) -> bool {
		match (self.index_of(from), self.index_of(to)) {
			(Some(row), Some(col)) => self.cells[row][col] == 1,
			_ => false,
		}
	}

	pub fn rows(&self) -> impl Iterator<Item = (&VertexId, &[u8])> + '_ {
		self.ids
			.iter()
			.zip(&self.cells)
			.map(|(id, row)| (id, row.as_slice()))
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::SmallRng;
	use rand::{Rng, SeedableRng};

	use super::*;

	fn id(label: &str) -> VertexId {
		VertexId::from(label)
	}

	#[test]
	fn list_covers_isolated_vertices() {
		let mut graph = GraphModel::seeded(1);
		let (a, b, c) = (graph.add_vertex(), graph.add_vertex(), graph.add_vertex());
		graph.add_edge(&a, &c).unwrap();
		graph.add_edge(&a, &b).unwrap();

		let list = graph.adjacency_list();
		assert_eq!(list.len(), 3);
		assert_eq!(list.get(&a), Some([c.clone(), b.clone()].as_slice()));
		assert_eq!(list.get(&b), Some([].as_slice()));
		assert_eq!(list.get(&c), Some([].as_slice()));
		assert_eq!(list.get(&id("D")), None);
		assert_eq!(list.to_string(), "A → [ C, B ]\nB → [  ]\nC → [  ]\n");
	}

	#[test]
	fn empty_graph_views() {
		let graph = GraphModel::seeded(1);
		assert!(graph.adjacency_list().is_empty());
		let matrix = graph.adjacency_matrix();
		assert!(matrix.is_empty());
		assert!(matrix.cells().is_empty());
	}

	#[test]
	fn matrix_layout() {
		let mut graph = GraphModel::seeded(1);
		let (a, b, c) = (graph.add_vertex(), graph.add_vertex(), graph.add_vertex());
		graph.add_edge(&a, &b).unwrap();
		graph.add_edge(&c, &a).unwrap();

		let matrix = graph.adjacency_matrix();
		assert_eq!(matrix.ids(), [id("A"), id("B"), id("C")].as_slice());
		assert_eq!(matrix.cells(), [vec![0u8, 1, 0], vec![0, 0, 0], vec![1, 0, 0]].as_slice());
		assert!(matrix.has_edge(&c, &a));
		assert!(!matrix.has_edge(&a, &c));
		assert_eq!(matrix.cell(0, 1), Some(1));
		assert_eq!(matrix.cell(3, 0), None);
	}

	#[test]
	fn views_follow_mutations() {
		let mut graph = GraphModel::seeded(1);
		let (a, b) = (graph.add_vertex(), graph.add_vertex());
		graph.add_edge(&a, &b).unwrap();
		let before = graph.adjacency_matrix();

		graph.remove_vertex(&a);
		let after = graph.adjacency_matrix();
		assert_eq!(before.dim(), 2);
		assert_eq!(after.ids(), [b.clone()].as_slice());
		assert_eq!(after.cells(), [vec![0u8]].as_slice());
		assert_eq!(graph.adjacency_list().get(&b), Some([].as_slice()));
	}

	#[test]
	fn matrix_uses_label_order_past_z() {
		let mut graph = GraphModel::seeded(9);
		let ids: Vec<VertexId> = (0..28).map(|_| graph.add_vertex()).collect();
		graph.add_edge(&ids[27], &ids[0]).unwrap();

		let matrix = graph.adjacency_matrix();
		assert_eq!(matrix.ids().first(), Some(&id("A")));
		assert_eq!(matrix.ids()[25], id("Z"));
		assert_eq!(matrix.ids().last(), Some(&id("AB")));
		assert_eq!(matrix.cell(27, 0), Some(1));
	}

	/// Random edit sequences; the matrix and the list must describe the same
	/// edge set as the model.
	#[test]
	fn matrix_and_list_agree() {
		let mut rng = SmallRng::seed_from_u64(2024);
		for round in 0..50 {
			let mut graph = GraphModel::seeded(round);
			let mut known = Vec::new();
			for _ in 0..60 {
				match rng.random_range(0..10) {
					0..=2 => known.push(graph.add_vertex()),
					3 if !known.is_empty() => {
						let victim = known[rng.random_range(0..known.len())].clone();
						graph.remove_vertex(&victim);
					}
					4 if !known.is_empty() => {
						let from = &known[rng.random_range(0..known.len())];
						let to = &known[rng.random_range(0..known.len())];
						graph.remove_edge(from, to);
					}
					_ if !known.is_empty() => {
						let from = &known[rng.random_range(0..known.len())];
						let to = &known[rng.random_range(0..known.len())];
						let present = graph.contains_vertex(from) && graph.contains_vertex(to);
						assert_eq!(graph.add_edge(from, to).is_ok(), present);
					}
					_ => {}
				}
			}

			let list = graph.adjacency_list();
			let matrix = graph.adjacency_matrix();
			assert_eq!(list.len(), graph.vertex_count());
			assert_eq!(matrix.dim(), graph.vertex_count());

			let mut ones = 0;
			for (row, from) in matrix.ids().iter().enumerate() {
				let successors = list.get(from).unwrap();
				for (col, to) in matrix.ids().iter().enumerate() {
					let cell = matrix.cell(row, col).unwrap();
					assert_eq!(cell == 1, successors.contains(to), "{from} -> {to}");
					ones += usize::from(cell);
				}
			}
			assert_eq!(ones, graph.edge_count());
			for (from, to) in graph.edges() {
				assert!(graph.contains_vertex(from) && graph.contains_vertex(to));
			}
		}
	}
}
