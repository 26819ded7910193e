use thiserror::Error;

use super::types::VertexId;

/// Graph result type.
pub type GraphResult<T> = Result<T, GraphError>;

/// Failures reported back to the user. Redundant removals and duplicate
/// edges are absorbed by the model and never show up here.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GraphError {
	/// An edge was requested between vertices that are not (all) present.
	#[error("Both vertices must exist to add an edge (missing {})", missing(.from, .to))]
	MissingVertex {
		/// Source label, when it is the one missing.
		from: Option<VertexId>,
		/// Target label, when it is the one missing.
		to: Option<VertexId>,
	},
}

fn missing(from: &Option<VertexId>, to: &Option<VertexId>) -> String {
	[from, to]
		.into_iter()
		.flatten()
		.map(VertexId::as_str)
		.collect::<Vec<_>>()
		.join(", ")
}
