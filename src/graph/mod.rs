//! Directed graph model edited by the UI, and the views derived from it.

mod error;
mod label;
mod model;
mod types;
mod views;

pub use error::{GraphError, GraphResult};
pub use label::LabelScheme;
pub use model::GraphModel;
pub use types::{Bounds, Position, VertexId};
pub use views::{AdjacencyList, AdjacencyMatrix};
