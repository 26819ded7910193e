pub mod adjacency;
pub mod controls;
pub mod graph_canvas;
pub mod vertex_select;
