use leptos::prelude::*;

use super::render::{self, EdgeShape};
use crate::graph::GraphModel;

/// SVG drawing of the graph: edges first, vertices with their labels on top.
#[component]
pub fn GraphCanvas(
	graph: RwSignal<GraphModel>,
	#[prop(default = 800.0)] width: f64,
	#[prop(default = 500.0)] height: f64,
	#[prop(default = 15.0)] vertex_radius: f64,
) -> impl IntoView {
	let edges = move || graph.with(|g| edge_views(g, vertex_radius));
	let vertices = move || graph.with(|g| vertex_views(g, vertex_radius));
	let view_box = format!("0 0 {width} {height}");
	let (width, height) = (width.to_string(), height.to_string());

	view! {
		<svg class="graph-svg" width=width height=height viewBox=view_box>
			<g class="edges">{edges}</g>
			<g class="vertices">{vertices}</g>
		</svg>
	}
}

fn edge_views(graph: &GraphModel, radius: f64) -> Vec<AnyView> {
	graph
		.edges()
		.filter_map(|(from, to)| {
			let shape = render::edge_shape(
				graph.position(from)?,
				graph.position(to)?,
				from == to,
				radius,
			)?;
			Some(match shape {
				EdgeShape::Line { start, end, head } => {
					let (x1, y1, x2, y2) = (
						start.x.to_string(),
						start.y.to_string(),
						end.x.to_string(),
						end.y.to_string(),
					);
					let head = render::points(&head);
					view! {
						<g class="edge">
							<line x1=x1 y1=y1 x2=x2 y2=y2 />
							<polygon class="arrowhead" points=head />
						</g>
					}
					.into_any()
				}
				EdgeShape::Loop { path, head } => {
					let head = render::points(&head);
					view! {
						<g class="edge self-loop">
							<path d=path fill="none" />
							<polygon class="arrowhead" points=head />
						</g>
					}
					.into_any()
				}
			})
		})
		.collect()
}

fn vertex_views(graph: &GraphModel, radius: f64) -> Vec<AnyView> {
	graph
		.vertices()
		.map(|(id, position)| {
			let (x, y, label) = (position.x.to_string(), position.y.to_string(), id.to_string());
			let (cx, cy, r) = (x.clone(), y.clone(), radius.to_string());
			view! {
				<g class="vertex-group">
					<circle class="vertex" cx=cx cy=cy r=r />
					<text
						class="vertex-label"
						x=x
						y=y
						text-anchor="middle"
						dominant-baseline="central"
					>
						{label}
					</text>
				</g>
			}
			.into_any()
		})
		.collect()
}
