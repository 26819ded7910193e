use leptos::prelude::*;
use log::info;
use web_sys::MouseEvent;

use super::vertex_select::VertexSelect;
use crate::graph::{GraphError, GraphModel, VertexId};

/// Buttons and drop-downs editing the graph. A rejected edge is written
/// to `error` so the page can show it.
#[component]
pub fn Controls(graph: RwSignal<GraphModel>, error: RwSignal<Option<GraphError>>) -> impl IntoView {
	let ids = Memo::new(move |_| graph.with(GraphModel::sorted_ids));

	let remove_target = RwSignal::new(None::<VertexId>);
	let (add_from, add_to) = (RwSignal::new(None::<VertexId>), RwSignal::new(None::<VertexId>));
	let (remove_from, remove_to) = (RwSignal::new(None::<VertexId>), RwSignal::new(None::<VertexId>));

	let on_add_vertex = move |_: MouseEvent| {
		if let Some(id) = graph.try_update(GraphModel::add_vertex) {
			info!("vertex {id} added");
		}
	};

	let on_remove_vertex = move |_: MouseEvent| {
		let Some(id) = remove_target.get_untracked() else {
			return;
		};
		graph.update(|g| {
			g.remove_vertex(&id);
		});
	};

	let on_add_edge = move |_: MouseEvent| {
		let (Some(from), Some(to)) = (add_from.get_untracked(), add_to.get_untracked()) else {
			return;
		};
		match graph.try_update(|g| g.add_edge(&from, &to)) {
			Some(Err(err)) => error.set(Some(err)),
			_ => error.set(None),
		}
		add_from.set(None);
		add_to.set(None);
	};

	let on_remove_edge = move |_: MouseEvent| {
		let (Some(from), Some(to)) = (remove_from.get_untracked(), remove_to.get_untracked()) else {
			return;
		};
		graph.update(|g| {
			g.remove_edge(&from, &to);
		});
		remove_from.set(None);
		remove_to.set(None);
	};

	view! {
		<div class="controls">
			<div class="control-group">
				<button on:click=on_add_vertex>"Add Vertex"</button>
			</div>
			<div class="control-group">
				<VertexSelect ids=ids selected=remove_target placeholder="Select Vertex" />
				<button on:click=on_remove_vertex>"Remove Vertex"</button>
			</div>
			<div class="control-group">
				<VertexSelect ids=ids selected=add_from placeholder="From Vertex" />
				<VertexSelect ids=ids selected=add_to placeholder="To Vertex" />
				<button on:click=on_add_edge>"Add Edge"</button>
			</div>
			<div class="control-group">
				<VertexSelect ids=ids selected=remove_from placeholder="From Vertex" />
				<VertexSelect ids=ids selected=remove_to placeholder="To Vertex" />
				<button on:click=on_remove_edge>"Remove Edge"</button>
			</div>
		</div>
	}
}
