use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::graph::{AdjacencyList, AdjacencyMatrix, GraphModel};

/// Which textual representation the panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdjacencyView {
	#[default]
	List,
	Matrix,
}

/// Adjacency list and matrix, one visible at a time behind two toggle buttons.
#[component]
pub fn AdjacencyPanel(graph: RwSignal<GraphModel>) -> impl IntoView {
	let shown = RwSignal::new(AdjacencyView::default());
	let list = Memo::new(move |_| graph.with(GraphModel::adjacency_list));
	let matrix = Memo::new(move |_| graph.with(GraphModel::adjacency_matrix));

	view! {
		<div class="adjacency-panel">
			<div class="view-toggle">
				<button
					class:active=move || shown.get() == AdjacencyView::List
					on:click=move |_: MouseEvent| shown.set(AdjacencyView::List)
				>
					"Adjacency List"
				</button>
				<button
					class:active=move || shown.get() == AdjacencyView::Matrix
					on:click=move |_: MouseEvent| shown.set(AdjacencyView::Matrix)
				>
					"Adjacency Matrix"
				</button>
			</div>
			<div class="list-view" class:hidden=move || shown.get() != AdjacencyView::List>
				{move || list.with(list_view)}
			</div>
			<div class="matrix-view" class:hidden=move || shown.get() != AdjacencyView::Matrix>
				{move || matrix.with(matrix_view)}
			</div>
		</div>
	}
}

fn empty_view() -> AnyView {
	view! { <p>"Graph is empty."</p> }.into_any()
}

fn list_view(list: &AdjacencyList) -> AnyView {
	if list.is_empty() {
		return empty_view();
	}
	let items = list
		.iter()
		.map(|(id, successors)| {
			let (id, joined) = (
				id.to_string(),
				successors
					.iter()
					.map(|s| s.as_str())
					.collect::<Vec<_>>()
					.join(", "),
			);
			view! {
				<li>
					<strong>{id}</strong>
					{format!(" → [ {joined} ]")}
				</li>
			}
		})
		.collect_view();
	view! { <ul>{items}</ul> }.into_any()
}

fn matrix_view(matrix: &AdjacencyMatrix) -> AnyView {
	if matrix.is_empty() {
		return empty_view();
	}
	let header = matrix
		.ids()
		.iter()
		.map(|id| view! { <th>{id.to_string()}</th> })
		.collect_view();
	let rows = matrix
		.rows()
		.map(|(id, cells)| {
			let cells = cells
				.iter()
				.map(|cell| view! { <td>{cell.to_string()}</td> })
				.collect_view();
			view! {
				<tr>
					<th>{id.to_string()}</th>
					{cells}
				</tr>
			}
		})
		.collect_view();

	view! {
		<table>
			<tr>
				<th>{"\u{a0}"}</th>
				{header}
			</tr>
			{rows}
		</table>
	}
	.into_any()
}
