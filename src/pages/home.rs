use leptos::prelude::*;
use web_sys::MouseEvent;

use crate::components::adjacency::AdjacencyPanel;
use crate::components::controls::Controls;
use crate::components::graph_canvas::GraphCanvas;
use crate::config::EditorConfig;
use crate::graph::GraphError;

/// Default Home Page
#[component]
pub fn Home(#[prop(optional)] config: EditorConfig) -> impl IntoView {
	// The page owns the one model instance; components only get the signal
	let graph = RwSignal::new(config.build_model());
	let error = RwSignal::new(None::<GraphError>);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="editor">
				<h1>"Directed Graph Editor"</h1>
				<ErrorBanner error=error />
				<Controls graph=graph error=error />
				<div class="editor-body">
					<GraphCanvas
						graph=graph
						width=config.width
						height=config.height
						vertex_radius=config.vertex_radius
					/>
					<AdjacencyPanel graph=graph />
				</div>
			</div>
		</ErrorBoundary>
	}
}

/// Dismissible message for the last rejected edit.
#[component]
fn ErrorBanner(error: RwSignal<Option<GraphError>>) -> impl IntoView {
	move || {
		error.get().map(|err| {
			view! {
				<div class="error-banner" role="alert">
					<span>{err.to_string()}</span>
					<button on:click=move |_: MouseEvent| error.set(None)>"Dismiss"</button>
				</div>
			}
		})
	}
}
