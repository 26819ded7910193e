use leptos::prelude::*;

use crate::graph::VertexId;

/// Keeps `selected` only while it still names one of `ids`.
pub fn reconcile_selection(selected: Option<&VertexId>, ids: &[VertexId]) -> Option<VertexId> {
	selected.filter(|id| ids.contains(id)).cloned()
}

/// Drop-down of the current vertex labels behind a disabled placeholder.
///
/// `None` in `selected` means the placeholder is showing. When the vertex
/// list changes a selection that is still present survives, anything else
/// falls back to the placeholder.
#[component]
pub fn VertexSelect(
	#[prop(into)] ids: Signal<Vec<VertexId>>,
	selected: RwSignal<Option<VertexId>>,
	placeholder: &'static str,
) -> impl IntoView {
	Effect::new(move |_| {
		let ids = ids.get();
		let current = selected.get_untracked();
		let kept = reconcile_selection(current.as_ref(), &ids);
		if kept != current {
			log::debug!("selection {current:?} no longer present, reset to placeholder");
			selected.set(kept);
		}
	});

	let options = move || {
		ids.get()
			.into_iter()
			.map(|id| {
				let label = id.to_string();
				let value = label.clone();
				let is_selected = move || selected.with(|s| s.as_ref() == Some(&id));
				view! {
					<option value=value prop:selected=is_selected>
						{label}
					</option>
				}
			})
			.collect_view()
	};

	view! {
		<select
			class="vertex-select"
			on:change=move |ev| selected.set(VertexId::from_input(&event_target_value(&ev)))
		>
			<option value="" disabled=true prop:selected=move || selected.with(Option::is_none)>
				{placeholder}
			</option>
			{options}
		</select>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn ids(labels: &[&str]) -> Vec<VertexId> {
		labels.iter().copied().map(VertexId::from).collect()
	}

	#[test]
	fn keeps_present_selection() {
		let current = VertexId::from("B");
		assert_eq!(
			reconcile_selection(Some(&current), &ids(&["A", "B"])),
			Some(current)
		);
	}

	#[test]
	fn drops_removed_selection() {
		let current = VertexId::from("C");
		assert_eq!(reconcile_selection(Some(&current), &ids(&["A", "B"])), None);
		assert_eq!(reconcile_selection(Some(&current), &[]), None);
	}

	#[test]
	fn placeholder_stays_placeholder() {
		assert_eq!(reconcile_selection(None, &ids(&["A"])), None);
	}
}
