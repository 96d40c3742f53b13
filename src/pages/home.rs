use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::pipeline::{
	HelpPanel, Legend, PipelineCanvas, PresentationControls, Walkthrough, data,
};

/// `?step=N` opens the walkthrough at step N (1-based).
fn requested_step(raw: Option<String>) -> Option<usize> {
	raw?.trim().parse::<usize>().ok().map(|n| n.saturating_sub(1))
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let walkthrough = RwSignal::new(Walkthrough::default());
	let query = use_query_map();
	if let Some(step) = requested_step(query.with_untracked(|q| q.get("step"))) {
		walkthrough.update(|w| w.start_at(step));
	}
	let presentation = Signal::derive(move || walkthrough.with(|w| w.highlight()));

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
			{data::validate()
				.map(|()| {
					view! {
						<div class="fullscreen-diagram">
							<PipelineCanvas presentation=presentation />
							<div class="diagram-overlay">
								<h1>"Recruitment Pipeline Workflow"</h1>
							</div>
							<PresentationControls walkthrough=walkthrough />
							<HelpPanel walkthrough=walkthrough />
							<Legend />
						</div>
					}
				})}
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn step_query_is_one_based() {
		assert_eq!(requested_step(Some("3".into())), Some(2));
		assert_eq!(requested_step(Some(" 1 ".into())), Some(0));
		assert_eq!(requested_step(Some("0".into())), Some(0));
		assert_eq!(requested_step(Some("abc".into())), None);
		assert_eq!(requested_step(None), None);
	}
}
