use std::time::Duration;

use leptos::prelude::*;
use log::{error, info};

use super::config::AUTOPLAY_INTERVAL_MS;
use super::types::Category;
use super::walkthrough::Walkthrough;

#[component]
pub fn Legend() -> impl IntoView {
	view! {
		<div class="panel legend">
			<h3>"Legend"</h3>
			<div class="legend-items">
				{Category::ALL
					.into_iter()
					.map(|category| {
						view! {
							<div class="legend-item">
								<div class="legend-swatch" style:background=category.css_gradient()></div>
								<span>{category.name()}</span>
							</div>
						}
					})
					.collect_view()}
			</div>
		</div>
	}
}

fn help_visible(open: bool, walkthrough: &Walkthrough) -> bool {
	open && !walkthrough.active
}

/// Usage hints, closable and hidden while presenting.
#[component]
pub fn HelpPanel(
	walkthrough: RwSignal<Walkthrough>,
	#[prop(default = true)] show_help: bool,
) -> impl IntoView {
	let open = RwSignal::new(show_help);
	let visible = move || walkthrough.with(|w| help_visible(open.get(), w));

	view! {
		<Show when=visible>
			<div class="panel help">
				<button class="panel-close" on:click=move |_| open.set(false)>
					"✕"
				</button>
				<h3>"💡 How to Use"</h3>
				<ul>
					<li>"• Hover over nodes to see connections"</li>
					<li>"• Watch the animated data flow"</li>
					<li>"• Color-coded by category"</li>
					<li>"• Click \"Start Presentation\" for guided tour"</li>
				</ul>
			</div>
		</Show>
	}
}

/// Start button plus the walkthrough panel with its autoplay timer.
#[component]
pub fn PresentationControls(
	walkthrough: RwSignal<Walkthrough>,
	#[prop(default = AUTOPLAY_INTERVAL_MS)] autoplay_ms: u32,
) -> impl IntoView {
	let running = Memo::new(move |_| walkthrough.with(|w| w.autoplay_running()));
	let timer = StoredValue::new(None::<IntervalHandle>);
	let stop_timer = move || {
		if let Some(handle) = timer.get_value() {
			handle.clear();
			timer.set_value(None);
		}
	};

	Effect::new(move |_| {
		let running = running.get();
		stop_timer();
		if !running {
			return;
		}
		let tick = move || walkthrough.update(|w| w.on_interval());
		match set_interval_with_handle(tick, Duration::from_millis(autoplay_ms.into())) {
			Ok(handle) => timer.set_value(Some(handle)),
			Err(e) => error!("Failed to start autoplay timer: {e:?}"),
		}
	});
	on_cleanup(stop_timer);

	Effect::new(move |prev: Option<usize>| {
		let step = walkthrough.with(|w| w.step);
		if walkthrough.with_untracked(|w| w.active) && prev != Some(step) {
			info!("Presentation step {} of {}", step + 1, Walkthrough::len());
		}
		step
	});

	let active = move || walkthrough.with(|w| w.active);
	let title = move || walkthrough.with(|w| w.current().map(|s| s.title).unwrap_or_default());
	let description =
		move || walkthrough.with(|w| w.current().map(|s| s.description).unwrap_or_default());
	let counter = move || {
		walkthrough.with(|w| format!("Step {} of {}", w.step + 1, Walkthrough::len()))
	};
	let percent = move || walkthrough.with(|w| format!("{}%", w.percent()));
	let bar_width = move || walkthrough.with(|w| format!("{}%", w.progress() * 100.0));
	let is_first = move || walkthrough.with(|w| w.is_first());
	let is_last = move || walkthrough.with(|w| w.is_last());
	let playing = move || walkthrough.with(|w| w.playing);

	view! {
		<Show
			when=active
			fallback=move || {
				view! {
					<button
						class="btn start-presentation"
						on:click=move |_| walkthrough.update(|w| w.start())
					>
						"▶ Start Presentation"
					</button>
				}
			}
		>
			<div class="presentation-panel">
				<div class="presentation-header">
					<div class="presentation-text">
						<h3>{title}</h3>
						<p>{description}</p>
					</div>
					<button class="panel-close" on:click=move |_| walkthrough.update(|w| w.exit())>
						"✕"
					</button>
				</div>

				<div class="progress">
					<div class="progress-track">
						<div class="progress-fill" style:width=bar_width></div>
					</div>
					<div class="progress-labels">
						<span>{counter}</span>
						<span>{percent}</span>
					</div>
				</div>

				<div class="presentation-buttons">
					<button
						class="btn"
						disabled=is_first
						on:click=move |_| walkthrough.update(|w| w.prev())
					>
						"⏮ Prev"
					</button>
					<button class="btn" on:click=move |_| walkthrough.update(|w| w.toggle_play())>
						{move || if playing() { "⏸ Pause" } else { "▶ Play" }}
					</button>
					<button
						class="btn"
						disabled=is_last
						on:click=move |_| walkthrough.update(|w| w.next())
					>
						"Next ⏭"
					</button>
				</div>
			</div>
		</Show>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn help_follows_show_help_and_hides_while_presenting() {
		let mut w = Walkthrough::default();
		assert!(help_visible(true, &w));
		assert!(!help_visible(false, &w));

		w.start();
		assert!(!help_visible(true, &w));
		w.exit();
		assert!(help_visible(true, &w));
	}
}
