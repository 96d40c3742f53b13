use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, error, info};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, Window};

use super::highlight::HighlightSource;
use super::render;
use super::state::PipelineState;
use crate::error::{PipelineError, Result};

fn window_size(window: &Window) -> Result<(f64, f64)> {
	let dim = |v: std::result::Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64());
	dim(window.inner_width())
		.zip(dim(window.inner_height()))
		.ok_or_else(|| PipelineError::Canvas("window size unavailable".into()))
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d> {
	canvas
		.get_context("2d")
		.ok()
		.flatten()
		.and_then(|ctx| ctx.dyn_into().ok())
		.ok_or_else(|| PipelineError::Canvas("2d context unavailable".into()))
}

/// Bookkeeping for the animation loop so unmounting can cancel the pending frame.
#[derive(Debug, Default)]
struct FrameLoop {
	pending: Option<i32>,
	stopped: bool,
}

impl FrameLoop {
	fn running(&self) -> bool {
		!self.stopped
	}

	fn scheduled(&mut self, id: i32) {
		if !self.stopped {
			self.pending = Some(id);
		}
	}

	/// Stop the loop, returning the frame request to cancel.
	fn stop(&mut self) -> Option<i32> {
		self.stopped = true;
		self.pending.take()
	}
}

fn pointer_position(canvas: &HtmlCanvasElement, ev: &MouseEvent) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	)
}

/// Fullscreen canvas drawing the pipeline diagram.
///
/// `presentation` overrides hover highlighting while it holds a source.
#[component]
pub fn PipelineCanvas(#[prop(into)] presentation: Signal<Option<HighlightSource>>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let state: Rc<RefCell<Option<PipelineState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let frames: Rc<RefCell<FrameLoop>> = Rc::new(RefCell::new(FrameLoop::default()));
	let (state_init, animate_init, resize_cb_init, frames_init) =
		(state.clone(), animate.clone(), resize_cb.clone(), frames.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("No window available, diagram not mounted");
			return;
		};
		let setup = window_size(&window).and_then(|size| Ok((size, context_2d(&canvas)?)));
		let ((w, h), ctx) = match setup {
			Ok(setup) => setup,
			Err(e) => {
				error!("{e}");
				return;
			}
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		ctx.set_font(&render::title_font());
		let measure = |text: &str| {
			ctx.measure_text(text)
				.map(|m| m.width())
				.unwrap_or(text.len() as f64 * 8.0)
		};
		let mut initial = PipelineState::new(measure, w, h);
		initial.set_presentation(presentation.get_untracked());
		*state_init.borrow_mut() = Some(initial);
		info!("Diagram mounted at {w}x{h}");

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let Ok((nw, nh)) = window_size(&win) else {
				return;
			};
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner, frames_anim) =
			(state_init.clone(), animate_init.clone(), frames_init.clone());
		let mut last_frame: Option<f64> = None;
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if !frames_anim.borrow().running() {
				return;
			}
			let now = js_sys::Date::now();
			// Clamp so a backgrounded tab doesn't jump every transition to its end
			let dt = last_frame.map_or(0.016, |prev| ((now - prev) / 1000.0).min(0.1));
			last_frame = Some(now);
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(dt);
				render::render(s, &ctx);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), &*animate_inner.borrow()) {
				if let Ok(id) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
					frames_anim.borrow_mut().scheduled(id);
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frames_init.borrow_mut().scheduled(id);
			}
		}
	});

	let teardown = StoredValue::new_local((frames, animate, resize_cb));
	on_cleanup(move || {
		teardown.try_with_value(|(frames, animate, resize_cb)| {
			let Some(window) = web_sys::window() else {
				return;
			};
			if let Some(id) = frames.borrow_mut().stop() {
				let _ = window.cancel_animation_frame(id);
			}
			if let Some(cb) = resize_cb.borrow_mut().take() {
				let _ = window
					.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
			animate.borrow_mut().take();
			debug!("Diagram unmounted");
		});
	});

	let state_pr = state.clone();
	Effect::new(move |_| {
		let source = presentation.get();
		if let Some(ref mut s) = *state_pr.borrow_mut() {
			s.set_presentation(source);
		}
	});

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let (x, y) = pointer_position(&canvas, &ev);

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			let hovered = s.node_at_position(x, y);
			s.set_hover(hovered);
			let cursor = if hovered.is_some() { "pointer" } else { "default" };
			let _ = web_sys::HtmlElement::style(&canvas).set_property("cursor", cursor);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.set_hover(None);
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="pipeline-canvas"
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			style="display: block;"
		/>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn stopping_the_loop_hands_back_the_pending_frame() {
		let mut frames = FrameLoop::default();
		assert!(frames.running());
		frames.scheduled(7);
		frames.scheduled(8);
		assert_eq!(frames.stop(), Some(8));
		assert!(!frames.running());
		assert_eq!(frames.stop(), None);
	}

	#[test]
	fn frames_requested_after_stop_are_not_tracked() {
		let mut frames = FrameLoop::default();
		frames.stop();
		frames.scheduled(3);
		assert_eq!(frames.stop(), None);
	}
}
