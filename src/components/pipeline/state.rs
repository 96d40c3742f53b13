use std::collections::HashSet;

use log::debug;

use super::config::*;
use super::data::{ARROWS, NODES};
use super::highlight::{self, HighlightSource};
use super::types::{ArrowSpec, NodeSpec};

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}

/// Move `current` toward `target` by at most `step`.
fn approach(current: f64, target: f64, step: f64) -> f64 {
	if current < target {
		(current + step).min(target)
	} else {
		(current - step).max(target)
	}
}

/// Position within a repeating cycle, in `[0, 1)`.
pub fn phase(time: f64, period: f64) -> f64 {
	(time / period).rem_euclid(1.0)
}

#[derive(Clone, Debug)]
pub struct NodeVisual {
	pub spec: &'static NodeSpec,
	pub text_width: f64,
	pub width: f64,
	pub highlight_t: f64,
}

impl NodeVisual {
	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.spec.x
			&& x <= self.spec.x + self.width
			&& y >= self.spec.y
			&& y <= self.spec.y + NODE_HEIGHT
	}

	pub fn center(&self) -> (f64, f64) {
		(
			self.spec.x + self.width / 2.0,
			self.spec.y + NODE_HEIGHT / 2.0,
		)
	}
}

#[derive(Clone, Debug)]
pub struct ArrowVisual {
	pub spec: &'static ArrowSpec,
	pub highlight_t: f64,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
}

pub struct PipelineState {
	pub nodes: Vec<NodeVisual>,
	pub arrows: Vec<ArrowVisual>,
	pub transform: ViewTransform,
	pub hovered: Option<&'static str>,
	pub width: f64,
	pub height: f64,
	/// Seconds since mount; drives entrance and looping animations.
	pub elapsed: f64,
	presentation: Option<HighlightSource>,
	highlighted: HashSet<&'static str>,
}

impl PipelineState {
	/// `measure` returns the rendered width of a node title.
	pub fn new(measure: impl Fn(&str) -> f64, width: f64, height: f64) -> Self {
		let nodes = NODES
			.iter()
			.map(|spec| {
				let text_width = measure(spec.title);
				NodeVisual {
					spec,
					text_width,
					width: node_width(text_width),
					highlight_t: 0.0,
				}
			})
			.collect();
		let arrows = ARROWS
			.iter()
			.map(|spec| ArrowVisual {
				spec,
				highlight_t: 0.0,
			})
			.collect();

		let mut state = Self {
			nodes,
			arrows,
			transform: ViewTransform::default(),
			hovered: None,
			width,
			height,
			elapsed: 0.0,
			presentation: None,
			highlighted: HashSet::new(),
		};
		state.resize(width, height);
		state
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.transform = ViewTransform {
			x: ((width - DIAGRAM_WIDTH) / 2.0).max(DIAGRAM_MIN_LEFT),
			y: DIAGRAM_TOP,
		};
	}

	pub fn screen_to_diagram(&self, sx: f64, sy: f64) -> (f64, f64) {
		(sx - self.transform.x, sy - self.transform.y)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<&'static str> {
		let (x, y) = self.screen_to_diagram(sx, sy);
		// Later nodes are drawn on top
		self.nodes
			.iter()
			.rev()
			.find(|n| n.contains(x, y))
			.map(|n| n.spec.id)
	}

	pub fn source(&self) -> HighlightSource {
		match (self.presentation, self.hovered) {
			(Some(source), _) => source,
			(None, Some(id)) => HighlightSource::Hover(id),
			(None, None) => HighlightSource::None,
		}
	}

	fn refresh_highlight(&mut self) {
		self.highlighted = highlight::highlighted_nodes(self.source());
	}

	/// Pointer hover; ignored while a presentation drives the highlight.
	pub fn set_hover(&mut self, node: Option<&'static str>) {
		if self.presentation.is_some() || self.hovered == node {
			return;
		}
		self.hovered = node;
		self.refresh_highlight();
	}

	pub fn set_presentation(&mut self, source: Option<HighlightSource>) {
		if self.presentation == source {
			return;
		}
		debug!("Highlight source changed to {:?}", source);
		self.presentation = source;
		if source.is_some() {
			self.hovered = None;
		}
		self.refresh_highlight();
	}

	pub fn tick(&mut self, dt: f64) {
		self.elapsed += dt;
		let step = dt / NODE_TRANSITION;
		for node in &mut self.nodes {
			let target = if self.highlighted.contains(node.spec.id) {
				1.0
			} else {
				0.0
			};
			node.highlight_t = approach(node.highlight_t, target, step);
		}
		let step = dt / ARROW_GROW;
		for arrow in &mut self.arrows {
			let target = if highlight::arrow_highlighted(arrow.spec, &self.highlighted) {
				1.0
			} else {
				0.0
			};
			arrow.highlight_t = approach(arrow.highlight_t, target, step);
		}
	}

	fn since(&self, delay: f64, duration: f64) -> f64 {
		ease_out_cubic(((self.elapsed - delay) / duration).clamp(0.0, 1.0))
	}

	/// Entrance progress of a node, 0 before its delay and 1 once settled.
	pub fn node_appear(&self, node: &NodeVisual) -> f64 {
		self.since(node.spec.delay, NODE_TRANSITION)
	}

	/// Drawn fraction of an arrow's length.
	pub fn arrow_grow(&self, arrow: &ArrowVisual) -> f64 {
		self.since(arrow.spec.delay, ARROW_GROW)
	}

	pub fn arrow_head(&self, arrow: &ArrowVisual) -> f64 {
		self.since(arrow.spec.delay, ARROW_HEAD_FADE)
	}
}

pub fn node_width(text_width: f64) -> f64 {
	(NODE_PAD_X * 2.0 + NODE_ICON + NODE_GAP + text_width).max(NODE_MIN_WIDTH)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> PipelineState {
		PipelineState::new(|s| s.len() as f64 * 8.0, 1600.0, 900.0)
	}

	#[test]
	fn node_width_respects_minimum() {
		assert_eq!(node_width(10.0), NODE_MIN_WIDTH);
		assert_eq!(node_width(72.0), NODE_MIN_WIDTH);
		assert_eq!(node_width(73.0), 141.0);
		assert_eq!(node_width(100.0), 168.0);
	}

	#[test]
	fn diagram_is_centered_with_left_margin() {
		let mut s = state();
		assert_eq!(s.transform.x, 175.0);
		assert_eq!(s.transform.y, DIAGRAM_TOP);
		s.resize(800.0, 600.0);
		assert_eq!(s.transform.x, DIAGRAM_MIN_LEFT);
	}

	#[test]
	fn hit_test_finds_node_under_pointer() {
		let s = state();
		let (ox, oy) = (s.transform.x, s.transform.y);
		assert_eq!(s.node_at_position(ox + 330.0, oy + 100.0), Some("Candidate"));
		assert_eq!(s.node_at_position(ox + 1110.0, oy + 260.0), Some("Profile-R"));
		assert_eq!(s.node_at_position(ox + 600.0, oy + 350.0), None);
	}

	#[test]
	fn hover_is_ignored_during_presentation() {
		let mut s = state();
		s.set_hover(Some("Upload"));
		assert!(s.highlighted.contains("Candidate"));

		s.set_presentation(Some(HighlightSource::Step(0)));
		assert_eq!(s.hovered, None);
		s.set_hover(Some("Chatbot"));
		assert_eq!(s.hovered, None);
		assert!(s.highlighted.contains("Users"));
		assert!(!s.highlighted.contains("Chatbot"));

		s.set_presentation(None);
		assert_eq!(s.source(), HighlightSource::None);
	}

	#[test]
	fn highlight_eases_in_and_out() {
		let mut s = state();
		s.set_hover(Some("Chatbot"));
		s.tick(NODE_TRANSITION / 2.0);
		let chatbot = s.nodes.iter().find(|n| n.spec.id == "Chatbot").unwrap();
		assert!((chatbot.highlight_t - 0.5).abs() < 1e-9);

		s.tick(1.0);
		let chatbot = s.nodes.iter().find(|n| n.spec.id == "Chatbot").unwrap();
		assert_eq!(chatbot.highlight_t, 1.0);

		s.set_hover(None);
		s.tick(1.0);
		assert!(s.nodes.iter().all(|n| n.highlight_t == 0.0));
		assert!(s.arrows.iter().all(|a| a.highlight_t == 0.0));
	}

	#[test]
	fn entrance_follows_delay() {
		let mut s = state();
		let recruiter = s.nodes.iter().position(|n| n.spec.id == "Recruiter").unwrap();
		s.tick(0.5);
		assert_eq!(s.node_appear(&s.nodes[recruiter]), 0.0);
		s.tick(0.5);
		assert_eq!(s.node_appear(&s.nodes[recruiter]), 1.0);
		assert_eq!(s.arrow_grow(&s.arrows[0]), 1.0);
	}

	#[test]
	fn phase_wraps() {
		assert!((phase(2.5, 2.0) - 0.25).abs() < 1e-9);
		assert_eq!(phase(0.0, 1.0), 0.0);
	}
}
