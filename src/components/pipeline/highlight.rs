use std::collections::HashSet;

use super::data::{self, STEPS};
use super::types::ArrowSpec;

/// What currently decides the highlighted nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightSource {
	#[default]
	None,
	Hover(&'static str),
	/// Presentation step index; replaces hover entirely.
	Step(usize),
}

pub fn highlighted_nodes(source: HighlightSource) -> HashSet<&'static str> {
	match source {
		HighlightSource::None => HashSet::new(),
		HighlightSource::Step(i) => STEPS
			.get(i)
			.map(|s| s.nodes.iter().copied().collect())
			.unwrap_or_default(),
		HighlightSource::Hover(id) => std::iter::once(id)
			.chain(data::successors(id).iter().copied())
			.chain(data::predecessors(id))
			.collect(),
	}
}

pub fn arrow_highlighted(arrow: &ArrowSpec, highlighted: &HashSet<&'static str>) -> bool {
	highlighted.contains(arrow.from) && highlighted.contains(arrow.to)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::pipeline::data::ARROWS;

	fn set(ids: &[&'static str]) -> HashSet<&'static str> {
		ids.iter().copied().collect()
	}

	#[test]
	fn nothing_highlighted_without_source() {
		assert!(highlighted_nodes(HighlightSource::None).is_empty());
	}

	#[test]
	fn hover_highlights_direct_neighbors() {
		let hl = highlighted_nodes(HighlightSource::Hover("Candidate"));
		assert_eq!(
			hl,
			set(&["Candidate", "Profile", "Dashboard", "Upload", "History", "Users"])
		);

		let hl = highlighted_nodes(HighlightSource::Hover("Chatbot"));
		assert_eq!(hl, set(&["Chatbot", "Candidates"]));
	}

	#[test]
	fn hover_does_not_reach_two_hops() {
		let hl = highlighted_nodes(HighlightSource::Hover("Users"));
		assert!(hl.contains("Recruiter"));
		assert!(!hl.contains("Candidates"));
		assert!(!hl.contains("Upload"));
	}

	#[test]
	fn step_uses_literal_node_list() {
		let hl = highlighted_nodes(HighlightSource::Step(2));
		assert_eq!(hl, set(&["Candidate", "Profile", "Dashboard"]));
		assert!(highlighted_nodes(HighlightSource::Step(99)).is_empty());
	}

	#[test]
	fn arrows_need_both_ends() {
		let hl = highlighted_nodes(HighlightSource::Hover("Upload"));
		let lit: Vec<_> = ARROWS
			.iter()
			.filter(|a| arrow_highlighted(a, &hl))
			.map(|a| (a.from, a.to))
			.collect();
		assert_eq!(
			lit,
			vec![
				("Candidate", "Upload"),
				("Upload", "Parsed Result"),
				("Upload", "AI Insights"),
			]
		);
	}

	#[test]
	fn hover_on_sibling_lights_shared_parent_edges_only() {
		// Profile and Dashboard are both children of Candidate; the edge between
		// Candidate and Dashboard stays dark when hovering Profile.
		let hl = highlighted_nodes(HighlightSource::Hover("Profile"));
		let dashboard = ARROWS.iter().find(|a| a.to == "Dashboard").unwrap();
		assert!(!arrow_highlighted(dashboard, &hl));
	}
}
