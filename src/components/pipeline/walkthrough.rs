use log::debug;

use super::data::STEPS;
use super::highlight::HighlightSource;
use super::types::Step;

/// Presentation mode: a scripted slideshow over [`STEPS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Walkthrough {
	pub active: bool,
	pub step: usize,
	pub playing: bool,
}

impl Walkthrough {
	pub fn len() -> usize {
		STEPS.len()
	}

	fn last() -> usize {
		Self::len().saturating_sub(1)
	}

	pub fn start(&mut self) {
		self.start_at(0);
	}

	pub fn start_at(&mut self, step: usize) {
		self.active = true;
		self.playing = false;
		self.step = step.min(Self::last());
		debug!("Presentation started at step {}", self.step + 1);
	}

	pub fn exit(&mut self) {
		*self = Self::default();
		debug!("Presentation closed");
	}

	pub fn next(&mut self) {
		self.step = (self.step + 1).min(Self::last());
	}

	pub fn prev(&mut self) {
		self.step = self.step.saturating_sub(1);
	}

	pub fn toggle_play(&mut self) {
		self.playing = !self.playing;
	}

	/// Autoplay tick: advance one step, or stop on the last one.
	pub fn on_interval(&mut self) {
		if !self.active || !self.playing {
			return;
		}
		if self.step >= Self::last() {
			self.playing = false;
			debug!("Presentation reached the final step");
		} else {
			self.step += 1;
		}
	}

	pub fn is_first(&self) -> bool {
		self.step == 0
	}

	pub fn is_last(&self) -> bool {
		self.step >= Self::last()
	}

	pub fn autoplay_running(&self) -> bool {
		self.active && self.playing
	}

	pub fn current(&self) -> Option<&'static Step> {
		self.active.then(|| STEPS.get(self.step)).flatten()
	}

	pub fn progress(&self) -> f64 {
		(self.step + 1) as f64 / Self::len() as f64
	}

	pub fn percent(&self) -> u32 {
		(self.progress() * 100.0).round() as u32
	}

	/// Highlight source while presenting; `None` hands control back to hover.
	pub fn highlight(&self) -> Option<HighlightSource> {
		self.active.then_some(HighlightSource::Step(self.step))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn start_resets_to_first_step() {
		let mut w = Walkthrough {
			step: 5,
			..Default::default()
		};
		w.start();
		assert!(w.active);
		assert!(!w.playing);
		assert_eq!(w.step, 0);
		assert_eq!(w.current().unwrap().title, "Step 1: User Entry Point");
	}

	#[test]
	fn inactive_has_no_step() {
		let w = Walkthrough::default();
		assert!(w.current().is_none());
		assert!(w.highlight().is_none());
	}

	#[test]
	fn navigation_is_clamped() {
		let mut w = Walkthrough::default();
		w.start();
		w.prev();
		assert_eq!(w.step, 0);
		assert!(w.is_first());
		for _ in 0..50 {
			w.next();
		}
		assert_eq!(w.step, Walkthrough::len() - 1);
		assert!(w.is_last());
	}

	#[test]
	fn autoplay_advances_one_step_per_interval_and_stops_at_end() {
		let mut w = Walkthrough::default();
		w.start();
		w.toggle_play();
		for expected in 1..Walkthrough::len() {
			w.on_interval();
			assert_eq!(w.step, expected);
			assert!(w.playing);
		}
		w.on_interval();
		assert_eq!(w.step, Walkthrough::len() - 1);
		assert!(!w.playing);
		assert!(!w.autoplay_running());
	}

	#[test]
	fn interval_is_ignored_when_paused() {
		let mut w = Walkthrough::default();
		w.start();
		w.on_interval();
		assert_eq!(w.step, 0);
	}

	#[test]
	fn exit_stops_and_resets() {
		let mut w = Walkthrough::default();
		w.start_at(7);
		w.toggle_play();
		w.exit();
		assert_eq!(w, Walkthrough::default());
	}

	#[test]
	fn start_at_clamps_out_of_range() {
		let mut w = Walkthrough::default();
		w.start_at(1000);
		assert!(w.is_last());
	}

	#[test]
	fn progress_reports_percentage() {
		let mut w = Walkthrough::default();
		w.start();
		assert_eq!(w.percent(), 7);
		w.start_at(6);
		assert_eq!(w.percent(), 50);
		w.start_at(13);
		assert_eq!(w.percent(), 100);
	}
}
