use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::config::*;
use super::state::{ArrowVisual, NodeVisual, PipelineState, ease_out_cubic, phase};

pub const NODE_FONT_FAMILY: &str =
	"-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";

pub fn title_font() -> String {
	format!("600 {NODE_FONT}px {NODE_FONT_FAMILY}")
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Rgba(f64, f64, f64, f64);

impl Rgba {
	const ARROW_IDLE: Rgba = Rgba(75.0, 85.0, 99.0, 0.6);
	const ARROW_LIT: Rgba = Rgba(34.0, 211.0, 238.0, 1.0);
	const BORDER_IDLE: Rgba = Rgba(75.0, 85.0, 99.0, 1.0);
	const TEXT_IDLE: Rgba = Rgba(209.0, 213.0, 219.0, 1.0);
	const WHITE: Rgba = Rgba(255.0, 255.0, 255.0, 1.0);

	fn mix(self, other: Rgba, t: f64) -> Rgba {
		let lerp = |a: f64, b: f64| a + (b - a) * t;
		Rgba(
			lerp(self.0, other.0),
			lerp(self.1, other.1),
			lerp(self.2, other.2),
			lerp(self.3, other.3),
		)
	}

	fn css(self) -> String {
		format!(
			"rgba({}, {}, {}, {:.3})",
			self.0.round(),
			self.1.round(),
			self.2.round(),
			self.3
		)
	}
}

pub fn render(state: &PipelineState, ctx: &CanvasRenderingContext2d) {
	draw_background(state, ctx);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	for arrow in &state.arrows {
		draw_arrow(state, arrow, ctx);
	}
	for node in &state.nodes {
		draw_node(state, node, ctx);
	}
	ctx.restore();
}

fn draw_background(state: &PipelineState, ctx: &CanvasRenderingContext2d) {
	let (w, h) = (state.width, state.height);
	let gradient = ctx.create_linear_gradient(0.0, 0.0, w, h);
	let _ = gradient.add_color_stop(0.0, "#0a0e1a");
	let _ = gradient.add_color_stop(0.5, "#1a1f3a");
	let _ = gradient.add_color_stop(1.0, "#0f1729");
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill_rect(0.0, 0.0, w, h);

	ctx.set_fill_style_str("rgba(255, 255, 255, 0.05)");
	let mut y = 2.0;
	while y < h {
		let mut x = 2.0;
		while x < w {
			ctx.begin_path();
			let _ = ctx.arc(x, y, 1.0, 0.0, 2.0 * PI);
			ctx.fill();
			x += GRID_SPACING;
		}
		y += GRID_SPACING;
	}
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, x: f64, y: f64, w: f64, h: f64, r: f64) {
	let r = r.min(w / 2.0).min(h / 2.0);
	ctx.begin_path();
	ctx.move_to(x + r, y);
	let _ = ctx.arc_to(x + w, y, x + w, y + h, r);
	let _ = ctx.arc_to(x + w, y + h, x, y + h, r);
	let _ = ctx.arc_to(x, y + h, x, y, r);
	let _ = ctx.arc_to(x, y, x + w, y, r);
	ctx.close_path();
}

fn draw_arrow(state: &PipelineState, arrow: &ArrowVisual, ctx: &CanvasRenderingContext2d) {
	let grow = state.arrow_grow(arrow);
	let head = state.arrow_head(arrow);
	if grow <= 0.0 && head <= 0.0 {
		return;
	}
	let t = ease_out_cubic(arrow.highlight_t);
	let spec = arrow.spec;
	let length = spec.length();
	let drawn = length * grow;
	let half = ARROW_THICKNESS / 2.0;

	ctx.save();
	let _ = ctx.translate(spec.x1, spec.y1);
	let _ = ctx.rotate(spec.angle());

	if t > 0.01 {
		ctx.set_shadow_blur(20.0 * t);
		ctx.set_shadow_color(&format!("rgba(34, 211, 238, {:.3})", 0.5 * t));
	}

	// Idle track fades out as the lit gradient fades in
	ctx.set_global_alpha(1.0 - t);
	rounded_rect(ctx, 0.0, -half, drawn, ARROW_THICKNESS, 4.0);
	ctx.set_fill_style_str(&Rgba::ARROW_IDLE.css());
	ctx.fill();

	if t > 0.0 {
		ctx.set_global_alpha(t);
		let gradient = ctx.create_linear_gradient(0.0, 0.0, drawn.max(1.0), 0.0);
		let _ = gradient.add_color_stop(0.0, "#60a5fa");
		let _ = gradient.add_color_stop(1.0, "#22d3ee");
		rounded_rect(ctx, 0.0, -half, drawn, ARROW_THICKNESS, 4.0);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();

		// A full-length band sweeping from -length to +length, clipped to the line
		let offset = (phase(state.elapsed, FLOW_PERIOD) * 2.0 - 1.0) * drawn;
		let (start, end) = (offset.max(0.0), (offset + drawn).min(drawn));
		if end > start {
			ctx.set_shadow_blur(0.0);
			ctx.set_fill_style_str("rgba(255, 255, 255, 0.3)");
			ctx.fill_rect(start, -half, end - start, ARROW_THICKNESS);
		}
	}

	ctx.set_global_alpha(head);
	ctx.set_shadow_blur(8.0 * t);
	ctx.set_shadow_color(&format!("rgba(34, 211, 238, {:.3})", 0.8 * t));
	ctx.set_fill_style_str(&Rgba::ARROW_IDLE.mix(Rgba::ARROW_LIT, t).css());
	ctx.begin_path();
	ctx.move_to(length, 0.0);
	ctx.line_to(length - ARROW_HEAD_LENGTH, -ARROW_HEAD_HALF_WIDTH);
	ctx.line_to(length - ARROW_HEAD_LENGTH, ARROW_HEAD_HALF_WIDTH);
	ctx.close_path();
	ctx.fill();

	ctx.restore();
}

fn draw_node(state: &PipelineState, node: &NodeVisual, ctx: &CanvasRenderingContext2d) {
	let appear = state.node_appear(node);
	if appear <= 0.0 {
		return;
	}
	let t = ease_out_cubic(node.highlight_t);
	let (w, h) = (node.width, NODE_HEIGHT);
	let (cx, cy) = node.center();

	let pulse_wave = (1.0 - (2.0 * PI * phase(state.elapsed, PULSE_PERIOD)).cos()) / 2.0;
	let alpha = appear * (1.0 - 0.2 * t * pulse_wave);
	let scale = (0.8 + 0.2 * appear) * (1.0 + (NODE_HIGHLIGHT_SCALE - 1.0) * t);

	ctx.save();
	let _ = ctx.translate(cx, cy - 20.0 * (1.0 - appear));
	let _ = ctx.scale(scale, scale);
	ctx.set_global_alpha(alpha);

	if t > 0.01 {
		ctx.set_shadow_blur(40.0 * t);
		ctx.set_shadow_offset_y(10.0 * t);
		ctx.set_shadow_color(&format!("rgba(59, 130, 246, {:.3})", 0.5 * t));
	} else {
		ctx.set_shadow_blur(6.0);
		ctx.set_shadow_offset_y(4.0);
		ctx.set_shadow_color("rgba(0, 0, 0, 0.1)");
	}
	rounded_rect(ctx, -w / 2.0, -h / 2.0, w, h, NODE_RADIUS);
	ctx.set_fill_style_str("rgba(31, 41, 55, 0.8)");
	ctx.fill();
	ctx.set_shadow_blur(0.0);
	ctx.set_shadow_offset_y(0.0);

	if t > 0.0 {
		let (from, to) = node.spec.category.gradient();
		let gradient = ctx.create_linear_gradient(-w / 2.0, -h / 2.0, w / 2.0, h / 2.0);
		let _ = gradient.add_color_stop(0.0, from);
		let _ = gradient.add_color_stop(1.0, to);
		ctx.set_global_alpha(alpha * t);
		#[allow(deprecated)]
		ctx.set_fill_style(&gradient);
		ctx.fill();
		ctx.set_global_alpha(alpha);
	}

	ctx.set_line_width(2.0);
	ctx.set_stroke_style_str(&Rgba::BORDER_IDLE.mix(Rgba::WHITE, t).css());
	ctx.stroke();

	if t > 0.01 {
		draw_ping(state, ctx, w, h, alpha * t);
	}

	let content = NODE_ICON + NODE_GAP + node.text_width;
	let left = -content / 2.0;
	let bounce = -5.0 * t * (PI * phase(state.elapsed, BOUNCE_PERIOD)).sin();

	ctx.set_text_baseline("middle");
	ctx.set_text_align("left");
	ctx.set_font(&format!("{NODE_ICON}px {NODE_FONT_FAMILY}"));
	ctx.set_fill_style_str("white");
	let _ = ctx.fill_text(node.spec.icon.glyph(), left, bounce);

	ctx.set_font(&title_font());
	ctx.set_fill_style_str(&Rgba::TEXT_IDLE.mix(Rgba::WHITE, t).css());
	let _ = ctx.fill_text(node.spec.title, left + NODE_ICON + NODE_GAP, 0.0);

	ctx.restore();
}

/// Expanding, fading outline overlay on highlighted nodes.
fn draw_ping(state: &PipelineState, ctx: &CanvasRenderingContext2d, w: f64, h: f64, alpha: f64) {
	let k = (phase(state.elapsed, PING_PERIOD) / 0.75).min(1.0);
	let grow = 1.0 + 0.1 * k;
	let (pw, ph) = (w * grow, h * grow);
	ctx.save();
	ctx.set_global_alpha(alpha * (1.0 - k));
	rounded_rect(ctx, -pw / 2.0, -ph / 2.0, pw, ph, NODE_RADIUS);
	ctx.set_fill_style_str("rgba(255, 255, 255, 0.1)");
	ctx.fill();
	ctx.restore();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn colors_mix_linearly() {
		let mid = Rgba(0.0, 0.0, 0.0, 0.0).mix(Rgba(255.0, 100.0, 50.0, 1.0), 0.5);
		assert_eq!(mid, Rgba(127.5, 50.0, 25.0, 0.5));
		assert_eq!(mid.css(), "rgba(128, 50, 25, 0.500)");
	}

	#[test]
	fn idle_colors_render_unchanged() {
		assert_eq!(
			Rgba::ARROW_IDLE.mix(Rgba::ARROW_LIT, 0.0).css(),
			"rgba(75, 85, 99, 0.600)"
		);
	}
}
