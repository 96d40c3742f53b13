//! Tunable timings and metrics for the diagram.

/// Delay between automatic steps while the walkthrough is playing.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5000;

// Transitions (seconds)
pub const NODE_TRANSITION: f64 = 0.3;
pub const ARROW_GROW: f64 = 0.5;
pub const ARROW_HEAD_FADE: f64 = 0.3;
pub const PULSE_PERIOD: f64 = 2.0;
pub const BOUNCE_PERIOD: f64 = 1.0;
pub const PING_PERIOD: f64 = 1.0;
pub const FLOW_PERIOD: f64 = 2.0;

// Node box, in diagram pixels
pub const NODE_PAD_X: f64 = 20.0;
pub const NODE_PAD_Y: f64 = 14.0;
pub const NODE_MIN_WIDTH: f64 = 140.0;
pub const NODE_RADIUS: f64 = 16.0;
pub const NODE_ICON: f64 = 18.0;
pub const NODE_GAP: f64 = 10.0;
pub const NODE_FONT: f64 = 14.0;
pub const NODE_HEIGHT: f64 = NODE_PAD_Y * 2.0 + 20.0;
pub const NODE_HIGHLIGHT_SCALE: f64 = 1.1;

// Arrow, in diagram pixels
pub const ARROW_THICKNESS: f64 = 3.0;
pub const ARROW_HEAD_LENGTH: f64 = 8.0;
pub const ARROW_HEAD_HALF_WIDTH: f64 = 5.0;

/// Top offset of the diagram below the page header.
pub const DIAGRAM_TOP: f64 = 110.0;
/// Right edge of the widest node, used to center the diagram.
pub const DIAGRAM_WIDTH: f64 = 1250.0;
pub const DIAGRAM_MIN_LEFT: f64 = 32.0;

pub const GRID_SPACING: f64 = 40.0;
