//! Shared numeric constants for chart layout.

// ── Line chart ──────────────────────────────────────────────────

/// SVG viewBox width for the time-series chart.
pub const LINE_WIDTH: f64 = 800.0;

/// SVG viewBox height for the time-series chart.
pub const LINE_HEIGHT: f64 = 400.0;

/// Line chart margins: top, right, bottom, left.
pub const LINE_MARGIN: Margin = Margin { top: 20.0, right: 30.0, bottom: 50.0, left: 60.0 };

/// Horizontal pixels per time-axis tick.
pub const LINE_PX_PER_X_TICK: f64 = 80.0;

/// Radius of the point markers drawn on the line.
pub const LINE_DOT_RADIUS: f64 = 4.0;

// ── Bar chart ───────────────────────────────────────────────────

/// SVG viewBox width for the bar chart.
pub const BAR_WIDTH: f64 = 800.0;

/// SVG viewBox height for the bar chart.
pub const BAR_HEIGHT: f64 = 400.0;

/// Bar chart margins: top, right, bottom, left.
pub const BAR_MARGIN: Margin = Margin { top: 30.0, right: 30.0, bottom: 60.0, left: 80.0 };

/// Band padding (inner and outer) as a fraction of the band step.
pub const BAR_PADDING: f64 = 0.3;

// ── Axes ────────────────────────────────────────────────────────

/// Default tick count for value axes.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Upper bound on generated ticks regardless of the requested count.
pub const MAX_TICKS: usize = 1000;

/// Inner padding of a chart viewBox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}
