//! Time-series extraction and line chart layout.
//!
//! A result set qualifies for the line chart when every row's first column
//! parses as a date and some later column holds numbers. The layout maps
//! dates onto a UTC time scale and values onto `[0, max]`, then emits a
//! monotone-X path split into runs wherever a value is not finite.

#[cfg(test)]
#[path = "line_test.rs"]
mod line_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use crate::consts::{DEFAULT_TICK_COUNT, LINE_HEIGHT, LINE_MARGIN, LINE_PX_PER_X_TICK, LINE_WIDTH, Margin};
use crate::curve;
use crate::scale::{LinearScale, Tick, TimeScale};
use crate::table::{ResultSet, Scalar};

/// Integers below this are row ids or counts, not epoch milliseconds
/// (it is early 1973).
const EPOCH_MS_FLOOR: i64 = 100_000_000_000;

/// Last millisecond of 9999-12-31, the end of the calendar range the time
/// axis can label.
const EPOCH_MS_CEILING: i64 = 253_402_300_799_999;

/// One sample on the time axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimePoint {
    /// Milliseconds since the Unix epoch, UTC.
    pub date_ms: i64,
    pub value: f64,
}

impl TimePoint {
    #[must_use]
    pub fn new(date_ms: i64, value: f64) -> Self {
        Self { date_ms, value }
    }
}

fn nanos_to_ms(nanos: i128) -> Option<i64> {
    match i64::try_from(nanos / 1_000_000) {
        Ok(ms) => Some(ms),
        Err(_) => None,
    }
}

/// Parse a date string as `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or RFC 3339.
#[must_use]
pub fn parse_date_text(text: &str) -> Option<i64> {
    let text = text.trim();
    if let Ok(dt) = OffsetDateTime::parse(text, &Rfc3339) {
        return nanos_to_ms(dt.unix_timestamp_nanos());
    }
    if let Ok(dt) = PrimitiveDateTime::parse(text, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")) {
        return nanos_to_ms(dt.assume_utc().unix_timestamp_nanos());
    }
    if let Ok(date) = Date::parse(text, format_description!("[year]-[month]-[day]")) {
        return nanos_to_ms(date.midnight().assume_utc().unix_timestamp_nanos());
    }
    None
}

/// Interpret a cell as a date: date strings or epoch-millisecond integers.
#[must_use]
pub fn parse_date(cell: &Scalar) -> Option<i64> {
    match cell {
        Scalar::Text(s) => parse_date_text(s),
        Scalar::Int(ms) if *ms >= EPOCH_MS_FLOOR && *ms <= EPOCH_MS_CEILING => Some(*ms),
        _ => None,
    }
}

/// Extract `(date, value)` points when the result set looks like a time
/// series, sorted by date. Cells in the value column that are not numeric
/// become `NaN` and render as gaps.
#[must_use]
pub fn time_series(result: &ResultSet) -> Option<Vec<TimePoint>> {
    if result.is_empty() {
        return None;
    }
    let value_col = result
        .rows
        .first()?
        .iter()
        .enumerate()
        .skip(1)
        .find_map(|(i, cell)| cell.is_number().then_some(i))?;

    let mut points = Vec::with_capacity(result.rows.len());
    for row in 0..result.rows.len() {
        let date_ms = parse_date(result.cell(row, 0)?)?;
        let value = result.cell(row, value_col).and_then(Scalar::as_plot_value).unwrap_or(f64::NAN);
        points.push(TimePoint::new(date_ms, value));
    }
    points.sort_by_key(|p| p.date_ms);
    Some(points)
}

/// A point marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub point: TimePoint,
}

/// Computed line chart geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub x_domain: (i64, i64),
    pub y_domain: (f64, f64),
    pub x_ticks: Vec<Tick>,
    /// Doubles as horizontal gridline positions.
    pub y_ticks: Vec<Tick>,
    /// SVG path data; empty when there is nothing to draw.
    pub path: String,
    pub dots: Vec<Dot>,
}

impl LineLayout {
    /// Lay out points in the default viewBox.
    #[must_use]
    pub fn compute(points: &[TimePoint]) -> Self {
        Self::compute_in(points, LINE_WIDTH, LINE_HEIGHT, LINE_MARGIN)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn compute_in(points: &[TimePoint], width: f64, height: f64, margin: Margin) -> Self {
        let x_domain = points
            .iter()
            .map(|p| (p.date_ms, p.date_ms))
            .reduce(|(lo, hi), (a, b)| (lo.min(a), hi.max(b)))
            .unwrap_or((0, 0));
        let max = points.iter().map(|p| p.value).filter(|v| v.is_finite()).fold(0.0_f64, f64::max);

        let x = TimeScale::new(x_domain, (margin.left, width - margin.right));
        let y = LinearScale::new((0.0, max), (height - margin.bottom, margin.top)).nice(DEFAULT_TICK_COUNT);

        let inner_width = (width - margin.left - margin.right).max(0.0);
        let x_tick_count = ((inner_width / LINE_PX_PER_X_TICK).floor() as usize).max(1);

        let mut runs: Vec<Vec<(f64, f64)>> = Vec::new();
        let mut current: Vec<(f64, f64)> = Vec::new();
        let mut dots = Vec::new();
        for point in points {
            if point.value.is_finite() {
                let xy = (x.map(point.date_ms), y.map(point.value));
                current.push(xy);
                dots.push(Dot { cx: xy.0, cy: xy.1, point: *point });
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }

        Self {
            width,
            height,
            margin,
            x_domain,
            y_domain: y.domain,
            x_ticks: if points.is_empty() { Vec::new() } else { x.ticks(x_tick_count) },
            y_ticks: y.ticks(DEFAULT_TICK_COUNT),
            path: curve::monotone_x_segments(&runs),
            dots,
        }
    }
}
