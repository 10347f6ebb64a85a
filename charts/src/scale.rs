//! Linear, band and time scales mapping data values to SVG coordinates.

#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use time::macros::format_description;
use time::{Date, Month, OffsetDateTime};

use crate::ticks;

/// A labelled tick at a pixel position.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub position: f64,
    pub label: String,
}

/// Continuous `domain -> range` interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value into the range. A zero-width domain maps every
    /// value to the middle of the range.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 || !span.is_finite() { 0.5 } else { (value - d0) / span };
        r0 + (r1 - r0) * t
    }

    /// Round the domain outward to tick values.
    #[must_use]
    pub fn nice(mut self, count: usize) -> Self {
        self.domain = ticks::nice(self.domain.0, self.domain.1, count);
        self
    }

    /// Tick values inside the domain.
    #[must_use]
    pub fn tick_values(&self, count: usize) -> Vec<f64> {
        ticks::ticks(self.domain.0, self.domain.1, count)
    }

    /// Positioned, formatted ticks.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        let precision = ticks::precision_for_step(ticks::tick_step(self.domain.0, self.domain.1, count));
        self.tick_values(count)
            .into_iter()
            .map(|v| Tick { position: self.map(v), label: ticks::format_number(v, precision) })
            .collect()
    }
}

/// Evenly spaced bands for categorical axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandScale {
    pub count: usize,
    pub range: (f64, f64),
    pub padding: f64,
}

impl BandScale {
    #[must_use]
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> Self {
        Self { count, range, padding: padding.clamp(0.0, 1.0) }
    }

    #[allow(clippy::cast_precision_loss)]
    fn step(&self) -> f64 {
        let n = self.count as f64;
        (self.range.1 - self.range.0) / (n - self.padding + self.padding * 2.0).max(1.0)
    }

    /// Width of a single band.
    #[must_use]
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of band `index`, or `None` when out of range.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn position(&self, index: usize) -> Option<f64> {
        if index >= self.count {
            return None;
        }
        let step = self.step();
        let n = self.count as f64;
        let start = self.range.0 + (self.range.1 - self.range.0 - step * (n - self.padding)) * 0.5;
        Some(start + step * index as f64)
    }
}

const MS_SECOND: i64 = 1_000;
const MS_MINUTE: i64 = 60 * MS_SECOND;
const MS_HOUR: i64 = 60 * MS_MINUTE;
const MS_DAY: i64 = 24 * MS_HOUR;
const MS_WEEK: i64 = 7 * MS_DAY;
const MS_MONTH: i64 = 30 * MS_DAY;
const MS_YEAR: i64 = 365 * MS_DAY;

/// 1970-01-04 was the first Sunday after the epoch.
const FIRST_SUNDAY_MS: i64 = 3 * MS_DAY;

/// Calendar-aware tick interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeInterval {
    /// Fixed-duration step in milliseconds, aligned to the epoch.
    Fixed(i64),
    /// Whole weeks, aligned to Sunday.
    Weeks(i64),
    /// Whole months, aligned to January.
    Months(u32),
    /// Whole years.
    Years(i64),
}

impl TimeInterval {
    /// Approximate duration, used to pick the best-fitting interval.
    #[must_use]
    pub fn approx_ms(self) -> i64 {
        match self {
            Self::Fixed(ms) => ms,
            Self::Weeks(n) => n.saturating_mul(MS_WEEK),
            Self::Months(n) => i64::from(n).saturating_mul(MS_MONTH),
            Self::Years(n) => n.saturating_mul(MS_YEAR),
        }
    }
}

const TICK_INTERVALS: [TimeInterval; 17] = [
    TimeInterval::Fixed(MS_SECOND),
    TimeInterval::Fixed(5 * MS_SECOND),
    TimeInterval::Fixed(15 * MS_SECOND),
    TimeInterval::Fixed(30 * MS_SECOND),
    TimeInterval::Fixed(MS_MINUTE),
    TimeInterval::Fixed(5 * MS_MINUTE),
    TimeInterval::Fixed(15 * MS_MINUTE),
    TimeInterval::Fixed(30 * MS_MINUTE),
    TimeInterval::Fixed(MS_HOUR),
    TimeInterval::Fixed(3 * MS_HOUR),
    TimeInterval::Fixed(6 * MS_HOUR),
    TimeInterval::Fixed(12 * MS_HOUR),
    TimeInterval::Fixed(MS_DAY),
    TimeInterval::Fixed(2 * MS_DAY),
    TimeInterval::Weeks(1),
    TimeInterval::Months(1),
    TimeInterval::Months(3),
];

/// Choose the interval whose duration best matches `span / count`.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn tick_interval(start_ms: i64, stop_ms: i64, count: usize) -> TimeInterval {
    let span = stop_ms.abs_diff(start_ms);
    let target = span as f64 / count.max(1) as f64;
    if target > (3 * MS_MONTH) as f64 * 1.5 {
        let years = ticks::tick_step(0.0, span as f64 / MS_YEAR as f64, count).max(1.0);
        return TimeInterval::Years(years.round() as i64);
    }
    TICK_INTERVALS
        .iter()
        .copied()
        .min_by(|a, b| {
            let da = (a.approx_ms() as f64 / target).ln().abs();
            let db = (b.approx_ms() as f64 / target).ln().abs();
            da.total_cmp(&db)
        })
        .unwrap_or(TimeInterval::Fixed(MS_DAY))
}

/// Time axis over epoch milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    pub domain: (i64, i64),
    pub range: (f64, f64),
}

impl TimeScale {
    #[must_use]
    pub fn new(domain: (i64, i64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn map(&self, ms: i64) -> f64 {
        LinearScale::new((self.domain.0 as f64, self.domain.1 as f64), self.range).map(ms as f64)
    }

    /// Tick instants inside the domain, calendar-aligned.
    #[must_use]
    pub fn tick_values(&self, count: usize) -> Vec<i64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if count == 0 {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let values = match tick_interval(lo, hi, count) {
            TimeInterval::Fixed(step) => fixed_ticks(lo, hi, step, 0),
            TimeInterval::Weeks(n) => fixed_ticks(lo, hi, n.saturating_mul(MS_WEEK), FIRST_SUNDAY_MS),
            TimeInterval::Months(n) => month_ticks(lo, hi, n),
            TimeInterval::Years(n) => year_ticks(lo, hi, n),
        };
        values.into_iter().take(crate::consts::MAX_TICKS).collect()
    }

    /// Positioned ticks with multi-resolution labels.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<Tick> {
        self.tick_values(count)
            .into_iter()
            .map(|ms| Tick { position: self.map(ms), label: format_time_tick(ms) })
            .collect()
    }
}

fn fixed_ticks(lo: i64, hi: i64, step: i64, offset: i64) -> Vec<i64> {
    if step <= 0 {
        return Vec::new();
    }
    let Some(first) = lo
        .checked_sub(offset)
        .and_then(|shifted| shifted.div_euclid(step).checked_mul(step))
        .and_then(|aligned| aligned.checked_add(offset))
    else {
        return Vec::new();
    };
    let first = if first < lo { first.checked_add(step) } else { Some(first) };
    let mut out = Vec::new();
    let mut next = first;
    while let Some(t) = next {
        if t > hi || out.len() >= crate::consts::MAX_TICKS {
            break;
        }
        out.push(t);
        next = t.checked_add(step);
    }
    out
}

fn to_datetime(ms: i64) -> Option<OffsetDateTime> {
    match OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000) {
        Ok(dt) => Some(dt),
        Err(_) => None,
    }
}

fn date_to_ms(date: Date) -> i64 {
    let nanos = date.midnight().assume_utc().unix_timestamp_nanos();
    i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX)
}

fn month_start(year: i32, month_index: i64) -> Option<Date> {
    let year = year + i32::try_from(month_index.div_euclid(12)).unwrap_or(0);
    let month = u8::try_from(month_index.rem_euclid(12) + 1).unwrap_or(1);
    let month = match Month::try_from(month) {
        Ok(m) => m,
        Err(_) => return None,
    };
    match Date::from_calendar_date(year, month, 1) {
        Ok(d) => Some(d),
        Err(_) => None,
    }
}

fn month_ticks(lo: i64, hi: i64, every: u32) -> Vec<i64> {
    let Some(start) = to_datetime(lo) else {
        return Vec::new();
    };
    let every = i64::from(every.max(1));
    let year = start.year();
    let first_index = i64::from(u8::from(start.month())) - 1;
    let mut index = first_index - first_index.rem_euclid(every);
    let mut out = Vec::new();
    while out.len() < crate::consts::MAX_TICKS {
        let Some(date) = month_start(year, index) else {
            break;
        };
        let ms = date_to_ms(date);
        if ms > hi {
            break;
        }
        if ms >= lo {
            out.push(ms);
        }
        index += every;
    }
    out
}

fn year_ticks(lo: i64, hi: i64, every: i64) -> Vec<i64> {
    let (Some(start), Some(end)) = (to_datetime(lo), to_datetime(hi)) else {
        return Vec::new();
    };
    let every = every.max(1);
    let first = i64::from(start.year());
    let mut year = first - first.rem_euclid(every);
    let mut out = Vec::new();
    while year <= i64::from(end.year()) && out.len() < crate::consts::MAX_TICKS {
        if let Some(date) = month_start(i32::try_from(year).unwrap_or(i32::MAX), 0) {
            let ms = date_to_ms(date);
            if ms >= lo && ms <= hi {
                out.push(ms);
            }
        }
        year += every;
    }
    out
}

/// Label a time tick at the coarsest resolution that still identifies it:
/// year on Jan 1, month on the 1st, day at midnight, otherwise clock time.
#[must_use]
pub fn format_time_tick(ms: i64) -> String {
    let Some(dt) = to_datetime(ms) else {
        return String::new();
    };
    let formatted = if dt.second() != 0 || dt.millisecond() != 0 {
        dt.format(format_description!("[hour]:[minute]:[second]"))
    } else if dt.hour() != 0 || dt.minute() != 0 {
        dt.format(format_description!("[hour]:[minute]"))
    } else if dt.day() != 1 {
        dt.format(format_description!("[month repr:short] [day]"))
    } else if dt.month() != Month::January {
        dt.format(format_description!("[month repr:short]"))
    } else {
        dt.format(format_description!("[year]"))
    };
    formatted.unwrap_or_default()
}
