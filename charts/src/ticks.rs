//! Human-friendly tick generation.
//!
//! Tick steps are powers of ten multiplied by 1, 2 or 5, chosen so that
//! roughly `count` ticks cover `[start, stop]`. Integer tick indices are kept
//! separate from the step so values like `0.3` come out exact instead of
//! accumulating float error.

#[cfg(test)]
#[path = "ticks_test.rs"]
mod ticks_test;

use crate::consts::MAX_TICKS;

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `(first index, last index, increment)`; a negative increment means the
/// tick value is `index / -increment`.
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let scaled = 10f64.powf(-power) / factor;
        i1 = (start * scaled).round();
        i2 = (stop * scaled).round();
        if i1 / scaled < start {
            i1 += 1.0;
        }
        if i2 / scaled > stop {
            i2 -= 1.0;
        }
        inc = -scaled;
    } else {
        let scaled = 10f64.powf(power) * factor;
        i1 = (start / scaled).round();
        i2 = (stop / scaled).round();
        if i1 * scaled < start {
            i1 += 1.0;
        }
        if i2 * scaled > stop {
            i2 -= 1.0;
        }
        inc = scaled;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

/// Evenly spaced nice values within `[start, stop]` (inclusive).
///
/// Reversed domains produce descending ticks. A zero-width domain yields the
/// single value; a zero count yields nothing.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }
    let n = ((i2 - i1 + 1.0) as usize).min(MAX_TICKS);
    let value = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    (0..n)
        .map(|k| {
            let k = k as f64;
            if reverse { value(i2 - k) } else { value(i1 + k) }
        })
        .collect()
}

/// Signed tick increment for `[start, stop]`: positive steps are the step
/// itself, negative ones are the reciprocal of the step. `0.0` when no step
/// applies.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    tick_spec(start, stop, count as f64).map_or(0.0, |(_, _, inc)| inc)
}

/// Absolute distance between adjacent ticks.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    match tick_spec(lo, hi, count as f64) {
        Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
        Some((_, _, inc)) => inc,
        None => 0.0,
    }
}

/// Extend `[start, stop]` outward so both ends land on tick values.
#[must_use]
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    if !start.is_finite() || !stop.is_finite() || start == stop {
        return (start, stop);
    }
    let reverse = stop < start;
    let (mut lo, mut hi) = if reverse { (stop, start) } else { (start, stop) };
    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(lo, hi, count);
        if step == prestep {
            break;
        }
        if step > 0.0 {
            lo = (lo / step).floor() * step;
            hi = (hi / step).ceil() * step;
        } else if step < 0.0 {
            lo = (lo * step).ceil() / step;
            hi = (hi * step).floor() / step;
        } else {
            break;
        }
        prestep = step;
    }
    if reverse { (hi, lo) } else { (lo, hi) }
}

/// Decimal places needed to distinguish ticks `step` apart.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn precision_for_step(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let digits = -step.abs().log10().floor();
    if digits <= 0.0 { 0 } else { digits as usize }
}

/// Format a tick value with thousands separators and `precision` decimals.
#[must_use]
pub fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return String::new();
    }
    let raw = format!("{:.*}", precision, value.abs());
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let is_zero = raw.chars().all(|c| c == '0' || c == '.');
    let mut out = String::new();
    if value < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
