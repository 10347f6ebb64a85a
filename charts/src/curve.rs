//! SVG path data for line series.
//!
//! Monotone-X interpolation uses cubic Bézier segments whose tangents are
//! limited so the curve never overshoots between samples (Steffen's method),
//! which keeps a line through non-negative data from dipping below zero.

#[cfg(test)]
#[path = "curve_test.rs"]
mod curve_test;

/// Format a coordinate with at most three decimals and no trailing zeros.
#[must_use]
pub fn fmt_coord(value: f64) -> String {
    let raw = format!("{value:.3}");
    let trimmed = raw.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Tangent at the middle of three points, limited to preserve monotonicity.
fn slope3(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = if h0 == 0.0 { 0.0 } else { (p1.1 - p0.1) / h0 };
    let s1 = if h1 == 0.0 { 0.0 } else { (p2.1 - p1.1) / h1 };
    let p = if h0 + h1 == 0.0 { 0.0 } else { (s0 * h1 + s1 * h0) / (h0 + h1) };
    let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if t.is_finite() { t } else { 0.0 }
}

/// End tangent estimated from the neighbouring tangent `t`.
fn slope2(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h == 0.0 { t } else { (3.0 * (p1.1 - p0.1) / h - t) / 2.0 }
}

fn push_bezier(out: &mut String, p0: (f64, f64), p1: (f64, f64), t0: f64, t1: f64) {
    let dx = (p1.0 - p0.0) / 3.0;
    out.push_str(&format!(
        "C{},{},{},{},{},{}",
        fmt_coord(p0.0 + dx),
        fmt_coord(p0.1 + dx * t0),
        fmt_coord(p1.0 - dx),
        fmt_coord(p1.1 - dx * t1),
        fmt_coord(p1.0),
        fmt_coord(p1.1),
    ));
}

/// Monotone-X path through one contiguous run of points (sorted by x).
///
/// Consecutive duplicate points are skipped. A single point produces a closed
/// zero-length subpath so it still renders with a round line cap.
#[must_use]
pub fn monotone_x(points: &[(f64, f64)]) -> String {
    let mut deduped: Vec<(f64, f64)> = Vec::with_capacity(points.len());
    for &p in points {
        if deduped.last() != Some(&p) {
            deduped.push(p);
        }
    }

    let mut out = String::new();
    let Some(&first) = deduped.first() else {
        return out;
    };
    out.push_str(&format!("M{},{}", fmt_coord(first.0), fmt_coord(first.1)));

    match deduped.len() {
        1 => out.push('Z'),
        2 => out.push_str(&format!("L{},{}", fmt_coord(deduped[1].0), fmt_coord(deduped[1].1))),
        n => {
            let mut t0 = f64::NAN;
            for i in 2..n {
                let (a, b, c) = (deduped[i - 2], deduped[i - 1], deduped[i]);
                let t1 = slope3(a, b, c);
                if i == 2 {
                    t0 = slope2(a, b, t1);
                }
                push_bezier(&mut out, a, b, t0, t1);
                t0 = t1;
            }
            let (a, b) = (deduped[n - 2], deduped[n - 1]);
            push_bezier(&mut out, a, b, t0, slope2(a, b, t0));
        }
    }
    out
}

/// Straight segments through a run of points.
#[must_use]
pub fn linear(points: &[(f64, f64)]) -> String {
    let mut out = String::new();
    for (i, &(x, y)) in points.iter().enumerate() {
        out.push(if i == 0 { 'M' } else { 'L' });
        out.push_str(&format!("{},{}", fmt_coord(x), fmt_coord(y)));
    }
    out
}

/// Join the paths of several runs, one subpath per run.
#[must_use]
pub fn monotone_x_segments(segments: &[Vec<(f64, f64)>]) -> String {
    segments.iter().map(|s| monotone_x(s)).collect::<Vec<_>>().concat()
}
