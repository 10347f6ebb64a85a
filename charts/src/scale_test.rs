#![allow(clippy::float_cmp)]

use super::*;
use time::macros::datetime;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn ms(dt: OffsetDateTime) -> i64 {
    dt.unix_timestamp() * 1000
}

// --- LinearScale ---

#[test]
fn linear_maps_domain_to_range() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    assert_eq!(s.map(5.0), 50.0);
    assert_eq!(s.map(0.0), 0.0);
    assert_eq!(s.map(10.0), 100.0);
}

#[test]
fn linear_supports_inverted_range() {
    let s = LinearScale::new((0.0, 100.0), (350.0, 20.0));
    assert_eq!(s.map(0.0), 350.0);
    assert_eq!(s.map(100.0), 20.0);
}

#[test]
fn linear_degenerate_domain_maps_to_midpoint() {
    let s = LinearScale::new((0.0, 0.0), (0.0, 100.0));
    assert_eq!(s.map(0.0), 50.0);
    assert_eq!(s.map(42.0), 50.0);
}

#[test]
fn linear_nice_rounds_domain() {
    let s = LinearScale::new((0.0, 96.0), (0.0, 1.0)).nice(10);
    assert_eq!(s.domain, (0.0, 100.0));
}

#[test]
fn linear_ticks_are_labelled_with_grouping() {
    let s = LinearScale::new((0.0, 1000.0), (0.0, 100.0));
    let labels: Vec<String> = s.ticks(5).into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["0", "200", "400", "600", "800", "1,000"]);
}

#[test]
fn linear_ticks_use_step_precision() {
    let s = LinearScale::new((0.0, 1.0), (0.0, 100.0));
    let ticks = s.ticks(2);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["0.0", "0.5", "1.0"]);
    assert!(approx_eq(ticks[1].position, 50.0));
}

// --- BandScale ---

#[test]
fn band_positions_are_centered_with_equal_gaps() {
    let s = BandScale::new(4, (0.0, 100.0), 0.3);
    let first = s.position(0).unwrap();
    let last = s.position(3).unwrap() + s.bandwidth();
    assert!(first > 0.0);
    assert!(approx_eq(first, 100.0 - last));
    assert!(s.position(4).is_none());
}

#[test]
fn band_without_padding_fills_range() {
    let s = BandScale::new(2, (0.0, 100.0), 0.0);
    assert_eq!(s.bandwidth(), 50.0);
    assert_eq!(s.position(0), Some(0.0));
    assert_eq!(s.position(1), Some(50.0));
}

#[test]
fn band_with_no_categories_has_no_positions() {
    let s = BandScale::new(0, (0.0, 100.0), 0.3);
    assert!(s.position(0).is_none());
    assert!(s.bandwidth().is_finite());
}

// --- Time intervals ---

#[test]
fn interval_for_ten_days_is_daily() {
    let lo = ms(datetime!(2024-01-01 0:00 UTC));
    let hi = ms(datetime!(2024-01-11 0:00 UTC));
    assert_eq!(tick_interval(lo, hi, 10), TimeInterval::Fixed(MS_DAY));
}

#[test]
fn interval_for_a_year_is_monthly() {
    let lo = ms(datetime!(2024-01-01 0:00 UTC));
    let hi = ms(datetime!(2025-01-01 0:00 UTC));
    assert_eq!(tick_interval(lo, hi, 10), TimeInterval::Months(1));
}

#[test]
fn interval_for_decades_is_yearly() {
    let lo = ms(datetime!(2000-01-01 0:00 UTC));
    let hi = ms(datetime!(2020-01-01 0:00 UTC));
    assert_eq!(tick_interval(lo, hi, 10), TimeInterval::Years(2));
}

// --- TimeScale ---

#[test]
fn time_ticks_half_days_with_labels() {
    let lo = ms(datetime!(2024-01-01 0:00 UTC));
    let hi = ms(datetime!(2024-01-05 0:00 UTC));
    let scale = TimeScale::new((lo, hi), (60.0, 770.0));
    let ticks = scale.ticks(10);
    assert_eq!(ticks.len(), 9);
    assert_eq!(ticks[0].label, "2024");
    assert_eq!(ticks[1].label, "12:00");
    assert_eq!(ticks[2].label, "Jan 02");
    assert_eq!(ticks[0].position, 60.0);
    assert_eq!(ticks[8].position, 770.0);
}

#[test]
fn time_ticks_align_to_month_starts() {
    let lo = ms(datetime!(2024-01-15 0:00 UTC));
    let hi = ms(datetime!(2024-12-20 0:00 UTC));
    let labels: Vec<String> = TimeScale::new((lo, hi), (0.0, 1.0))
        .ticks(10)
        .into_iter()
        .map(|t| t.label)
        .collect();
    assert_eq!(labels.first().map(String::as_str), Some("Feb"));
    assert_eq!(labels.last().map(String::as_str), Some("Dec"));
    assert_eq!(labels.len(), 11);
}

#[test]
fn time_ticks_near_i64_limits_stop_instead_of_overflowing() {
    let scale = TimeScale::new((i64::MAX - 1000, i64::MAX), (0.0, 100.0));
    assert_eq!(scale.tick_values(10), vec![9_223_372_036_854_775_000]);

    let everything = TimeScale::new((i64::MIN, i64::MAX), (0.0, 100.0));
    assert!(everything.tick_values(10).is_empty());
}

#[test]
fn time_ticks_for_degenerate_domain() {
    let t = ms(datetime!(2024-06-01 0:00 UTC));
    let scale = TimeScale::new((t, t), (0.0, 100.0));
    assert_eq!(scale.tick_values(10), vec![t]);
    assert_eq!(scale.map(t), 50.0);
}

#[test]
fn format_time_tick_picks_resolution() {
    assert_eq!(format_time_tick(ms(datetime!(2024-03-05 10:30:15 UTC))), "10:30:15");
    assert_eq!(format_time_tick(ms(datetime!(2024-03-05 10:30 UTC))), "10:30");
    assert_eq!(format_time_tick(ms(datetime!(2024-03-05 0:00 UTC))), "Mar 05");
    assert_eq!(format_time_tick(ms(datetime!(2024-03-01 0:00 UTC))), "Mar");
    assert_eq!(format_time_tick(ms(datetime!(2024-01-01 0:00 UTC))), "2024");
}
