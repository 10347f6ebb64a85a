#![allow(clippy::float_cmp)]

use super::*;

const JAN_1_2024: i64 = 1_704_067_200_000;
const DAY: i64 = 86_400_000;

fn daily(values: &[f64]) -> Vec<TimePoint> {
    values
        .iter()
        .zip(0_i64..)
        .map(|(&v, i)| TimePoint::new(JAN_1_2024 + i * DAY, v))
        .collect()
}

#[test]
fn parses_supported_date_formats() {
    assert_eq!(parse_date_text("2024-01-05"), Some(JAN_1_2024 + 4 * DAY));
    assert_eq!(parse_date_text("2024-01-05T12:00:00Z"), Some(JAN_1_2024 + 4 * DAY + DAY / 2));
    assert_eq!(parse_date_text("2024-01-05 12:00:00"), Some(JAN_1_2024 + 4 * DAY + DAY / 2));
    assert_eq!(parse_date_text(" 2024-01-01 "), Some(JAN_1_2024));
}

#[test]
fn rejects_non_dates() {
    assert_eq!(parse_date_text("north"), None);
    assert_eq!(parse_date_text("2024-13-01"), None);
    assert_eq!(parse_date_text(""), None);
}

#[test]
fn small_integers_are_not_epoch_millis() {
    assert_eq!(parse_date(&Scalar::Int(JAN_1_2024)), Some(JAN_1_2024));
    assert_eq!(parse_date(&Scalar::Int(42)), None);
    assert_eq!(parse_date(&Scalar::Float(1.0)), None);
    assert_eq!(parse_date(&Scalar::Null), None);
}

#[test]
fn integers_past_the_calendar_are_not_epoch_millis() {
    assert_eq!(parse_date(&Scalar::Int(253_402_300_799_999)), Some(253_402_300_799_999));
    assert_eq!(parse_date(&Scalar::Int(253_402_300_800_000)), None);
    assert_eq!(parse_date(&Scalar::Int(i64::MAX)), None);

    let huge = ResultSet::new(
        vec!["id".into(), "n".into()],
        vec![
            vec![Scalar::Int(9_223_372_036_854_774_807), Scalar::Int(1)],
            vec![Scalar::Int(i64::MAX), Scalar::Int(2)],
        ],
    );
    assert_eq!(time_series(&huge), None);
}

#[test]
fn extreme_instants_lay_out_without_overflow() {
    let points = [TimePoint::new(i64::MAX - 1000, 1.0), TimePoint::new(i64::MAX, 2.0)];
    let layout = LineLayout::compute(&points);
    assert_eq!(layout.dots.len(), 2);
    assert!(layout.x_ticks.iter().all(|t| t.position.is_finite()));
}

#[test]
fn time_series_sorts_by_date() {
    let rs: ResultSet = serde_json::from_value(serde_json::json!({
        "columns": ["day", "label", "total"],
        "rows": [["2024-01-02", "b", 5], ["2024-01-01", "a", 3]]
    }))
    .unwrap();
    let points = time_series(&rs).unwrap();
    assert_eq!(points, vec![TimePoint::new(JAN_1_2024, 3.0), TimePoint::new(JAN_1_2024 + DAY, 5.0)]);
}

#[test]
fn time_series_marks_non_numeric_values_as_gaps() {
    let rs: ResultSet = serde_json::from_value(serde_json::json!({
        "columns": ["day", "total"],
        "rows": [["2024-01-01", 1], ["2024-01-02", "n/a"], ["2024-01-03", null]]
    }))
    .unwrap();
    let points = time_series(&rs).unwrap();
    assert_eq!(points.len(), 3);
    assert_eq!(points[0].value, 1.0);
    assert!(points[1].value.is_nan());
    assert!(points[2].value.is_nan());
}

#[test]
fn time_series_requires_dates_and_numbers() {
    let not_dates: ResultSet = serde_json::from_value(serde_json::json!({
        "columns": ["region", "total"],
        "rows": [["north", 1]]
    }))
    .unwrap();
    assert_eq!(time_series(&not_dates), None);

    let no_numbers: ResultSet = serde_json::from_value(serde_json::json!({
        "columns": ["day", "note"],
        "rows": [["2024-01-01", "x"]]
    }))
    .unwrap();
    assert_eq!(time_series(&no_numbers), None);

    let mixed: ResultSet = serde_json::from_value(serde_json::json!({
        "columns": ["day", "total"],
        "rows": [["2024-01-01", 1], ["soon", 2]]
    }))
    .unwrap();
    assert_eq!(time_series(&mixed), None);

    assert_eq!(time_series(&ResultSet::default()), None);
}

#[test]
fn empty_points_give_finite_degenerate_layout() {
    let layout = LineLayout::compute(&[]);
    assert!(layout.path.is_empty());
    assert!(layout.dots.is_empty());
    assert!(layout.x_ticks.is_empty());
    assert_eq!(layout.x_domain, (0, 0));
    assert_eq!(layout.y_domain, (0.0, 0.0));
    assert!(layout.y_ticks.iter().all(|t| t.position.is_finite()));
}

#[test]
fn single_point_sits_mid_axis() {
    let layout = LineLayout::compute(&daily(&[7.0]));
    assert_eq!(layout.dots.len(), 1);
    let mid = LINE_MARGIN.left + (LINE_WIDTH - LINE_MARGIN.left - LINE_MARGIN.right) / 2.0;
    assert_eq!(layout.dots[0].cx, mid);
    assert!(layout.path.starts_with('M'));
    assert!(layout.path.ends_with('Z'));
}

#[test]
fn values_scale_from_zero_to_niced_max() {
    let layout = LineLayout::compute(&daily(&[0.0, 10.0, 5.0]));
    assert_eq!(layout.y_domain, (0.0, 10.0));
    assert_eq!(layout.dots[0].cx, LINE_MARGIN.left);
    assert_eq!(layout.dots[2].cx, LINE_WIDTH - LINE_MARGIN.right);
    assert_eq!(layout.dots[0].cy, LINE_HEIGHT - LINE_MARGIN.bottom);
    assert_eq!(layout.dots[1].cy, LINE_MARGIN.top);
    assert!(layout.path.starts_with("M60,350C"));
}

#[test]
fn non_finite_values_split_the_line() {
    let layout = LineLayout::compute(&daily(&[1.0, f64::NAN, 3.0, 4.0]));
    assert_eq!(layout.dots.len(), 3);
    assert_eq!(layout.path.matches('M').count(), 2);
}

#[test]
fn x_ticks_stay_inside_plot_area() {
    let layout = LineLayout::compute(&daily(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0]));
    assert!(!layout.x_ticks.is_empty());
    assert!(layout.x_ticks.len() <= 12);
    for tick in &layout.x_ticks {
        assert!(tick.position >= LINE_MARGIN.left && tick.position <= LINE_WIDTH - LINE_MARGIN.right);
        assert!(!tick.label.is_empty());
    }
}
