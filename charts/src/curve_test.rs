use super::*;

#[test]
fn fmt_coord_trims_trailing_zeros() {
    assert_eq!(fmt_coord(1.0), "1");
    assert_eq!(fmt_coord(100.0), "100");
    assert_eq!(fmt_coord(1.234_56), "1.235");
    assert_eq!(fmt_coord(2.5), "2.5");
    assert_eq!(fmt_coord(-0.0001), "0");
    assert_eq!(fmt_coord(-3.25), "-3.25");
}

#[test]
fn monotone_empty_is_empty_path() {
    assert_eq!(monotone_x(&[]), "");
}

#[test]
fn monotone_single_point_closes() {
    assert_eq!(monotone_x(&[(1.0, 2.0)]), "M1,2Z");
}

#[test]
fn monotone_two_points_is_straight() {
    assert_eq!(monotone_x(&[(0.0, 0.0), (10.0, 10.0)]), "M0,0L10,10");
}

#[test]
fn monotone_collinear_points_stay_on_line() {
    let path = monotone_x(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
    assert_eq!(path, "M0,0C0.333,0.333,0.667,0.667,1,1C1.333,1.333,1.667,1.667,2,2");
}

#[test]
fn monotone_plateau_does_not_overshoot() {
    let path = monotone_x(&[(0.0, 0.0), (1.0, 5.0), (2.0, 5.0)]);
    assert_eq!(path, "M0,0C0.333,2.5,0.667,5,1,5C1.333,5,1.667,5,2,5");
}

#[test]
fn monotone_skips_duplicate_points() {
    assert_eq!(monotone_x(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0)]), "M0,0L1,1");
}

#[test]
fn segments_become_separate_subpaths() {
    let path = monotone_x_segments(&[vec![(0.0, 0.0), (1.0, 1.0)], vec![(3.0, 3.0)]]);
    assert_eq!(path, "M0,0L1,1M3,3Z");
}

#[test]
fn linear_path_uses_line_commands() {
    assert_eq!(linear(&[(0.0, 0.0), (1.0, 1.0), (2.0, 0.0)]), "M0,0L1,1L2,0");
    assert_eq!(linear(&[]), "");
}
