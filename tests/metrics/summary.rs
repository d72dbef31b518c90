use esg_signal::compute_metrics;

use crate::common::point;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn two_point_history() {
    let points = [
        point("2020", Some(70.0), Some(72.0)),
        point("2021", Some(80.0), Some(75.0)),
    ];
    let s = compute_metrics(&points).unwrap();
    assert!(close(s.mae, 3.5));
    assert!(close(s.rmse, 14.5_f64.sqrt()));
    assert_eq!(s.latest.label, "2021");
    assert!(close(s.latest_residual(), -5.0));
}

#[test]
fn points_missing_either_value_are_skipped() {
    let points = [
        point("2019", None, Some(60.0)),
        point("2020", Some(70.0), Some(72.0)),
        point("2021", Some(65.0), None),
        point("2022", Some(f64::NAN), Some(1.0)),
    ];
    let s = compute_metrics(&points).unwrap();
    assert!(close(s.mae, 2.0));
    assert!(close(s.rmse, 2.0));
    assert_eq!(s.latest.label, "2020");
}

#[test]
fn no_scored_point_yields_none() {
    assert!(compute_metrics(&[]).is_none());
    let points = [point("2023", None, Some(77.5)), point("2024", Some(80.0), None)];
    assert!(compute_metrics(&points).is_none());
}

#[test]
fn perfect_history_is_zero_not_none() {
    let points = [
        point("2020", Some(70.0), Some(70.0)),
        point("2021", Some(71.0), Some(71.0)),
    ];
    let s = compute_metrics(&points).unwrap();
    assert_eq!(s.mae, 0.0);
    assert_eq!(s.rmse, 0.0);
}
