use chrono::{DateTime, TimeDelta, Utc};
use confronto_core::estimate_step;
use confronto_core::SeriesPoint;

fn pt(sec: i64) -> SeriesPoint {
    SeriesPoint::new(DateTime::from_timestamp(sec, 0).unwrap(), 1.0)
}

#[test]
fn unique_mode_wins() {
    // Adjacent deltas: 60, 60, 60, 120, 180 => unique mode is 60s.
    let points = vec![pt(0), pt(60), pt(120), pt(180), pt(300), pt(480)];
    assert_eq!(estimate_step(&points), Some(TimeDelta::seconds(60)));
}

#[test]
fn no_unique_mode_falls_back_to_the_lower_median() {
    // Adjacent deltas: 60, 60, 120, 120 => lower median is 60s.
    let points = vec![pt(0), pt(60), pt(120), pt(240), pt(360)];
    assert_eq!(estimate_step(&points), Some(TimeDelta::seconds(60)));
}

#[test]
fn duplicate_timestamps_are_ignored() {
    let points = vec![pt(0), pt(0), pt(60), pt(60), pt(120)];
    assert_eq!(estimate_step(&points), Some(TimeDelta::seconds(60)));
}

#[test]
fn too_short_series_has_no_step() {
    assert_eq!(estimate_step(&[]), None);
    assert_eq!(estimate_step(&[pt(0)]), None);
    assert_eq!(estimate_step(&[pt(0), pt(0)]), None);
}
