use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use confronto_core::fallback_series;
use confronto_core::{ChangePeriod, FallbackConfig, MetricKind};

fn end() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn no_jitter(points: usize) -> FallbackConfig {
    FallbackConfig {
        points,
        jitter: 0.0,
    }
}

#[test]
fn final_point_is_exactly_the_current_value() {
    let combos: &[&[(ChangePeriod, f64)]] = &[
        &[],
        &[(ChangePeriod::D1, 0.0)],
        &[(ChangePeriod::D1, 12.5)],
        &[(ChangePeriod::D1, -42.0), (ChangePeriod::D7, 80.0)],
        &[(ChangePeriod::H1, -100.0)],
    ];
    for combo in combos {
        let changes: BTreeMap<_, _> = combo.iter().copied().collect();
        let series = fallback_series(
            MetricKind::Price,
            1234.567,
            &changes,
            TimeDelta::days(1),
            end(),
            FallbackConfig::default(),
        );
        let last = series.points.last().unwrap();
        assert_eq!(last.value, 1234.567);
        assert_eq!(last.ts, end());
    }
}

#[test]
fn output_is_flagged_synthetic() {
    let series = fallback_series(
        MetricKind::MarketCap,
        10.0,
        &BTreeMap::new(),
        TimeDelta::days(7),
        end(),
        FallbackConfig::default(),
    );
    assert!(series.synthetic);
    assert_eq!(series.metric, MetricKind::MarketCap);
}

#[test]
fn point_count_and_window_are_honored() {
    let series = fallback_series(
        MetricKind::Price,
        50.0,
        &BTreeMap::new(),
        TimeDelta::hours(6),
        end(),
        no_jitter(30),
    );
    assert_eq!(series.points.len(), 30);
    assert_eq!(series.points[0].ts, end() - TimeDelta::hours(6));
    assert_eq!(series.points.last().unwrap().ts, end());
    for pair in series.points.windows(2) {
        assert!(pair[0].ts <= pair[1].ts);
    }
}

#[test]
fn start_value_inverts_the_nearest_period_change() {
    // D1 is nearer a two-day window than D30; +10% over it puts the start
    // at current / 1.1.
    let changes: BTreeMap<_, _> = [(ChangePeriod::D1, 10.0), (ChangePeriod::D30, 50.0)]
        .into_iter()
        .collect();
    let series = fallback_series(
        MetricKind::Price,
        110.0,
        &changes,
        TimeDelta::days(2),
        end(),
        no_jitter(16),
    );
    assert!((series.points[0].value - 100.0).abs() < 1e-9);
}

#[test]
fn total_loss_change_degrades_to_a_flat_start() {
    // -100% has no finite inverse; the placeholder starts at the current
    // value instead of dividing by zero.
    let changes: BTreeMap<_, _> = [(ChangePeriod::D1, -100.0)].into_iter().collect();
    let series = fallback_series(
        MetricKind::Price,
        25.0,
        &changes,
        TimeDelta::days(1),
        end(),
        no_jitter(8),
    );
    assert_eq!(series.points[0].value, 25.0);
}

#[test]
fn jitter_free_curve_is_monotonic_between_start_and_current() {
    let changes: BTreeMap<_, _> = [(ChangePeriod::D1, 25.0)].into_iter().collect();
    let series = fallback_series(
        MetricKind::Price,
        125.0,
        &changes,
        TimeDelta::days(1),
        end(),
        no_jitter(24),
    );
    // Start 100 -> current 125 along an ease-in ramp.
    for pair in series.points.windows(2) {
        assert!(pair[0].value <= pair[1].value + 1e-9);
    }
}

#[test]
fn degenerate_point_counts_still_end_on_the_current_value() {
    let empty = fallback_series(
        MetricKind::Price,
        9.0,
        &BTreeMap::new(),
        TimeDelta::days(1),
        end(),
        no_jitter(0),
    );
    assert!(empty.points.is_empty());

    let single = fallback_series(
        MetricKind::Price,
        9.0,
        &BTreeMap::new(),
        TimeDelta::days(1),
        end(),
        no_jitter(1),
    );
    assert_eq!(single.points.len(), 1);
    assert_eq!(single.points[0].value, 9.0);
    assert_eq!(single.points[0].ts, end());
}
