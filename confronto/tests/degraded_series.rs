use std::sync::Arc;

use chrono::TimeDelta;
use confronto::{CandleSource, Confronto};
use confronto_core::{AssetId, MetricKind};
use confronto_mock::MockConnector;

fn engine() -> Confronto {
    Confronto::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn restricted_history_degrades_to_a_flagged_placeholder() {
    let series = engine()
        .market_series(&AssetId::from("vaulted"), MetricKind::Price, TimeDelta::days(1))
        .await
        .unwrap();

    assert!(series.synthetic);
    assert_eq!(series.metric, MetricKind::Price);
    // Default fallback tuning interpolates 48 points.
    assert_eq!(series.points.len(), 48);
    // The final point is the snapshot's current price, exactly.
    assert_eq!(series.points.last().unwrap().value, 12.5);
}

#[tokio::test]
async fn real_history_is_never_flagged_synthetic() {
    let series = engine()
        .market_series(&AssetId::from("bitcoin"), MetricKind::Price, TimeDelta::days(1))
        .await
        .unwrap();
    assert!(!series.synthetic);
}

#[tokio::test]
async fn placeholder_series_also_feeds_the_chart_path() {
    // "vaulted" has no native OHLC and no real history; the chart comes out
    // of the placeholder series and is labeled as synthesized.
    let chart = engine()
        .chart(&AssetId::from("vaulted"), TimeDelta::days(1))
        .await
        .unwrap();
    assert_eq!(chart.source, CandleSource::Synthesized);
    assert_eq!(chart.candles.last().unwrap().close, 12.5);
}

#[tokio::test]
async fn comparison_table_tolerates_one_degraded_leg() {
    // Primary real, secondary synthetic: the table still aligns and the
    // time axis comes from the primary series untouched.
    let engine = engine();
    let table = engine
        .comparison_table(
            &AssetId::from("bitcoin"),
            &AssetId::from("vaulted"),
            MetricKind::Price,
            TimeDelta::days(1),
        )
        .await
        .unwrap();

    let primary = engine
        .market_series(&AssetId::from("bitcoin"), MetricKind::Price, TimeDelta::days(1))
        .await
        .unwrap();
    assert_eq!(table.len(), primary.points.len());
    for (row, p) in table.iter().zip(&primary.points) {
        assert_eq!(row.ts, p.ts);
    }
}
