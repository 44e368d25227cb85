use std::sync::Arc;

use chrono::TimeDelta;
use confronto::{CandleSource, Confronto};
use confronto_core::AssetId;
use confronto_mock::MockConnector;

fn engine() -> Confronto {
    Confronto::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn native_ohlc_feed_is_preferred_when_available() {
    let chart = engine()
        .chart(&AssetId::from("bitcoin"), TimeDelta::days(1))
        .await
        .unwrap();
    assert_eq!(chart.source, CandleSource::Native);
    assert!(!chart.candles.is_empty());
    // Native candles carry real intrabar range beyond the endpoints.
    assert!(chart
        .candles
        .iter()
        .any(|c| c.high > c.open.max(c.close) && c.low < c.open.min(c.close)));
}

#[tokio::test]
async fn missing_ohlc_feed_synthesizes_from_point_samples() {
    let chart = engine()
        .chart(&AssetId::from("ethereum"), TimeDelta::days(1))
        .await
        .unwrap();
    assert_eq!(chart.source, CandleSource::Synthesized);
    assert!(!chart.candles.is_empty());

    for c in &chart.candles {
        assert!(c.low <= c.open.min(c.close));
        assert!(c.high >= c.open.max(c.close));
        // Endpoint-derived bars have no information beyond open/close.
        assert_eq!(c.high, c.open.max(c.close));
        assert_eq!(c.low, c.open.min(c.close));
    }
    for pair in chart.candles.windows(2) {
        assert_eq!(pair[1].open, pair[0].close);
    }
}

#[tokio::test]
async fn first_synthesized_candle_is_a_doji() {
    let chart = engine()
        .chart(&AssetId::from("solana"), TimeDelta::hours(12))
        .await
        .unwrap();
    let first = chart.candles[0];
    assert_eq!(first.open, first.close);
    assert_eq!(first.high, first.low);
}
