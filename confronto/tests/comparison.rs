use std::sync::Arc;

use chrono::TimeDelta;
use confronto::Confronto;
use confronto_core::{AssetId, CompareMetric, ConfrontoError, MetricKind};
use confronto_mock::MockConnector;

fn engine() -> Confronto {
    Confronto::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap()
}

#[tokio::test]
async fn price_comparison_reports_the_a_over_b_ratio() {
    let m = engine()
        .compare(
            &AssetId::from("bitcoin"),
            &AssetId::from("ethereum"),
            CompareMetric::Price,
        )
        .await
        .unwrap();
    assert_eq!(m.main_value, 67_000.0);
    assert!((m.multiplier - 67_000.0 / 3_500.0).abs() < 1e-12);
}

#[tokio::test]
async fn fdv_comparison_falls_back_to_market_cap_when_absent() {
    // Ethereum's fixture publishes no FDV; its market cap stands in.
    let m = engine()
        .compare(
            &AssetId::from("bitcoin"),
            &AssetId::from("ethereum"),
            CompareMetric::FullyDilutedValuation,
        )
        .await
        .unwrap();
    assert_eq!(m.sub_value_b, 420_000_000_000.0);
}

#[tokio::test]
async fn implied_price_divides_the_other_valuation_by_own_supply() {
    // "What would bitcoin trade at with ethereum's valuation?"
    let m = engine()
        .compare(
            &AssetId::from("bitcoin"),
            &AssetId::from("ethereum"),
            CompareMetric::ImpliedPrice,
        )
        .await
        .unwrap();
    // Ethereum FDV fallback (market cap) over bitcoin's max supply.
    let expected = 420_000_000_000.0 / 21_000_000.0;
    assert!((m.main_value - expected).abs() < 1e-6);
    assert!((m.multiplier - expected / 67_000.0).abs() < 1e-9);
}

#[tokio::test]
async fn comparison_table_keeps_the_primary_axis_and_pairs_by_timestamp() {
    let engine = engine();
    let window = TimeDelta::days(2);
    let table = engine
        .comparison_table(
            &AssetId::from("bitcoin"),
            &AssetId::from("ethereum"),
            MetricKind::Price,
            window,
        )
        .await
        .unwrap();

    let primary = engine
        .market_series(&AssetId::from("bitcoin"), MetricKind::Price, window)
        .await
        .unwrap();

    assert_eq!(table.len(), primary.points.len());
    for (row, p) in table.iter().zip(&primary.points) {
        assert_eq!(row.ts, p.ts);
        assert_eq!(row.primary, p.value);
        // Both fixture series sample hourly on the same grid, so every row
        // finds a secondary match.
        assert!(row.secondary.is_some());
    }
}

#[tokio::test]
async fn routing_failures_propagate_through_compare() {
    let err = engine()
        .compare(
            &AssetId::from("bitcoin"),
            &AssetId::from("no-such-asset"),
            CompareMetric::Price,
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ConfrontoError::NotFound { .. }));
}
