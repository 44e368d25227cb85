use std::sync::Arc;

use chrono::TimeDelta;
use confronto::{CandleSource, Confronto, MetricKind};
use confronto_core::AssetId;
use confronto_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Confronto::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    let window = TimeDelta::days(2);

    // Native vs synthesized candles: the mock serves real OHLC only for
    // bitcoin, so ethereum's chart is derived from point samples.
    for asset in ["bitcoin", "ethereum"] {
        let chart = engine.chart(&AssetId::from(asset), window).await?;
        let label = match chart.source {
            CandleSource::Native => "native OHLC",
            CandleSource::Synthesized => "synthesized (line fidelity)",
        };
        println!("{asset}: {} candles, {label}", chart.candles.len());
    }

    // Shared-axis comparison table; gaps in the secondary feed stay gaps.
    let table = engine
        .comparison_table(
            &AssetId::from("bitcoin"),
            &AssetId::from("ethereum"),
            MetricKind::Price,
            window,
        )
        .await?;
    let matched = table.iter().filter(|row| row.secondary.is_some()).count();
    println!("aligned rows: {} ({matched} matched)", table.len());
    if let Some(row) = table.first() {
        println!(
            "first row: ts={} primary={:.2} secondary={:?}",
            row.ts, row.primary, row.secondary
        );
    }

    Ok(())
}
