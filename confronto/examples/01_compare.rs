use std::sync::Arc;

use confronto::{CompareMetric, Confronto};
use confronto_core::AssetId;
use confronto_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // 1. Build the orchestrator and register the deterministic mock.
    let engine = Confronto::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()?;

    let a = AssetId::from("bitcoin");
    let b = AssetId::from("ethereum");

    // 2. Scalar comparison across several metrics.
    for metric in [
        CompareMetric::Price,
        CompareMetric::MarketCap,
        CompareMetric::ImpliedPrice,
    ] {
        match engine.compare(&a, &b, metric).await {
            Ok(m) => println!(
                "{metric}: main={:.2} multiplier={:.4} (a={:.2}, b={:.2})",
                m.main_value, m.multiplier, m.sub_value_a, m.sub_value_b
            ),
            Err(e) => println!("{metric}: unavailable ({e})"),
        }
    }

    Ok(())
}
