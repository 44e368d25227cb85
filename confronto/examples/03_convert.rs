use std::sync::Arc;

use confronto::{Confronto, RateRefreshConfig, RateService};
use confronto_core::AssetId;
use confronto_mock::MockConnector;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let engine = Arc::new(
        Confronto::builder()
            .with_connector(Arc::new(MockConnector::new()))
            .build()?,
    );

    // Start the polling loops for ethereum and convert through the pivot.
    let (view, handle) = RateService::start(
        engine.clone(),
        AssetId::from("ethereum"),
        RateRefreshConfig::default(),
    )
    .await?;

    for target in ["usd", "eur", "sats", "xyz"] {
        match view.convert(2.0, target) {
            Ok(v) => println!("2 ETH -> {v:.2} {target}"),
            Err(e) => println!("2 ETH -> {target}: kept previous value ({e})"),
        }
    }

    // The pivot against itself short-circuits to a table lookup.
    let usd = engine.convert(1.0, &AssetId::from("bitcoin"), "usd").await?;
    println!("1 BTC -> {usd:.2} usd");

    handle.stop();
    Ok(())
}
