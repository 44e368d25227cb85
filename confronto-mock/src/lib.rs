use async_trait::async_trait;
use chrono::TimeDelta;

use confronto_core::connector::{
    MarketConnector, OhlcProvider, RateProvider, SeriesProvider, SnapshotProvider,
};
use confronto_core::{
    AssetId, AssetSnapshot, Candle, ConfrontoError, MarketSeries, MetricKind, PivotRate, RateTable,
};

mod fixtures;

pub use fixtures::PIVOT;

/// Mock connector for CI-safe examples. Provides deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn not_found(what: &str) -> ConfrontoError {
        ConfrontoError::not_found(what.to_string())
    }

    async fn maybe_fail_or_stall(
        asset: &AssetId,
        capability: &'static str,
    ) -> Result<(), ConfrontoError> {
        match asset.as_str() {
            "fail" => Err(ConfrontoError::connector(
                "confronto-mock",
                format!("forced failure: {capability}"),
            )),
            "stall" => {
                // Simulate brief latency; the orchestrator may time out
                // depending on config. Kept short to avoid slowing tests.
                tokio::time::sleep(std::time::Duration::from_millis(200)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl MarketConnector for MockConnector {
    fn name(&self) -> &'static str {
        "confronto-mock"
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        Some(self as &dyn SeriesProvider)
    }
    fn as_ohlc_provider(&self) -> Option<&dyn OhlcProvider> {
        Some(self as &dyn OhlcProvider)
    }
    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        Some(self as &dyn SnapshotProvider)
    }
    fn as_rate_provider(&self) -> Option<&dyn RateProvider> {
        Some(self as &dyn RateProvider)
    }
}

#[async_trait]
impl SeriesProvider for MockConnector {
    async fn market_series(
        &self,
        asset: &AssetId,
        metric: MetricKind,
        window: TimeDelta,
    ) -> Result<MarketSeries, ConfrontoError> {
        Self::maybe_fail_or_stall(asset, "series").await?;
        if asset.as_str() == "vaulted" {
            // Simulates a provider tier without history access; the
            // orchestrator degrades to placeholder synthesis.
            return Err(ConfrontoError::upstream_unavailable("confronto-mock"));
        }
        fixtures::series::by_asset(asset, metric, window)
            .ok_or_else(|| Self::not_found(&format!("series for {asset}")))
    }
}

#[async_trait]
impl OhlcProvider for MockConnector {
    async fn ohlc(
        &self,
        asset: &AssetId,
        window: TimeDelta,
    ) -> Result<Vec<Candle>, ConfrontoError> {
        Self::maybe_fail_or_stall(asset, "ohlc").await?;
        fixtures::series::ohlc_by_asset(asset, window)
            .ok_or_else(|| Self::not_found(&format!("ohlc for {asset}")))
    }
}

#[async_trait]
impl SnapshotProvider for MockConnector {
    async fn snapshot(&self, asset: &AssetId) -> Result<AssetSnapshot, ConfrontoError> {
        Self::maybe_fail_or_stall(asset, "snapshot").await?;
        fixtures::snapshots::by_asset(asset)
            .ok_or_else(|| Self::not_found(&format!("snapshot for {asset}")))
    }
}

#[async_trait]
impl RateProvider for MockConnector {
    async fn rate_table(&self) -> Result<RateTable, ConfrontoError> {
        Ok(fixtures::rates::table())
    }

    async fn pivot_rate(&self, asset: &AssetId) -> Result<PivotRate, ConfrontoError> {
        if asset.as_str() == fixtures::PIVOT {
            // The pivot against itself is exactly 1; no fetch.
            return Ok(PivotRate::pivot());
        }
        fixtures::rates::pivot_rate(asset)
            .ok_or_else(|| Self::not_found(&format!("pivot rate for {asset}")))
    }
}
