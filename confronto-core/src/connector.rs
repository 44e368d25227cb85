use async_trait::async_trait;
use chrono::TimeDelta;

use crate::ConfrontoError;
use confronto_types::{
    AssetId, AssetSnapshot, Candle, MarketSeries, MetricKind, PivotRate, RateTable,
};

/// Focused role trait for connectors that provide point-sampled series.
#[async_trait]
pub trait SeriesProvider: Send + Sync {
    /// Fetch the series for one (asset, metric) pair over a trailing window.
    ///
    /// Connectors whose history endpoint is gated behind a restricted tier
    /// signal `ConfrontoError::UpstreamUnavailable`; the orchestrator then
    /// degrades to placeholder synthesis instead of propagating the failure.
    async fn market_series(
        &self,
        asset: &AssetId,
        metric: MetricKind,
        window: TimeDelta,
    ) -> Result<MarketSeries, ConfrontoError>;
}

/// Focused role trait for connectors with a native OHLC feed.
#[async_trait]
pub trait OhlcProvider: Send + Sync {
    /// Fetch native candles over a trailing window.
    async fn ohlc(&self, asset: &AssetId, window: TimeDelta)
    -> Result<Vec<Candle>, ConfrontoError>;
}

/// Focused role trait for connectors that provide point-in-time market figures.
#[async_trait]
pub trait SnapshotProvider: Send + Sync {
    /// Fetch the current snapshot for one asset.
    async fn snapshot(&self, asset: &AssetId) -> Result<AssetSnapshot, ConfrontoError>;
}

/// Focused role trait for connectors that serve the pivot rate system.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Fetch the full pivot rate table.
    async fn rate_table(&self) -> Result<RateTable, ConfrontoError>;

    /// Fetch how many pivot units one unit of `asset` is worth.
    ///
    /// Implementations must return [`PivotRate::pivot()`] without a network
    /// round-trip when `asset` is the pivot asset itself.
    async fn pivot_rate(&self, asset: &AssetId) -> Result<PivotRate, ConfrontoError>;
}

/// Main connector trait implemented by provider crates. Exposes capability
/// discovery: the orchestrator routes a request only to connectors that
/// advertise the matching provider.
pub trait MarketConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g. "confronto-mock").
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Advertise series capability by returning a usable trait object
    /// reference when supported.
    fn as_series_provider(&self) -> Option<&dyn SeriesProvider> {
        None
    }

    /// If implemented, returns a trait object for native OHLC candles.
    fn as_ohlc_provider(&self) -> Option<&dyn OhlcProvider> {
        None
    }

    /// If implemented, returns a trait object for asset snapshots.
    fn as_snapshot_provider(&self) -> Option<&dyn SnapshotProvider> {
        None
    }

    /// If implemented, returns a trait object for the pivot rate system.
    fn as_rate_provider(&self) -> Option<&dyn RateProvider> {
        None
    }
}
