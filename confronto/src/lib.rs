//! Confronto reconciles independently sampled market series and derives
//! comparison metrics across assets and currencies.
//!
//! Overview
//! - Routes fetches to connectors that implement the `confronto_core`
//!   contracts, in registration order with a per-provider timeout and
//!   fallback on failure.
//! - Normalizes series shape: nearest-match alignment onto the primary time
//!   axis, OHLC synthesis when no native candle feed exists, and flagged
//!   placeholder synthesis when a provider's history endpoint is restricted.
//! - Computes scalar comparison metrics and pivot-chained currency
//!   conversions through the single engine implementation in
//!   `confronto_core`, so the ratio and symmetry laws are enforced once
//!   rather than per call site.
//! - Runs the two rate polling loops on independent cadences behind a
//!   cancelable handle.
//!
//! Key behaviors and trade-offs
//! - Supersession: [`ComparisonSession`] tags every computation with a
//!   generation; a result whose generation is no longer current is discarded
//!   (last request wins), never rendered.
//! - Degradation: a restricted history endpoint yields a synthetic series
//!   whose final point equals the independently known current value; the
//!   `synthetic` flag travels with the data.
//! - Rate staleness: a failed refresh keeps the previous table published;
//!   the table and pivot-rate loops never block each other.
//!
//! Building an orchestrator and comparing two assets:
//! ```rust,ignore
//! use std::sync::Arc;
//! use confronto::Confronto;
//! use confronto_core::{AssetId, CompareMetric};
//!
//! let engine = Confronto::builder()
//!     .with_connector(Arc::new(connector))
//!     .build()?;
//!
//! let metrics = engine
//!     .compare(&AssetId::from("bitcoin"), &AssetId::from("ethereum"), CompareMetric::Price)
//!     .await?;
//! println!("multiplier: {}", metrics.multiplier);
//! ```
//!
//! See `confronto/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod refresh;
mod router;
mod session;

pub use crate::core::{Confronto, ConfrontoBuilder};
pub use refresh::{RateService, RateView, RefreshHandle};
pub use session::ComparisonSession;

// Re-export foundational types so applications can depend on `confronto` only.
pub use confronto_core::{
    AlignedPair,
    AssetId,
    AssetSnapshot,
    Candle,
    CandleSource,
    ChangePeriod,
    ChartSeries,
    CompareMetric,
    ComparisonMetrics,
    ConfrontoConfig,
    ConfrontoError,
    CurrencyKind,
    FallbackConfig,
    MarketConnector,
    MarketSeries,
    MetricKind,
    PivotRate,
    RateEntry,
    RateRefreshConfig,
    RateTable,
    SeriesPoint,
};
