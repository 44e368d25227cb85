use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One timestamped numeric sample (price, market cap, or volume).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    /// Sample timestamp.
    pub ts: DateTime<Utc>,
    /// Sample value.
    pub value: f64,
}

impl SeriesPoint {
    /// Construct a sample at the given timestamp.
    #[must_use]
    pub const fn new(ts: DateTime<Utc>, value: f64) -> Self {
        Self { ts, value }
    }
}

/// Which observable a series tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    /// Spot price in the quote currency.
    Price,
    /// Market capitalization.
    MarketCap,
    /// Traded volume.
    Volume,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Price => "price",
            Self::MarketCap => "market cap",
            Self::Volume => "volume",
        };
        f.write_str(label)
    }
}

/// An ordered run of samples for one (asset, metric) pair.
///
/// Produced by a single fetch and treated as immutable; a newer fetch for the
/// same selection replaces the whole series. Timestamps are non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSeries {
    /// The observable the points track.
    pub metric: MetricKind,
    /// Samples in timestamp order.
    pub points: Vec<SeriesPoint>,
    /// True when the series is a generated placeholder rather than history.
    pub synthetic: bool,
}

impl MarketSeries {
    /// Wrap fetched history points.
    #[must_use]
    pub const fn real(metric: MetricKind, points: Vec<SeriesPoint>) -> Self {
        Self {
            metric,
            points,
            synthetic: false,
        }
    }
}
