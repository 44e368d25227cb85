use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Open/high/low/close summary of one interval's movement.
///
/// Invariant: `low <= min(open, close)` and `high >= max(open, close)`.
/// Candles are derived views, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Interval timestamp.
    pub ts: DateTime<Utc>,
    /// First traded value of the interval.
    pub open: f64,
    /// Highest traded value of the interval.
    pub high: f64,
    /// Lowest traded value of the interval.
    pub low: f64,
    /// Last traded value of the interval.
    pub close: f64,
    /// Traded volume, when the feed provides one.
    pub volume: Option<f64>,
}

/// Where a chart's candles came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CandleSource {
    /// Native OHLC feed from the provider.
    Native,
    /// Candles derived from adjacent point samples. Intrabar extremes are
    /// approximated by the endpoints, so these render as "line" fidelity.
    Synthesized,
}

/// Candles plus the fidelity label a consumer must surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Candles in timestamp order.
    pub candles: Vec<Candle>,
    /// Native feed or synthesized from point samples.
    pub source: CandleSource,
}
