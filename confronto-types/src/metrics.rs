use core::fmt;

use serde::{Deserialize, Serialize};

/// Scalar comparison modes between two assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareMetric {
    /// Current price.
    Price,
    /// Market capitalization.
    MarketCap,
    /// Trailing 24h volume.
    Volume,
    /// Fully diluted valuation (market cap when the feed has no FDV).
    FullyDilutedValuation,
    /// Price asset A would have if it carried asset B's fully diluted
    /// valuation over A's own supply.
    ImpliedPrice,
}

impl fmt::Display for CompareMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Price => "price",
            Self::MarketCap => "market cap",
            Self::Volume => "volume",
            Self::FullyDilutedValuation => "fully diluted valuation",
            Self::ImpliedPrice => "implied price",
        };
        f.write_str(label)
    }
}

/// Derived scalar metrics for one (asset A, asset B, metric) selection.
///
/// Computed fresh on every selection change; never cached across a change of
/// inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMetrics {
    /// Headline value for the selected metric: asset A's value, or the
    /// implied price in `ImpliedPrice` mode.
    pub main_value: f64,
    /// Ratio of A over B (implied over current in `ImpliedPrice` mode).
    pub multiplier: f64,
    /// Asset A's contribution to the ratio.
    pub sub_value_a: f64,
    /// Asset B's contribution to the ratio.
    pub sub_value_b: f64,
}
