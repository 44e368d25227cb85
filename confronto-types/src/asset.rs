use core::fmt;
use std::collections::BTreeMap;

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Provider-agnostic asset identifier (e.g. "bitcoin", "ethereum").
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetId(String);

impl AssetId {
    /// Build an identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AssetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Lookback periods for which upstream feeds quote percent changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChangePeriod {
    /// Trailing hour.
    H1,
    /// Trailing day.
    D1,
    /// Trailing week.
    D7,
    /// Trailing thirty days.
    D30,
    /// Trailing year.
    Y1,
}

impl ChangePeriod {
    /// Length of the lookback window.
    #[must_use]
    pub fn span(self) -> TimeDelta {
        match self {
            Self::H1 => TimeDelta::hours(1),
            Self::D1 => TimeDelta::days(1),
            Self::D7 => TimeDelta::days(7),
            Self::D30 => TimeDelta::days(30),
            Self::Y1 => TimeDelta::days(365),
        }
    }
}

/// Point-in-time market figures for one asset.
///
/// Optional fields mirror what upstream feeds actually omit: niche assets
/// frequently lack an FDV, a max supply, or volume data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    /// Asset the snapshot describes.
    pub asset: AssetId,
    /// Current price in the quote currency.
    pub price: f64,
    /// Market capitalization.
    pub market_cap: Option<f64>,
    /// Fully diluted valuation; `None` when the feed does not publish one.
    pub fully_diluted_valuation: Option<f64>,
    /// Trailing 24h traded volume.
    pub volume: Option<f64>,
    /// Units currently in circulation.
    pub circulating_supply: Option<f64>,
    /// Units issued to date.
    pub total_supply: Option<f64>,
    /// Hard cap on supply, if the asset has one.
    pub max_supply: Option<f64>,
    /// Percent price changes keyed by lookback period.
    pub change_pct: BTreeMap<ChangePeriod, f64>,
}

impl AssetSnapshot {
    /// Fully diluted valuation, falling back to market cap when the feed
    /// does not publish one.
    #[must_use]
    pub fn fdv(&self) -> Option<f64> {
        self.fully_diluted_valuation.or(self.market_cap)
    }

    /// Supply figure used as the implied-price divisor: max supply, then
    /// total, then circulating.
    #[must_use]
    pub fn supply(&self) -> Option<f64> {
        self.max_supply.or(self.total_supply).or(self.circulating_supply)
    }
}
