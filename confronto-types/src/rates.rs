use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Broad class of a quote currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrencyKind {
    /// Government-issued currency (usd, eur, jpy, ...).
    Fiat,
    /// Crypto asset used as a quote unit (eth, sats, ...).
    Crypto,
}

/// One row of the pivot exchange-rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateEntry {
    /// How many units of this currency equal one unit of the pivot asset.
    pub per_pivot: f64,
    /// Fiat or crypto.
    pub kind: CurrencyKind,
    /// Display unit, e.g. "$" or "Ξ".
    pub unit: String,
}

/// Exchange rates of every supported quote currency against the pivot asset.
///
/// A refresh replaces the whole table; rows are never mutated in place, so a
/// reader always sees one internally consistent snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    entries: HashMap<String, RateEntry>,
}

impl RateTable {
    /// Build a table from `(code, entry)` pairs. Codes are case-insensitive
    /// and stored lowercased; a repeated code keeps the last entry.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, RateEntry)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(code, entry)| (code.to_ascii_lowercase(), entry))
                .collect(),
        }
    }

    /// Look up a currency by code, case-insensitively.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&RateEntry> {
        self.entries.get(&code.to_ascii_lowercase())
    }

    /// Number of currencies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(code, entry)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RateEntry)> {
        self.entries.iter().map(|(code, entry)| (code.as_str(), entry))
    }
}

/// How many pivot units one unit of an asset is worth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotRate {
    /// Pivot units per one unit of the asset.
    pub per_unit: f64,
}

impl PivotRate {
    /// Rate for an arbitrary asset.
    #[must_use]
    pub const fn new(per_unit: f64) -> Self {
        Self { per_unit }
    }

    /// The pivot asset quoted against itself: exactly 1, no fetch involved.
    #[must_use]
    pub const fn pivot() -> Self {
        Self { per_unit: 1.0 }
    }
}
