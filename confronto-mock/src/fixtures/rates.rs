use confronto_core::{AssetId, CurrencyKind, PivotRate, RateEntry, RateTable};

pub fn table() -> RateTable {
    RateTable::from_entries([
        entry("usd", 67_000.0, CurrencyKind::Fiat, "$"),
        entry("eur", 61_500.0, CurrencyKind::Fiat, "€"),
        entry("jpy", 10_450_000.0, CurrencyKind::Fiat, "¥"),
        entry("eth", 19.1, CurrencyKind::Crypto, "Ξ"),
        entry("sats", 100_000_000.0, CurrencyKind::Crypto, "sats"),
    ])
}

pub fn pivot_rate(asset: &AssetId) -> Option<PivotRate> {
    match asset.as_str() {
        "ethereum" => Some(PivotRate::new(0.052_3)),
        "solana" => Some(PivotRate::new(0.002_16)),
        "vaulted" => Some(PivotRate::new(0.000_186)),
        _ => None,
    }
}

fn entry(code: &str, per_pivot: f64, kind: CurrencyKind, unit: &str) -> (String, RateEntry) {
    (
        code.to_string(),
        RateEntry {
            per_pivot,
            kind,
            unit: unit.to_string(),
        },
    )
}
