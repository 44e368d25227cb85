use std::collections::BTreeMap;

use confronto_core::{AssetId, AssetSnapshot, ChangePeriod};

pub fn by_asset(asset: &AssetId) -> Option<AssetSnapshot> {
    match asset.as_str() {
        "bitcoin" => Some(AssetSnapshot {
            asset: asset.clone(),
            price: 67_000.0,
            market_cap: Some(1_320_000_000_000.0),
            fully_diluted_valuation: Some(1_407_000_000_000.0),
            volume: Some(28_500_000_000.0),
            circulating_supply: Some(19_700_000.0),
            total_supply: Some(19_700_000.0),
            max_supply: Some(21_000_000.0),
            change_pct: changes(&[
                (ChangePeriod::H1, 0.2),
                (ChangePeriod::D1, 1.8),
                (ChangePeriod::D7, -3.1),
                (ChangePeriod::D30, 9.4),
            ]),
        }),
        "ethereum" => Some(AssetSnapshot {
            asset: asset.clone(),
            price: 3_500.0,
            market_cap: Some(420_000_000_000.0),
            // No published FDV; consumers fall back to market cap.
            fully_diluted_valuation: None,
            volume: Some(15_200_000_000.0),
            circulating_supply: Some(120_200_000.0),
            total_supply: Some(120_200_000.0),
            max_supply: None,
            change_pct: changes(&[
                (ChangePeriod::H1, -0.1),
                (ChangePeriod::D1, 2.4),
                (ChangePeriod::D7, 5.9),
                (ChangePeriod::D30, -1.2),
            ]),
        }),
        "solana" => Some(AssetSnapshot {
            asset: asset.clone(),
            price: 145.0,
            market_cap: Some(67_000_000_000.0),
            fully_diluted_valuation: Some(83_000_000_000.0),
            volume: Some(3_200_000_000.0),
            circulating_supply: Some(462_000_000.0),
            total_supply: Some(574_000_000.0),
            max_supply: None,
            change_pct: changes(&[
                (ChangePeriod::D1, -0.8),
                (ChangePeriod::D7, 11.3),
                (ChangePeriod::D30, 24.0),
            ]),
        }),
        // Snapshot-only asset: its history endpoint is restricted, so the
        // orchestrator must synthesize a placeholder from these figures.
        "vaulted" => Some(AssetSnapshot {
            asset: asset.clone(),
            price: 12.5,
            market_cap: Some(125_000_000.0),
            fully_diluted_valuation: None,
            volume: Some(4_600_000.0),
            circulating_supply: Some(10_000_000.0),
            total_supply: None,
            max_supply: None,
            change_pct: changes(&[(ChangePeriod::D1, -4.0), (ChangePeriod::D7, 12.0)]),
        }),
        // Served only after the forced latency in `maybe_fail_or_stall`,
        // for supersession and timeout tests.
        "stall" => Some(AssetSnapshot {
            asset: asset.clone(),
            price: 1.0,
            market_cap: Some(1_000_000.0),
            fully_diluted_valuation: Some(1_000_000.0),
            volume: Some(50_000.0),
            circulating_supply: Some(1_000_000.0),
            total_supply: Some(1_000_000.0),
            max_supply: Some(1_000_000.0),
            change_pct: changes(&[(ChangePeriod::D1, 0.5)]),
        }),
        _ => None,
    }
}

fn changes(pairs: &[(ChangePeriod, f64)]) -> BTreeMap<ChangePeriod, f64> {
    pairs.iter().copied().collect()
}
