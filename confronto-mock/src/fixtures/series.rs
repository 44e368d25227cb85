use chrono::{DateTime, TimeDelta, Utc};

use confronto_core::{AssetId, Candle, MarketSeries, MetricKind, SeriesPoint};

/// Fixed "now" so fixture output is reproducible across runs.
fn anchor() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap_or(DateTime::UNIX_EPOCH)
}

pub fn by_asset(asset: &AssetId, metric: MetricKind, window: TimeDelta) -> Option<MarketSeries> {
    let base = match (asset.as_str(), metric) {
        ("bitcoin", MetricKind::Price) => 67_000.0,
        ("bitcoin", MetricKind::MarketCap) => 1.32e12,
        ("bitcoin", MetricKind::Volume) => 2.85e10,
        ("ethereum", MetricKind::Price) => 3_500.0,
        ("ethereum", MetricKind::MarketCap) => 4.2e11,
        ("ethereum", MetricKind::Volume) => 1.52e10,
        ("solana", MetricKind::Price) => 145.0,
        ("solana", MetricKind::MarketCap) => 6.7e10,
        ("solana", MetricKind::Volume) => 3.2e9,
        _ => return None,
    };
    Some(MarketSeries::real(metric, wave(base, window)))
}

/// Native-looking candles, served for the pivot asset only so other assets
/// exercise the synthesized-candle path.
pub fn ohlc_by_asset(asset: &AssetId, window: TimeDelta) -> Option<Vec<Candle>> {
    if asset.as_str() != super::PIVOT {
        return None;
    }
    let points = wave(67_000.0, window);
    let candles = points
        .windows(2)
        .map(|pair| {
            let open = pair[0].value;
            let close = pair[1].value;
            // Give the bar a real intrabar range beyond its endpoints.
            let wick = (open - close).abs().max(open.abs() * 0.002) * 0.25;
            Candle {
                ts: pair[1].ts,
                open,
                high: open.max(close) + wick,
                low: open.min(close) - wick,
                close,
                volume: Some(1_000_000.0 + (open - close).abs() * 40.0),
            }
        })
        .collect();
    Some(candles)
}

/// Hourly samples tracing a gentle wave around `base` over the window.
fn wave(base: f64, window: TimeDelta) -> Vec<SeriesPoint> {
    let end = anchor();
    let hours = window.num_hours().max(1);
    let start = end - TimeDelta::hours(hours);
    let mut points = Vec::with_capacity(usize::try_from(hours).unwrap_or(0) + 1);
    for i in 0..=hours {
        let ts = start + TimeDelta::hours(i);
        let phase = i as f64 / 8.0;
        let value = base * (1.0 + 0.04 * phase.sin() + 0.01 * (3.0 * phase).cos());
        points.push(SeriesPoint::new(ts, value));
    }
    points
}
