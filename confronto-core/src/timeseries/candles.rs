use confronto_types::{Candle, SeriesPoint};

/// Derive candles from adjacent point samples.
///
/// Each candle opens at the previous sample's value and closes at its own;
/// high and low are the endpoint extremes. The first candle has no
/// predecessor and degenerates to a zero-range doji. This approximation
/// cannot recover true intrabar extremes, so chart output built from it is
/// labeled `CandleSource::Synthesized` and rendered as "line" fidelity.
#[must_use]
pub fn synthesize_candles(points: &[SeriesPoint]) -> Vec<Candle> {
    let mut out = Vec::with_capacity(points.len());
    let mut prev: Option<f64> = None;
    for p in points {
        let open = prev.unwrap_or(p.value);
        let close = p.value;
        out.push(Candle {
            ts: p.ts,
            open,
            high: open.max(close),
            low: open.min(close),
            close,
            volume: None,
        });
        prev = Some(close);
    }
    out
}
