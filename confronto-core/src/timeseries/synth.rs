use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use rand::Rng;

use confronto_types::{ChangePeriod, FallbackConfig, MarketSeries, MetricKind, SeriesPoint};

/// Generate a placeholder series from summary statistics.
///
/// Used only when a provider signals that its history endpoint is
/// unavailable. The start value is recovered from the percent change whose
/// lookback is nearest the requested window; the curve eases from start to
/// the current value along a sinusoidal ramp, and small multiplicative
/// jitter on interior points keeps the shape from looking artificially
/// smooth. The final point always equals `current_value` exactly: that value
/// is independently known to be true, and the placeholder must stay
/// continuous with it.
///
/// The output is a visual stand-in, not a forecast or a reconstruction; it
/// carries `synthetic: true` so no downstream consumer can mistake it for
/// history.
#[must_use]
pub fn fallback_series(
    metric: MetricKind,
    current_value: f64,
    changes: &BTreeMap<ChangePeriod, f64>,
    window: TimeDelta,
    end: DateTime<Utc>,
    cfg: FallbackConfig,
) -> MarketSeries {
    let mut points = Vec::with_capacity(cfg.points);
    if cfg.points == 0 {
        return MarketSeries {
            metric,
            points,
            synthetic: true,
        };
    }
    if cfg.points == 1 || window <= TimeDelta::zero() {
        points.push(SeriesPoint::new(end, current_value));
        return MarketSeries {
            metric,
            points,
            synthetic: true,
        };
    }

    let pct = nearest_change(changes, window);
    let start_value = start_from_change(current_value, pct);

    let n = cfg.points;
    let start_ts = end - window;
    let span_ms = window.num_milliseconds() as f64;
    let mut rng = rand::rng();
    for i in 0..n {
        if i + 1 == n {
            points.push(SeriesPoint::new(end, current_value));
            break;
        }
        let frac = i as f64 / (n - 1) as f64;
        let ts = start_ts + TimeDelta::milliseconds((span_ms * frac).round() as i64);
        let mut value = start_value + (current_value - start_value) * ease_in(frac);
        if i > 0 && cfg.jitter > 0.0 {
            value *= 1.0 + rng.random_range(-cfg.jitter..=cfg.jitter);
        }
        points.push(SeriesPoint::new(ts, value));
    }

    MarketSeries {
        metric,
        points,
        synthetic: true,
    }
}

/// Sinusoidal ease-in: flat at the start, full slope into the endpoint.
fn ease_in(t: f64) -> f64 {
    1.0 - (t * std::f64::consts::FRAC_PI_2).cos()
}

/// Percent change whose lookback span is nearest the requested window.
/// All-missing changes degrade to 0% (a flat placeholder).
fn nearest_change(changes: &BTreeMap<ChangePeriod, f64>, window: TimeDelta) -> f64 {
    changes
        .iter()
        .min_by_key(|(period, _)| (period.span() - window).abs().num_milliseconds())
        .map_or(0.0, |(_, pct)| *pct)
}

/// Invert a percent change to recover the window's starting value.
fn start_from_change(current: f64, pct: f64) -> f64 {
    let denom = 1.0 + pct / 100.0;
    if !denom.is_finite() || denom.abs() < f64::EPSILON {
        // A -100% change has no finite inverse; degrade to a flat line.
        return current;
    }
    current / denom
}
