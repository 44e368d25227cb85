use chrono::{DateTime, TimeDelta, Utc};

use confronto_types::{AlignedPair, SeriesPoint};

/// Align `secondary` onto `primary`'s time axis by nearest timestamp.
///
/// Every output row keeps the primary timestamp verbatim; alignment never
/// alters the time axis. The matching secondary sample is the one with
/// minimum absolute timestamp distance, located with a binary search over
/// the time-sorted secondary series. Two equidistant candidates resolve to
/// the earlier one, so the result is deterministic. A minimum distance
/// beyond `tolerance` yields `None` for that row rather than a wrong match,
/// and an empty secondary yields all-`None`: both are data shapes, not
/// errors.
#[must_use]
pub fn align_nearest(
    primary: &[SeriesPoint],
    secondary: &[SeriesPoint],
    tolerance: TimeDelta,
) -> Vec<AlignedPair> {
    primary
        .iter()
        .map(|p| AlignedPair {
            ts: p.ts,
            primary: p.value,
            secondary: nearest_within(secondary, p.ts, tolerance),
        })
        .collect()
}

fn nearest_within(
    secondary: &[SeriesPoint],
    ts: DateTime<Utc>,
    tolerance: TimeDelta,
) -> Option<f64> {
    let split = secondary.partition_point(|s| s.ts < ts);
    // The nearest sample is adjacent to the insertion point. Probe the
    // earlier candidate first so an exact tie keeps it.
    let mut best: Option<(TimeDelta, &SeriesPoint)> = None;
    for candidate in [split.checked_sub(1), Some(split)] {
        let Some(s) = candidate.and_then(|i| secondary.get(i)) else {
            continue;
        };
        let dist = (s.ts - ts).abs();
        if best.as_ref().is_none_or(|(d, _)| dist < *d) {
            best = Some((dist, s));
        }
    }
    best.and_then(|(dist, s)| (dist <= tolerance).then_some(s.value))
}
