use chrono::TimeDelta;

use confronto_types::SeriesPoint;

/// Estimate a representative sampling step from positive adjacent timestamp
/// deltas in a time-sorted series.
///
/// Prefer the mode (most frequent positive delta); if there is no unique
/// mode, return the lower median so the estimate is always an actually
/// observed cadence. Duplicate timestamps are ignored. Returns `None` when
/// fewer than two distinct timestamps are present.
///
/// The orchestrator uses half of this step as the default nearest-match
/// tolerance, so alignment adapts to the feed's density instead of assuming
/// one.
#[must_use]
pub fn estimate_step(points: &[SeriesPoint]) -> Option<TimeDelta> {
    if points.len() < 2 {
        return None;
    }

    let mut deltas: Vec<i64> = Vec::with_capacity(points.len() - 1);
    let mut last = points[0].ts;
    for p in &points[1..] {
        let dt = p.ts - last;
        if dt > TimeDelta::zero() {
            deltas.push(dt.num_milliseconds());
            last = p.ts;
        }
    }
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();

    let mut best_delta = deltas[0];
    let mut best_count = 0usize;
    let mut best_candidates = 0usize;

    let mut cur_delta = deltas[0];
    let mut cur_count = 1usize;
    for &d in &deltas[1..] {
        if d == cur_delta {
            cur_count += 1;
            continue;
        }
        (best_delta, best_count, best_candidates) =
            close_run(best_delta, best_count, best_candidates, cur_delta, cur_count);
        cur_delta = d;
        cur_count = 1;
    }
    let (best_delta, _, best_candidates) =
        close_run(best_delta, best_count, best_candidates, cur_delta, cur_count);

    if best_candidates == 1 {
        return Some(TimeDelta::milliseconds(best_delta));
    }

    // Lower median among all observed deltas.
    let mid = deltas.len() / 2;
    let lower_median = if deltas.len() % 2 == 1 {
        deltas[mid]
    } else {
        deltas[mid - 1]
    };
    Some(TimeDelta::milliseconds(lower_median))
}

fn close_run(
    best_delta: i64,
    best_count: usize,
    best_candidates: usize,
    run_delta: i64,
    run_count: usize,
) -> (i64, usize, usize) {
    if run_count > best_count {
        (run_delta, run_count, 1)
    } else if run_count == best_count {
        (best_delta, best_count, best_candidates + 1)
    } else {
        (best_delta, best_count, best_candidates)
    }
}
