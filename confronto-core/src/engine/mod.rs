//! Scalar derived metrics over already-fetched snapshots and rate tables.
//!
//! Both operations are pure functions: the same inputs always produce the
//! same outputs, and every call site shares this single implementation so
//! the ratio and symmetry laws are enforced once.
/// Cross-asset comparison metrics.
pub mod compare;
/// Pivot-chained currency conversion.
pub mod convert;
