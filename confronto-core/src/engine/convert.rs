use crate::ConfrontoError;
use confronto_types::{PivotRate, RateTable};

/// Convert an amount of a source asset into an arbitrary quote currency by
/// chaining through the pivot asset.
///
/// `source` carries how many pivot units one unit of the source asset is
/// worth; the table row carries how many target units one pivot unit is
/// worth. Their product bridges the two currencies without a direct pair.
/// When the source *is* the pivot, [`PivotRate::pivot()`] makes the first
/// factor exactly 1.
///
/// # Errors
/// Returns `ConfrontoError::UnknownCurrency` when `target` has no row in
/// the table. Callers keep the previous valid result on screen; rendering
/// zero would look like a real price.
pub fn convert(
    amount: f64,
    source: PivotRate,
    target: &str,
    table: &RateTable,
) -> Result<f64, ConfrontoError> {
    let entry = table
        .get(target)
        .ok_or_else(|| ConfrontoError::unknown_currency(target))?;
    Ok(amount * source.per_unit * entry.per_pivot)
}
