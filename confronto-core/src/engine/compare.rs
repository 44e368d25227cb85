use crate::ConfrontoError;
use confronto_types::{AssetSnapshot, CompareMetric, ComparisonMetrics};

/// Compute the scalar comparison between two asset snapshots.
///
/// Direct metrics (price, market cap, volume, FDV) report asset A's value
/// and the A-over-B ratio. `ImpliedPrice` answers "what would A's price be
/// if it carried B's fully diluted valuation": B's FDV over A's supply,
/// with the multiplier relating that to A's actual price. The supply
/// divisor falls back max → total → circulating.
///
/// # Errors
/// Returns `ConfrontoError::UndefinedMetric` when a required value is
/// missing or non-finite, or a denominator is zero. Callers must branch on
/// this before formatting, so an `inf` or `NaN` never reaches a rendered
/// number.
pub fn compare(
    a: &AssetSnapshot,
    b: &AssetSnapshot,
    metric: CompareMetric,
) -> Result<ComparisonMetrics, ConfrontoError> {
    match metric {
        CompareMetric::ImpliedPrice => implied_price(a, b),
        direct => direct_ratio(a, b, direct),
    }
}

fn direct_ratio(
    a: &AssetSnapshot,
    b: &AssetSnapshot,
    metric: CompareMetric,
) -> Result<ComparisonMetrics, ConfrontoError> {
    let undefined = || ConfrontoError::UndefinedMetric { metric };
    let value_a = metric_value(a, metric).ok_or_else(undefined)?;
    let value_b = metric_value(b, metric).ok_or_else(undefined)?;
    let multiplier = ratio(value_a, value_b).ok_or_else(undefined)?;
    Ok(ComparisonMetrics {
        main_value: value_a,
        multiplier,
        sub_value_a: value_a,
        sub_value_b: value_b,
    })
}

fn implied_price(
    a: &AssetSnapshot,
    b: &AssetSnapshot,
) -> Result<ComparisonMetrics, ConfrontoError> {
    let undefined = || ConfrontoError::UndefinedMetric {
        metric: CompareMetric::ImpliedPrice,
    };
    let fdv_b = b.fdv().filter(|v| v.is_finite()).ok_or_else(undefined)?;
    let supply_a = a.supply().filter(|v| v.is_finite()).ok_or_else(undefined)?;
    let implied = ratio(fdv_b, supply_a).ok_or_else(undefined)?;
    let multiplier = ratio(implied, a.price).ok_or_else(undefined)?;
    Ok(ComparisonMetrics {
        main_value: implied,
        multiplier,
        sub_value_a: a.price,
        sub_value_b: fdv_b,
    })
}

/// Division that refuses to produce `inf` or `NaN`, including via overflow.
fn ratio(num: f64, den: f64) -> Option<f64> {
    if !num.is_finite() || !den.is_finite() {
        return None;
    }
    let quotient = num / den;
    quotient.is_finite().then_some(quotient)
}

fn metric_value(snapshot: &AssetSnapshot, metric: CompareMetric) -> Option<f64> {
    let value = match metric {
        CompareMetric::Price => Some(snapshot.price),
        CompareMetric::MarketCap => snapshot.market_cap,
        CompareMetric::Volume => snapshot.volume,
        CompareMetric::FullyDilutedValuation => snapshot.fdv(),
        CompareMetric::ImpliedPrice => None,
    };
    value.filter(|v| v.is_finite())
}
