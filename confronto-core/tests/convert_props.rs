use confronto_core::convert;
use confronto_core::{ConfrontoError, CurrencyKind, PivotRate, RateEntry, RateTable};
use proptest::prelude::*;

fn table_with(code: &str, per_pivot: f64) -> RateTable {
    RateTable::from_entries([(
        code.to_string(),
        RateEntry {
            per_pivot,
            kind: CurrencyKind::Fiat,
            unit: "$".to_string(),
        },
    )])
}

#[test]
fn chains_source_rate_through_the_table() {
    let table = table_with("usd", 60_000.0);
    let out = convert(2.0, PivotRate::new(0.05), "usd", &table).unwrap();
    assert_eq!(out, 6_000.0);
}

#[test]
fn unknown_currency_is_an_explicit_failure() {
    let table = table_with("usd", 60_000.0);
    let err = convert(1.0, PivotRate::pivot(), "xyz", &table).unwrap_err();
    match err {
        ConfrontoError::UnknownCurrency { code } => assert_eq!(code, "xyz"),
        other => panic!("expected UnknownCurrency, got {other}"),
    }
}

#[test]
fn lookup_ignores_code_case() {
    let table = table_with("usd", 10.0);
    assert_eq!(convert(3.0, PivotRate::pivot(), "USD", &table).unwrap(), 30.0);
}

proptest! {
    #[test]
    fn pivot_as_source_reduces_to_a_table_lookup(
        amount in -1_000_000.0f64..1_000_000.0,
        per_pivot in 0.000_001f64..10_000_000.0,
    ) {
        let table = table_with("usd", per_pivot);
        let out = convert(amount, PivotRate::pivot(), "usd", &table).unwrap();
        prop_assert_eq!(out, amount * per_pivot);
    }

    #[test]
    fn conversion_scales_linearly_in_the_amount(
        amount in 0.0f64..1_000.0,
        per_unit in 0.000_1f64..100.0,
        per_pivot in 0.000_1f64..100_000.0,
    ) {
        let table = table_with("usd", per_pivot);
        let source = PivotRate::new(per_unit);
        let once = convert(amount, source, "usd", &table).unwrap();
        let twice = convert(amount * 2.0, source, "usd", &table).unwrap();
        prop_assert!((twice - once * 2.0).abs() <= once.abs() * 1e-12);
    }
}
