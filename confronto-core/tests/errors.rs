use confronto_core::{CompareMetric, ConfrontoError};

#[test]
fn display_formats_are_stable() {
    assert_eq!(
        ConfrontoError::unsupported("ohlc").to_string(),
        "unsupported capability: ohlc"
    );
    assert_eq!(
        ConfrontoError::not_found("snapshot for solana").to_string(),
        "not found: snapshot for solana"
    );
    assert_eq!(
        ConfrontoError::provider_timeout("confronto-mock", "series").to_string(),
        "provider timed out: series via confronto-mock"
    );
    assert_eq!(
        ConfrontoError::unknown_currency("xyz").to_string(),
        "unknown currency: xyz"
    );
    assert_eq!(
        ConfrontoError::upstream_unavailable("confronto-mock").to_string(),
        "upstream unavailable via confronto-mock"
    );
    assert_eq!(
        ConfrontoError::Superseded.to_string(),
        "computation superseded by a newer request"
    );
}

#[test]
fn undefined_metric_names_the_metric() {
    let err = ConfrontoError::UndefinedMetric {
        metric: CompareMetric::FullyDilutedValuation,
    };
    assert_eq!(
        err.to_string(),
        "undefined fully diluted valuation comparison: denominator is zero or missing"
    );
}

#[test]
fn aggregated_failures_keep_the_individual_errors() {
    let err = ConfrontoError::AllProvidersFailed(vec![
        ConfrontoError::connector("a", "boom"),
        ConfrontoError::not_found("series for x"),
    ]);
    let text = err.to_string();
    assert!(text.starts_with("all providers failed"));
    assert!(text.contains("boom"));
}
