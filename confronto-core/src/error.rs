use confronto_types::CompareMetric;
use thiserror::Error;

/// Unified error type for the confronto workspace.
///
/// Wraps capability mismatches, argument validation, provider-tagged
/// failures, and the engine's own failure taxonomy (undefined metrics,
/// unknown currencies, restricted upstreams, superseded computations).
#[derive(Debug, Error)]
pub enum ConfrontoError {
    /// The requested capability is not implemented by any registered connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label describing what was requested (e.g. "ohlc").
        capability: &'static str,
    },

    /// Issues with the returned or expected data (missing fields, bad shape).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A resource could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "snapshot for solana".
        what: String,
    },

    /// An individual provider call exceeded the configured timeout.
    #[error("provider timed out: {capability} via {connector}")]
    ProviderTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "series", "snapshot").
        capability: &'static str,
    },

    /// All selected providers failed; contains the individual failures.
    #[error("all providers failed: {0:?}")]
    AllProvidersFailed(Vec<ConfrontoError>),

    /// A comparison's denominator is zero or missing. Surfaced instead of
    /// letting an `inf` or `NaN` reach a rendered number.
    #[error("undefined {metric} comparison: denominator is zero or missing")]
    UndefinedMetric {
        /// Metric whose denominator was undefined.
        metric: CompareMetric,
    },

    /// The target currency code is absent from the rate table. The caller
    /// keeps its previous valid result rather than showing zero.
    #[error("unknown currency: {code}")]
    UnknownCurrency {
        /// Currency code that failed the lookup.
        code: String,
    },

    /// The provider's history endpoint is unavailable (e.g. a restricted
    /// API tier). Recovered by the orchestrator via placeholder synthesis.
    #[error("upstream unavailable via {connector}")]
    UpstreamUnavailable {
        /// Connector that reported the restriction.
        connector: String,
    },

    /// The computation's inputs were superseded before it finished; the
    /// result must be discarded, not rendered.
    #[error("computation superseded by a newer request")]
    Superseded,
}

impl ConfrontoError {
    /// Helper: build an `Unsupported` error for a capability label.
    #[must_use]
    pub const fn unsupported(cap: &'static str) -> Self {
        Self::Unsupported { capability: cap }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a missing resource description.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `ProviderTimeout` error.
    pub fn provider_timeout(connector: impl Into<String>, capability: &'static str) -> Self {
        Self::ProviderTimeout {
            connector: connector.into(),
            capability,
        }
    }

    /// Helper: build an `UnknownCurrency` error.
    pub fn unknown_currency(code: impl Into<String>) -> Self {
        Self::UnknownCurrency { code: code.into() }
    }

    /// Helper: build an `UpstreamUnavailable` error.
    pub fn upstream_unavailable(connector: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            connector: connector.into(),
        }
    }
}
