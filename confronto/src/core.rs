use std::sync::Arc;

use confronto_core::{ConfrontoError, MarketConnector};
use confronto_types::{ConfrontoConfig, FallbackConfig, RateRefreshConfig};

/// Orchestrator that routes requests across registered providers.
pub struct Confronto {
    pub(crate) connectors: Vec<Arc<dyn MarketConnector>>,
    pub(crate) cfg: ConfrontoConfig,
}

impl std::fmt::Debug for Confronto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Confronto")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a `Confronto` orchestrator with custom configuration.
pub struct ConfrontoBuilder {
    connectors: Vec<Arc<dyn MarketConnector>>,
    cfg: ConfrontoConfig,
}

impl Default for ConfrontoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfrontoBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; you must register at least one via
    ///   [`with_connector`](Self::with_connector).
    /// - Defaults are conservative: 5s provider timeout, inferred alignment
    ///   tolerance, the source system's rate cadences (table 300s, pivot
    ///   rate 60s), and a 48-point placeholder curve.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: ConfrontoConfig::default(),
        }
    }

    /// Register a provider connector.
    ///
    /// Registration order is priority order: earlier connectors are tried
    /// first for every capability they advertise. Duplicates are not
    /// deduplicated; avoid registering the same connector twice.
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn MarketConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the per-provider request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: std::time::Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Force a fixed nearest-match tolerance instead of inferring half the
    /// primary series' sampling step per request.
    ///
    /// Behavior and trade-offs:
    /// - A wide tolerance pairs sparse feeds that would otherwise show gaps,
    ///   at the risk of borrowing a far-away sample.
    /// - A zero tolerance only accepts exact timestamp matches.
    #[must_use]
    pub const fn align_tolerance(mut self, tolerance: std::time::Duration) -> Self {
        self.cfg.align_tolerance = Some(tolerance);
        self
    }

    /// Replace the rate polling intervals.
    #[must_use]
    pub const fn rate_refresh(mut self, cfg: RateRefreshConfig) -> Self {
        self.cfg.rate_refresh = cfg;
        self
    }

    /// Replace the placeholder synthesis tuning.
    #[must_use]
    pub const fn fallback(mut self, cfg: FallbackConfig) -> Self {
        self.cfg.fallback = cfg;
        self
    }

    /// Build the `Confronto` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`](Self::with_connector).
    pub fn build(self) -> Result<Confronto, ConfrontoError> {
        if self.connectors.is_empty() {
            return Err(ConfrontoError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }
        Ok(Confronto {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

/// Attribute an untagged error to the connector that produced it.
pub(crate) fn tag_err(connector: &str, e: ConfrontoError) -> ConfrontoError {
    match e {
        e @ (ConfrontoError::NotFound { .. }
        | ConfrontoError::ProviderTimeout { .. }
        | ConfrontoError::Connector { .. }
        | ConfrontoError::UpstreamUnavailable { .. }
        | ConfrontoError::UnknownCurrency { .. }
        | ConfrontoError::UndefinedMetric { .. }
        | ConfrontoError::AllProvidersFailed(_)) => e,
        other => ConfrontoError::Connector {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Confronto {
    /// Start building a new `Confronto` instance.
    #[must_use]
    pub fn builder() -> ConfrontoBuilder {
        ConfrontoBuilder::new()
    }

    /// Wrap a provider future with a timeout and standardized timeout error
    /// mapping.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: std::time::Duration,
        fut: Fut,
    ) -> Result<T, ConfrontoError>
    where
        Fut: std::future::Future<Output = Result<T, ConfrontoError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(ConfrontoError::provider_timeout(connector_name, capability)))
    }

    /// Generic single-item fetch helper.
    ///
    /// - Iterates connectors in priority order and applies the per-provider
    ///   timeout to each attempt.
    /// - Returns the first success; aggregates errors otherwise.
    /// - When every attempted provider reported `NotFound`, collapses the
    ///   failures into a single `NotFound` with the caller's label.
    pub(crate) async fn fetch_single<T, F, Fut>(
        &self,
        capability: &'static str,
        not_found_label: String,
        call: F,
    ) -> Result<T, ConfrontoError>
    where
        T: Send,
        F: Fn(&Arc<dyn MarketConnector>) -> Option<Fut>,
        Fut: std::future::Future<Output = Result<T, ConfrontoError>> + Send,
    {
        let mut attempted_any = false;
        let mut errors: Vec<ConfrontoError> = Vec::new();

        for c in &self.connectors {
            let Some(fut) = call(c) else { continue };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                capability,
                self.cfg.provider_timeout,
                fut,
            )
            .await
            {
                Ok(v) => return Ok(v),
                Err(
                    e @ (ConfrontoError::NotFound { .. } | ConfrontoError::ProviderTimeout { .. }),
                ) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(c.name(), e)),
            }
        }

        if !attempted_any {
            return Err(ConfrontoError::unsupported(capability));
        }

        if errors
            .iter()
            .all(|e| matches!(e, ConfrontoError::NotFound { .. }))
        {
            return Err(ConfrontoError::not_found(not_found_label));
        }

        Err(ConfrontoError::AllProvidersFailed(errors))
    }
}
