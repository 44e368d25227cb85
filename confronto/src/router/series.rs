use chrono::{TimeDelta, Utc};

use confronto_core::fallback_series;
use confronto_core::ConfrontoError;
use confronto_types::{AssetId, MarketSeries, MetricKind};

use crate::core::tag_err;
use crate::Confronto;

impl Confronto {
    /// Fetch the point-sampled series for one (asset, metric) pair over a
    /// trailing window.
    ///
    /// Providers are tried in priority order. When any capable provider
    /// reports its history endpoint as unavailable (and none succeeds), the
    /// request degrades to a synthetic placeholder built from the asset's
    /// snapshot; the result carries `synthetic: true` so it cannot be
    /// mistaken for history.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds, none advertise the
    /// capability, or the degraded path cannot obtain a snapshot either.
    #[tracing::instrument(
        target = "confronto::router",
        skip(self),
        fields(asset = %asset, metric = %metric),
    )]
    pub async fn market_series(
        &self,
        asset: &AssetId,
        metric: MetricKind,
        window: TimeDelta,
    ) -> Result<MarketSeries, ConfrontoError> {
        let mut attempted_any = false;
        let mut saw_unavailable = false;
        let mut errors: Vec<ConfrontoError> = Vec::new();

        for c in &self.connectors {
            let Some(p) = c.as_series_provider() else {
                continue;
            };
            attempted_any = true;
            match Self::provider_call_with_timeout(
                c.name(),
                "series",
                self.cfg.provider_timeout,
                p.market_series(asset, metric, window),
            )
            .await
            {
                Ok(series) => return Ok(series),
                Err(e @ ConfrontoError::UpstreamUnavailable { .. }) => {
                    saw_unavailable = true;
                    errors.push(e);
                }
                Err(
                    e @ (ConfrontoError::NotFound { .. } | ConfrontoError::ProviderTimeout { .. }),
                ) => {
                    errors.push(e);
                }
                Err(e) => errors.push(tag_err(c.name(), e)),
            }
        }

        if !attempted_any {
            return Err(ConfrontoError::unsupported("series"));
        }

        if saw_unavailable {
            tracing::debug!(asset = %asset, %metric, "history unavailable upstream; synthesizing placeholder series");
            return self.placeholder_series(asset, metric, window).await;
        }

        if errors
            .iter()
            .all(|e| matches!(e, ConfrontoError::NotFound { .. }))
        {
            return Err(ConfrontoError::not_found(format!("series for {asset}")));
        }

        Err(ConfrontoError::AllProvidersFailed(errors))
    }

    /// Degraded path: rebuild a plausible series from summary statistics.
    /// The snapshot's current value anchors the final point exactly.
    async fn placeholder_series(
        &self,
        asset: &AssetId,
        metric: MetricKind,
        window: TimeDelta,
    ) -> Result<MarketSeries, ConfrontoError> {
        let snapshot = self.snapshot(asset).await?;
        let current = match metric {
            MetricKind::Price => Some(snapshot.price),
            MetricKind::MarketCap => snapshot.market_cap,
            MetricKind::Volume => snapshot.volume,
        };
        let Some(current) = current else {
            return Err(ConfrontoError::Data(format!(
                "no current {metric} for {asset}; cannot synthesize a placeholder"
            )));
        };
        Ok(fallback_series(
            metric,
            current,
            &snapshot.change_pct,
            window,
            Utc::now(),
            self.cfg.fallback,
        ))
    }
}
