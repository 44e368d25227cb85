use chrono::TimeDelta;

use confronto_core::ConfrontoError;
use confronto_core::{align_nearest, estimate_step};
use confronto_types::{
    AlignedPair, AssetId, CompareMetric, ComparisonMetrics, MetricKind, SeriesPoint,
};

use crate::Confronto;

impl Confronto {
    /// Compute scalar comparison metrics between two assets.
    ///
    /// Snapshots are fetched concurrently; the math itself is the single
    /// engine implementation in `confronto_core`, so the ratio and symmetry
    /// laws hold across every call site.
    ///
    /// # Errors
    /// Propagates routing failures, and `UndefinedMetric` when a required
    /// value is missing or a denominator is zero.
    #[tracing::instrument(
        target = "confronto::router",
        skip(self),
        fields(a = %a, b = %b, metric = %metric),
    )]
    pub async fn compare(
        &self,
        a: &AssetId,
        b: &AssetId,
        metric: CompareMetric,
    ) -> Result<ComparisonMetrics, ConfrontoError> {
        let (snap_a, snap_b) = tokio::try_join!(self.snapshot(a), self.snapshot(b))?;
        confronto_core::compare(&snap_a, &snap_b, metric)
    }

    /// Build the shared-axis comparison table for two assets.
    ///
    /// Asset A's series is the primary axis; asset B is aligned onto it by
    /// nearest timestamp. Unless overridden in the configuration, the
    /// tolerance is half of A's sampling step, so a gap in B's feed shows as
    /// a gap instead of borrowing a far-away sample.
    ///
    /// # Errors
    /// Propagates routing failures from either series fetch.
    #[tracing::instrument(
        target = "confronto::router",
        skip(self),
        fields(a = %a, b = %b, metric = %metric),
    )]
    pub async fn comparison_table(
        &self,
        a: &AssetId,
        b: &AssetId,
        metric: MetricKind,
        window: TimeDelta,
    ) -> Result<Vec<AlignedPair>, ConfrontoError> {
        let (series_a, series_b) = tokio::try_join!(
            self.market_series(a, metric, window),
            self.market_series(b, metric, window),
        )?;
        let tolerance = self.align_tolerance_for(&series_a.points);
        Ok(align_nearest(&series_a.points, &series_b.points, tolerance))
    }

    pub(crate) fn align_tolerance_for(&self, primary: &[SeriesPoint]) -> TimeDelta {
        if let Some(fixed) = self.cfg.align_tolerance {
            return TimeDelta::from_std(fixed).unwrap_or(TimeDelta::MAX);
        }
        estimate_step(primary).map_or_else(TimeDelta::zero, |step| step / 2)
    }
}
