use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use confronto_core::ConfrontoError;
use confronto_types::{AssetId, CompareMetric, ComparisonMetrics};

use crate::Confronto;

/// Serializes rapid re-requests of the comparison view.
///
/// Every call takes a generation from an atomic counter before any fetch
/// starts. When a computation finishes, its result is applied only if no
/// newer call has started since; otherwise it surfaces
/// [`ConfrontoError::Superseded`] and the caller drops it. Last request
/// wins, regardless of completion order, so a slow fetch for a deselected
/// pair can never overwrite the metrics of the current one.
pub struct ComparisonSession {
    engine: Arc<Confronto>,
    generation: AtomicU64,
}

impl ComparisonSession {
    /// Wrap an orchestrator in a session.
    #[must_use]
    pub fn new(engine: Arc<Confronto>) -> Self {
        Self {
            engine,
            generation: AtomicU64::new(0),
        }
    }

    /// Compute comparison metrics, discarding the result if a newer request
    /// started while this one was in flight.
    ///
    /// # Errors
    /// `Superseded` when the inputs changed mid-flight; any routing or
    /// engine error otherwise.
    pub async fn compare(
        &self,
        a: &AssetId,
        b: &AssetId,
        metric: CompareMetric,
    ) -> Result<ComparisonMetrics, ConfrontoError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.engine.compare(a, b, metric).await;
        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(ConfrontoError::Superseded);
        }
        result
    }
}
