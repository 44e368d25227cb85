//! Background refresh of the pivot rate system.
//!
//! Two polling loops run independently: the full table on a slow cadence and
//! the per-asset pivot rate on a fast one, matching their volatility. Each
//! loop publishes immutable snapshots through a watch channel; a failed poll
//! keeps the previous value published, so a transient upstream error never
//! blanks a rendered conversion, and staleness of one loop never blocks the
//! other.

use std::sync::Arc;

use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use confronto_core::handle;
use confronto_core::{convert, ConfrontoError};
use confronto_types::{AssetId, PivotRate, RateRefreshConfig, RateTable};

use crate::Confronto;

/// Read side of the refresh loops: always exposes the latest published
/// table and rate. Cheap to clone; every clone observes the same loops.
#[derive(Clone)]
pub struct RateView {
    table: watch::Receiver<Arc<RateTable>>,
    pivot: watch::Receiver<PivotRate>,
}

impl RateView {
    /// Latest rate table snapshot.
    #[must_use]
    pub fn table(&self) -> Arc<RateTable> {
        self.table.borrow().clone()
    }

    /// Latest pivot rate for the tracked asset.
    #[must_use]
    pub fn pivot_rate(&self) -> PivotRate {
        *self.pivot.borrow()
    }

    /// Convert an amount of the tracked asset into `target` using the
    /// latest published rates.
    ///
    /// # Errors
    /// Returns `UnknownCurrency` when `target` has no table row; the caller
    /// keeps its previous result rather than rendering zero.
    pub fn convert(&self, amount: f64, target: &str) -> Result<f64, ConfrontoError> {
        convert(amount, self.pivot_rate(), target, &self.table())
    }
}

/// Handle owning the two refresh tasks.
///
/// Stops both loops on [`stop`](Self::stop) or on drop, so a torn-down view
/// cannot leak timers that keep mutating state no one reads.
pub struct RefreshHandle {
    table_task: Option<JoinHandle<()>>,
    table_stop: Option<oneshot::Sender<()>>,
    pivot_task: Option<JoinHandle<()>>,
    pivot_stop: Option<oneshot::Sender<()>>,
}

impl RefreshHandle {
    /// Stop both loops. Equivalent to dropping the handle, but explicit.
    pub fn stop(mut self) {
        self.release();
    }

    fn release(&mut self) {
        handle::shutdown(&mut self.table_task, &mut self.table_stop);
        handle::shutdown(&mut self.pivot_task, &mut self.pivot_stop);
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.release();
    }
}

/// Spawner for the rate polling loops of one tracked asset.
pub struct RateService;

impl RateService {
    /// Fetch the initial table and pivot rate, then start the two polling
    /// loops on their configured cadences.
    ///
    /// # Errors
    /// Fails if either initial fetch fails; no loop is started in that case.
    pub async fn start(
        engine: Arc<Confronto>,
        asset: AssetId,
        cfg: RateRefreshConfig,
    ) -> Result<(RateView, RefreshHandle), ConfrontoError> {
        let table = Arc::new(engine.rate_table().await?);
        let rate = engine.pivot_rate(&asset).await?;

        let (table_tx, table_rx) = watch::channel(table);
        let (pivot_tx, pivot_rx) = watch::channel(rate);
        let (table_stop_tx, table_stop_rx) = oneshot::channel();
        let (pivot_stop_tx, pivot_stop_rx) = oneshot::channel();

        let table_engine = engine.clone();
        let table_task = tokio::spawn(run_table_loop(
            table_engine,
            table_tx,
            table_stop_rx,
            cfg.table_interval,
        ));
        let pivot_task = tokio::spawn(run_pivot_loop(
            engine,
            asset,
            pivot_tx,
            pivot_stop_rx,
            cfg.pivot_interval,
        ));

        Ok((
            RateView {
                table: table_rx,
                pivot: pivot_rx,
            },
            RefreshHandle {
                table_task: Some(table_task),
                table_stop: Some(table_stop_tx),
                pivot_task: Some(pivot_task),
                pivot_stop: Some(pivot_stop_tx),
            },
        ))
    }
}

async fn run_table_loop(
    engine: Arc<Confronto>,
    tx: watch::Sender<Arc<RateTable>>,
    mut stop: oneshot::Receiver<()>,
    every: std::time::Duration,
) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The immediate first tick is consumed here; start() already fetched.
    ticker.tick().await;
    loop {
        tokio::select! {
            _ = &mut stop => break,
            _ = ticker.tick() => match engine.rate_table().await {
                Ok(table) => {
                    let _ = tx.send(Arc::new(table));
                }
                Err(error) => {
                    tracing::warn!(%error, "rate table refresh failed; keeping previous table");
                }
            },
        }
    }
}

async fn run_pivot_loop(
    engine: Arc<Confronto>,
    asset: AssetId,
    tx: watch::Sender<PivotRate>,
    mut stop: oneshot::Receiver<()>,
    every: std::time::Duration,
) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    ticker.tick().await;
    loop {
        tokio::select! {
            _ = &mut stop => break,
            _ = ticker.tick() => match engine.pivot_rate(&asset).await {
                Ok(rate) => {
                    let _ = tx.send(rate);
                }
                Err(error) => {
                    tracing::warn!(%error, asset = %asset, "pivot rate refresh failed; keeping previous rate");
                }
            },
        }
    }
}
