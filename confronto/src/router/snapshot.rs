use confronto_core::ConfrontoError;
use confronto_types::{AssetId, AssetSnapshot};

use crate::Confronto;

impl Confronto {
    /// Fetch the current market snapshot for a single asset.
    ///
    /// Providers are tried in priority order; the first success wins.
    /// `NotFound` from every attempted provider collapses into a single
    /// `NotFound` for the asset.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none advertise
    /// the snapshot capability.
    #[tracing::instrument(target = "confronto::router", skip(self), fields(asset = %asset))]
    pub async fn snapshot(&self, asset: &AssetId) -> Result<AssetSnapshot, ConfrontoError> {
        self.fetch_single("snapshot", format!("snapshot for {asset}"), |c| {
            c.as_snapshot_provider()?;
            let c2 = c.clone();
            let asset = asset.clone();
            Some(async move {
                match c2.as_snapshot_provider() {
                    Some(p) => p.snapshot(&asset).await,
                    None => Err(ConfrontoError::connector(
                        c2.name(),
                        "missing snapshot capability during call",
                    )),
                }
            })
        })
        .await
    }

    /// Fetch snapshots for multiple assets.
    ///
    /// Executes single-asset requests concurrently and aggregates outcomes
    /// as `(snapshots, failures)`, where `failures` carries per-asset errors
    /// (including `NotFound`). This allows partial success without failing
    /// the entire batch.
    pub async fn snapshots(
        &self,
        assets: &[AssetId],
    ) -> (Vec<AssetSnapshot>, Vec<(AssetId, ConfrontoError)>) {
        if assets.is_empty() {
            return (vec![], vec![]);
        }

        let tasks = assets.iter().map(|asset| {
            let asset = asset.clone();
            async move {
                let res = self.snapshot(&asset).await;
                (asset, res)
            }
        });

        let results = futures::future::join_all(tasks).await;

        let mut snapshots: Vec<AssetSnapshot> = Vec::new();
        let mut failures: Vec<(AssetId, ConfrontoError)> = Vec::new();
        for (asset, res) in results {
            match res {
                Ok(s) => snapshots.push(s),
                Err(e) => failures.push((asset, e)),
            }
        }
        (snapshots, failures)
    }
}
