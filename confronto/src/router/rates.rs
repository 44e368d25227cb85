use confronto_core::ConfrontoError;
use confronto_types::{AssetId, PivotRate, RateTable};

use crate::Confronto;

impl Confronto {
    /// Fetch the full pivot rate table from the first capable provider.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none advertise
    /// the rate capability.
    #[tracing::instrument(target = "confronto::router", skip(self))]
    pub async fn rate_table(&self) -> Result<RateTable, ConfrontoError> {
        self.fetch_single("rates", "rate table".to_string(), |c| {
            c.as_rate_provider()?;
            let c2 = c.clone();
            Some(async move {
                match c2.as_rate_provider() {
                    Some(p) => p.rate_table().await,
                    None => Err(ConfrontoError::connector(
                        c2.name(),
                        "missing rate capability during call",
                    )),
                }
            })
        })
        .await
    }

    /// Fetch how many pivot units one unit of `asset` is worth.
    ///
    /// # Errors
    /// Returns an error if no eligible provider succeeds or none advertise
    /// the rate capability.
    #[tracing::instrument(target = "confronto::router", skip(self), fields(asset = %asset))]
    pub async fn pivot_rate(&self, asset: &AssetId) -> Result<PivotRate, ConfrontoError> {
        self.fetch_single("rates", format!("pivot rate for {asset}"), |c| {
            c.as_rate_provider()?;
            let c2 = c.clone();
            let asset = asset.clone();
            Some(async move {
                match c2.as_rate_provider() {
                    Some(p) => p.pivot_rate(&asset).await,
                    None => Err(ConfrontoError::connector(
                        c2.name(),
                        "missing rate capability during call",
                    )),
                }
            })
        })
        .await
    }

    /// Convert an amount of `asset` into `target` with freshly fetched
    /// rates. One-shot counterpart to [`crate::RateService`], which keeps
    /// the rates warm on polling loops.
    ///
    /// # Errors
    /// Propagates routing failures and `UnknownCurrency` for a code absent
    /// from the table.
    pub async fn convert(
        &self,
        amount: f64,
        asset: &AssetId,
        target: &str,
    ) -> Result<f64, ConfrontoError> {
        let (rate, table) = tokio::try_join!(self.pivot_rate(asset), self.rate_table())?;
        confronto_core::convert(amount, rate, target, &table)
    }
}
