use chrono::TimeDelta;

use confronto_core::synthesize_candles;
use confronto_core::ConfrontoError;
use confronto_types::{AssetId, Candle, CandleSource, ChartSeries, MetricKind};

use crate::Confronto;

impl Confronto {
    /// Fetch candles for an asset, preferring a native OHLC feed.
    ///
    /// When no registered connector serves native candles for the asset
    /// (capability absent, or `NotFound` everywhere), the price series is
    /// fetched instead and candles are synthesized from adjacent samples.
    /// The result is labeled so the presentation layer can distinguish
    /// native OHLC fidelity from the endpoint approximation.
    ///
    /// # Errors
    /// Returns an error if neither the native path nor the synthesized path
    /// can produce candles.
    #[tracing::instrument(target = "confronto::router", skip(self), fields(asset = %asset))]
    pub async fn chart(
        &self,
        asset: &AssetId,
        window: TimeDelta,
    ) -> Result<ChartSeries, ConfrontoError> {
        match self.native_ohlc(asset, window).await {
            Ok(candles) => Ok(ChartSeries {
                candles,
                source: CandleSource::Native,
            }),
            Err(ConfrontoError::Unsupported { .. } | ConfrontoError::NotFound { .. }) => {
                let series = self
                    .market_series(asset, MetricKind::Price, window)
                    .await?;
                Ok(ChartSeries {
                    candles: synthesize_candles(&series.points),
                    source: CandleSource::Synthesized,
                })
            }
            Err(e) => Err(e),
        }
    }

    async fn native_ohlc(
        &self,
        asset: &AssetId,
        window: TimeDelta,
    ) -> Result<Vec<Candle>, ConfrontoError> {
        self.fetch_single("ohlc", format!("ohlc for {asset}"), |c| {
            c.as_ohlc_provider()?;
            let c2 = c.clone();
            let asset = asset.clone();
            Some(async move {
                match c2.as_ohlc_provider() {
                    Some(p) => p.ohlc(&asset, window).await,
                    None => Err(ConfrontoError::connector(
                        c2.name(),
                        "missing ohlc capability during call",
                    )),
                }
            })
        })
        .await
    }
}
