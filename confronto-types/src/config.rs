//! Configuration types shared by the orchestrator and background services.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning for the synthetic placeholder series generated when a provider
/// reports its history endpoint as unavailable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Number of points interpolated across the requested window.
    pub points: usize,
    /// Half-width of the multiplicative jitter applied to interior points,
    /// as a fraction (0.01 = ±1%).
    pub jitter: f64,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            points: 48,
            jitter: 0.008,
        }
    }
}

/// Intervals for the two independent rate polling loops.
///
/// The table changes slowly and is replaced wholesale; the per-asset pivot
/// rate is more volatile and refreshes on its own shorter cadence. Staleness
/// of one never blocks the other.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RateRefreshConfig {
    /// How often the full rate table is replaced.
    pub table_interval: Duration,
    /// How often the per-asset pivot rate is re-read.
    pub pivot_interval: Duration,
}

impl Default for RateRefreshConfig {
    fn default() -> Self {
        Self {
            table_interval: Duration::from_secs(300),
            pivot_interval: Duration::from_secs(60),
        }
    }
}

/// Global configuration for the `Confronto` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfrontoConfig {
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Fixed nearest-match tolerance. `None` infers half of the primary
    /// series' sampling step per request.
    pub align_tolerance: Option<Duration>,
    /// Rate polling intervals.
    pub rate_refresh: RateRefreshConfig,
    /// Placeholder synthesis tuning.
    pub fallback: FallbackConfig,
}

impl Default for ConfrontoConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(5),
            align_tolerance: None,
            rate_refresh: RateRefreshConfig::default(),
            fallback: FallbackConfig::default(),
        }
    }
}
