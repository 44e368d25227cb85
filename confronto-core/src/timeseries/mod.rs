//! Time-series utilities shared by the orchestrator and its consumers.
//!
//! Modules include:
//! - `align`: nearest-match alignment of two series onto one time axis
//! - `candles`: OHLC synthesis from adjacent point samples
//! - `infer`: sampling-step estimation used to pick alignment tolerances
//! - `synth`: flagged placeholder synthesis when history is unavailable
/// Nearest-match alignment onto a primary time axis.
pub mod align;
/// Candle synthesis from point samples.
pub mod candles;
/// Sampling cadence inference.
pub mod infer;
/// Placeholder series synthesis from summary statistics.
pub mod synth;
