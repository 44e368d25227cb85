//! confronto-core
//!
//! The pure computation layer of the confronto workspace, plus the contracts
//! it is fed through.
//!
//! - `timeseries`: nearest-match alignment, candle synthesis, cadence
//!   inference, and placeholder synthesis over point-sampled series.
//! - `engine`: scalar comparison metrics and pivot-chained conversion.
//! - `connector`: the `MarketConnector` trait and capability provider traits.
//! - `handle`: abort/stop plumbing for background refresh tasks.
//!
//! Everything in `timeseries` and `engine` is synchronous and CPU-bound over
//! already-fetched data; suspension happens only behind the `connector`
//! contracts. Code that uses `handle` must run under a Tokio 1.x runtime,
//! since it wraps `tokio::task::JoinHandle` and
//! `tokio::sync::oneshot::Sender` for cooperative shutdown.
#![warn(missing_docs)]

/// Connector capability traits and the primary `MarketConnector` interface.
pub mod connector;
/// Scalar derived-metric computations (comparison ratios, conversions).
pub mod engine;
mod error;
/// Abort/stop abstractions shared by background task handles.
pub mod handle;
/// Time-series utilities for aligning, synthesizing, and inferring cadence.
pub mod timeseries;

pub use connector::MarketConnector;
pub use engine::compare::compare;
pub use engine::convert::convert;
pub use error::ConfrontoError;
pub use timeseries::align::align_nearest;
pub use timeseries::candles::synthesize_candles;
pub use timeseries::infer::estimate_step;
pub use timeseries::synth::fallback_series;

// Re-export the shared data model so downstream crates can depend on
// `confronto-core` only.
pub use confronto_types::*;
