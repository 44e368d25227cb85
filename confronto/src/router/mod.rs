//! Per-capability request routing over the registered connectors.
mod chart;
mod compare;
mod rates;
mod series;
mod snapshot;
