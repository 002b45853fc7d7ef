//! # fixme-observability
//!
//! Tracing subscriber setup, span definitions per operation, and the
//! structured events emitted by the clipboard pipeline.

pub mod tracing_setup;

pub use tracing_setup::{events, init_tracing, init_tracing_with_filter};
