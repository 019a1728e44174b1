//! # archetype-observability
//!
//! Tracing subscriber setup, structured events for quiz operations, and
//! in-process submission metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{MetricsSnapshot, QuizMetrics};
pub use tracing_setup::init_tracing;
