//! # archetype-runtime
//!
//! `QuizEngine` wires the question bank, scoring engine, result store,
//! session signer, and metrics into the request-level operations:
//! `start_session`, `submit`, `result`, `claim`.

pub mod engine;
pub mod summary;

pub use engine::QuizEngine;
pub use summary::ResultSummary;
