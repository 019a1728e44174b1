//! # archetype-scoring
//!
//! The scoring-and-classification engine.
//!
//! ## Modules
//!
//! - `bank` — `QuestionBank`, the validated question/weight table
//! - `validation` — boundary checks producing `ValidatedAnswers`
//! - `scorer` — weighted axis sums rescaled to [0, 100]
//! - `classifier` — nearest-centroid archetype match, confidence, secondary
//! - `engine` — `ScoringEngine` running all three steps

pub mod bank;
pub mod classifier;
mod default_bank;
pub mod engine;
pub mod scorer;
pub mod validation;

pub use bank::QuestionBank;
pub use classifier::{ArchetypeMatch, Classifier};
pub use engine::{Evaluation, ScoringEngine};
pub use validation::{validate_answers, ValidatedAnswers};
