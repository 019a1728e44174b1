//! # archetype-core
//!
//! Foundation crate for the archetype quiz engine.
//! Defines the question, answer, score, archetype, and result types, the
//! storage trait, errors, config, and the static archetype reference content.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ArchetypeConfig;
pub use errors::{ArchetypeError, ArchetypeResult};
pub use models::{
    AnswerValue, ArchetypeId, Axis, Classification, ConfidenceLevel, Question, QuizAnswers,
    QuizResult, QuizScores, UserId,
};
