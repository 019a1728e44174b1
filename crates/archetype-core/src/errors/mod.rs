//! Error handling for the archetype engine.
//! One error enum per subsystem, `thiserror` only, aggregated by `ArchetypeError`.

pub mod archetype_error;
pub mod config_error;
pub mod error_code;
pub mod question_bank_error;
pub mod scoring_error;
pub mod session_error;
pub mod storage_error;
pub mod validation_error;

pub use archetype_error::{ArchetypeError, ArchetypeResult};
pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use question_bank_error::QuestionBankError;
pub use scoring_error::ScoringError;
pub use session_error::SessionError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;
