use crate::errors::ArchetypeResult;
use crate::models::{ArchetypeId, QuizResult, UserId};

/// Persistence of immutable quiz results keyed by session id.
pub trait IResultStorage: Send + Sync {
    /// Insert a new result. Fails with `DuplicateSession` if the session
    /// already has one; existing rows are never overwritten.
    fn insert(&self, result: &QuizResult) -> ArchetypeResult<()>;

    fn get(&self, session_id: &str) -> ArchetypeResult<Option<QuizResult>>;

    /// Associate an unclaimed result with a user. Claiming a result the same
    /// user already owns is a no-op; a result owned by someone else fails
    /// with `AlreadyClaimed`.
    fn claim(&self, session_id: &str, user_id: &UserId) -> ArchetypeResult<QuizResult>;

    /// All results owned by a user, oldest first.
    fn results_for_user(&self, user_id: &UserId) -> ArchetypeResult<Vec<QuizResult>>;

    /// Number of stored results per primary archetype. Every archetype is
    /// present, including those with a count of zero.
    fn archetype_distribution(&self) -> ArchetypeResult<Vec<(ArchetypeId, usize)>>;

    fn count(&self) -> ArchetypeResult<usize>;
}
