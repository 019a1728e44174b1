use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ArchetypeId, Classification, QuizAnswers, QuizScores};

/// Opaque identifier of an authenticated user, issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The persisted outcome of one quiz attempt.
///
/// Created once at submission. The only later change is the one-time
/// ownership claim that sets `user_id` and `claimed_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizResult {
    pub session_id: String,
    pub answers: QuizAnswers,
    pub scores: QuizScores,
    pub classification: Classification,
    /// Version of the question bank the answers were scored against.
    pub bank_version: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Option<UserId>,
    pub claimed_at: Option<DateTime<Utc>>,
}

impl QuizResult {
    /// A fresh, unclaimed result.
    pub fn new(
        session_id: impl Into<String>,
        answers: QuizAnswers,
        scores: QuizScores,
        classification: Classification,
        bank_version: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            answers,
            scores,
            classification,
            bank_version: bank_version.into(),
            created_at: Utc::now(),
            user_id: None,
            claimed_at: None,
        }
    }

    pub fn archetype(&self) -> ArchetypeId {
        self.classification.primary
    }

    pub fn is_claimed(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.user_id.as_ref() == Some(user_id)
    }
}
