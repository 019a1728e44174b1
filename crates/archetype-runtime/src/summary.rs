//! Display-ready view of a stored result joined with its reference content.

use serde::Serialize;

use archetype_core::models::{
    ArchetypeId, ArchetypeProfile, ConfidenceLevel, QuizResult, RoundedScores,
};

/// What the results page renders for one session.
#[derive(Debug, Clone, Serialize)]
pub struct ResultSummary {
    pub session_id: String,
    pub archetype: ArchetypeId,
    pub scores: RoundedScores,
    pub confidence_pct: u8,
    pub confidence_level: ConfidenceLevel,
    pub balanced: bool,
    pub secondary: Option<ArchetypeId>,
    pub profile: &'static ArchetypeProfile,
    pub secondary_profile: Option<&'static ArchetypeProfile>,
    pub claimed: bool,
}

impl From<&QuizResult> for ResultSummary {
    fn from(result: &QuizResult) -> Self {
        let c = &result.classification;
        Self {
            session_id: result.session_id.clone(),
            archetype: c.primary,
            scores: result.scores.rounded(),
            confidence_pct: c.confidence_pct,
            confidence_level: c.confidence_level,
            balanced: c.balanced,
            secondary: c.secondary,
            profile: c.primary.profile(),
            secondary_profile: c.secondary.map(ArchetypeId::profile),
            claimed: result.is_claimed(),
        }
    }
}
