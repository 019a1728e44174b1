use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ArchetypeId;

/// Qualitative confidence, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    Weak,
    Moderate,
    Strong,
    Exact,
}

impl ConfidenceLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weak => "weak",
            Self::Moderate => "moderate",
            Self::Strong => "strong",
            Self::Exact => "exact",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "weak" => Some(Self::Weak),
            "moderate" => Some(Self::Moderate),
            "strong" => Some(Self::Strong),
            "exact" => Some(Self::Exact),
            _ => None,
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of mapping a score vector onto the archetype set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Classification {
    pub primary: ArchetypeId,
    /// Separation between the best and second-best match, 0–100.
    pub confidence_pct: u8,
    pub confidence_level: ConfidenceLevel,
    /// Every axis sits inside the balanced band around the neutral centre.
    /// Reported alongside the level rather than folded into it.
    #[serde(default)]
    pub balanced: bool,
    /// Runner-up, reported only when it is close to the primary match.
    pub secondary: Option<ArchetypeId>,
    /// Distance from the scores to the primary centroid.
    pub primary_distance: f64,
    /// Distance gap between the best and second-best match.
    pub margin: f64,
}
