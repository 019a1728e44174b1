use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{ArchetypeProfile, QuizScores};

/// The seven archetypes. Declared in lexical order of their wire ids so the
/// derived `Ord` matches the tie-break order used by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum ArchetypeId {
    AdaptiveGeneralist,
    CarefulPerfectionist,
    CreativeExplorer,
    DeadlineSprinter,
    ScatteredStarter,
    StrategicVisionary,
    StructuredAchiever,
}

impl ArchetypeId {
    pub const COUNT: usize = 7;

    pub const ALL: [ArchetypeId; 7] = [
        Self::AdaptiveGeneralist,
        Self::CarefulPerfectionist,
        Self::CreativeExplorer,
        Self::DeadlineSprinter,
        Self::ScatteredStarter,
        Self::StrategicVisionary,
        Self::StructuredAchiever,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AdaptiveGeneralist => "adaptive-generalist",
            Self::CarefulPerfectionist => "careful-perfectionist",
            Self::CreativeExplorer => "creative-explorer",
            Self::DeadlineSprinter => "deadline-sprinter",
            Self::ScatteredStarter => "scattered-starter",
            Self::StrategicVisionary => "strategic-visionary",
            Self::StructuredAchiever => "structured-achiever",
        }
    }

    /// Centre of the archetype's region, as
    /// `[structure, motivation, cognitive, task]`.
    pub fn centroid_values(self) -> [f64; 4] {
        match self {
            Self::AdaptiveGeneralist => [50.0, 50.0, 50.0, 50.0],
            Self::CarefulPerfectionist => [85.0, 40.0, 25.0, 25.0],
            Self::CreativeExplorer => [20.0, 75.0, 85.0, 55.0],
            Self::DeadlineSprinter => [20.0, 25.0, 45.0, 85.0],
            Self::ScatteredStarter => [20.0, 30.0, 75.0, 20.0],
            Self::StrategicVisionary => [80.0, 70.0, 85.0, 40.0],
            Self::StructuredAchiever => [85.0, 70.0, 40.0, 80.0],
        }
    }

    /// Centroid as a score vector.
    pub fn centroid(self) -> QuizScores {
        QuizScores::from_trusted(self.centroid_values())
    }

    /// Static reference content for result pages.
    pub fn profile(self) -> &'static ArchetypeProfile {
        super::profile::profile_for(self)
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown archetype id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownArchetype(pub String);

impl fmt::Display for UnknownArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown archetype id: {}", self.0)
    }
}

impl std::error::Error for UnknownArchetype {}

impl FromStr for ArchetypeId {
    type Err = UnknownArchetype;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownArchetype(s.to_string()))
    }
}
