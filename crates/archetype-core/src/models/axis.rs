use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// The four scored dimensions of the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// Structure orientation: high = prefers plans, routines, and order.
    Structure,
    /// Motivation style: high = self-driven, low = externally driven.
    Motivation,
    /// Cognitive focus: high = big-picture and divergent, low = detail and convergent.
    Cognitive,
    /// Task relationship: high = engages tasks readily, low = avoids or delays.
    Task,
}

impl Axis {
    /// Total number of axes.
    pub const COUNT: usize = 4;

    /// All variants, in score-vector order.
    pub const ALL: [Axis; 4] = [Self::Structure, Self::Motivation, Self::Cognitive, Self::Task];

    /// Position of this axis in a score vector.
    pub fn index(self) -> usize {
        match self {
            Self::Structure => 0,
            Self::Motivation => 1,
            Self::Cognitive => 2,
            Self::Task => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Motivation => "motivation",
            Self::Cognitive => "cognitive",
            Self::Task => "task",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
