use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Axis;
use crate::constants::{SCORE_MAX, SCORE_MIN};
use crate::errors::ScoringError;

/// Normalised axis scores, each in `[0, 100]`, kept at full precision.
///
/// Deserialisation runs the same range check as [`QuizScores::new`], so every
/// value of this type is a valid point in score space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScoreFields")]
pub struct QuizScores {
    structure: f64,
    motivation: f64,
    cognitive: f64,
    task: f64,
}

#[derive(Deserialize)]
struct ScoreFields {
    structure: f64,
    motivation: f64,
    cognitive: f64,
    task: f64,
}

impl TryFrom<ScoreFields> for QuizScores {
    type Error = ScoringError;

    fn try_from(f: ScoreFields) -> Result<Self, Self::Error> {
        Self::new(f.structure, f.motivation, f.cognitive, f.task)
    }
}

impl QuizScores {
    /// Build a score vector, rejecting non-finite or out-of-range values.
    pub fn new(structure: f64, motivation: f64, cognitive: f64, task: f64) -> Result<Self, ScoringError> {
        Self::from_array([structure, motivation, cognitive, task])
    }

    /// Build from values in [`Axis::ALL`] order.
    pub fn from_array(values: [f64; Axis::COUNT]) -> Result<Self, ScoringError> {
        for (axis, value) in Axis::ALL.iter().zip(values) {
            if !value.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&value) {
                return Err(ScoringError::ScoreOutOfRange {
                    axis: axis.to_string(),
                    value,
                });
            }
        }
        let [structure, motivation, cognitive, task] = values;
        Ok(Self {
            structure,
            motivation,
            cognitive,
            task,
        })
    }

    /// Skip the range check for compile-time constants known to be in range.
    pub(crate) const fn from_trusted(values: [f64; Axis::COUNT]) -> Self {
        let [structure, motivation, cognitive, task] = values;
        Self {
            structure,
            motivation,
            cognitive,
            task,
        }
    }

    /// The neutral profile: 50 on every axis.
    pub fn neutral() -> Self {
        let mid = (SCORE_MIN + SCORE_MAX) / 2.0;
        Self {
            structure: mid,
            motivation: mid,
            cognitive: mid,
            task: mid,
        }
    }

    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Structure => self.structure,
            Axis::Motivation => self.motivation,
            Axis::Cognitive => self.cognitive,
            Axis::Task => self.task,
        }
    }

    pub fn as_array(&self) -> [f64; Axis::COUNT] {
        [self.structure, self.motivation, self.cognitive, self.task]
    }

    pub fn structure(&self) -> f64 {
        self.structure
    }

    pub fn motivation(&self) -> f64 {
        self.motivation
    }

    pub fn cognitive(&self) -> f64 {
        self.cognitive
    }

    pub fn task(&self) -> f64 {
        self.task
    }

    /// Euclidean distance to another point in score space.
    pub fn distance_to(&self, other: &QuizScores) -> f64 {
        self.as_array()
            .iter()
            .zip(other.as_array())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    /// Largest absolute deviation from the neutral centre across all axes.
    pub fn max_deviation_from_neutral(&self) -> f64 {
        let mid = (SCORE_MIN + SCORE_MAX) / 2.0;
        self.as_array()
            .iter()
            .map(|v| (v - mid).abs())
            .fold(0.0, f64::max)
    }

    /// Integer scores for display. Comparison logic must use the full-precision values.
    pub fn rounded(&self) -> RoundedScores {
        RoundedScores {
            structure: round_score(self.structure),
            motivation: round_score(self.motivation),
            cognitive: round_score(self.cognitive),
            task: round_score(self.task),
        }
    }
}

fn round_score(value: f64) -> u8 {
    // Range is enforced at construction, so the cast cannot truncate.
    value.round() as u8
}

/// Display form of [`QuizScores`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RoundedScores {
    pub structure: u8,
    pub motivation: u8,
    pub cognitive: u8,
    pub task: u8,
}
