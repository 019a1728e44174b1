//! Axis scoring: weighted sums rescaled to [0, 100].

use archetype_core::constants::{SCORE_MAX, SCORE_MIN};
use archetype_core::errors::ScoringError;
use archetype_core::models::{Axis, QuizScores};

use crate::bank::QuestionBank;
use crate::validation::ValidatedAnswers;

/// Running weighted sums for one axis.
#[derive(Debug, Clone, Copy, Default)]
struct AxisAccumulator {
    raw: f64,
    min: f64,
    max: f64,
}

/// Score validated answers against the bank they were validated with.
///
/// For each axis, sums `weight × oriented value` over that axis' questions and
/// rescales linearly from the attainable range `[Σ weight×min, Σ weight×max]`.
/// Pure: the same answers always produce the same scores.
pub fn score(bank: &QuestionBank, answers: &ValidatedAnswers) -> Result<QuizScores, ScoringError> {
    if answers.bank_fingerprint() != bank.fingerprint() || answers.values().len() != bank.len() {
        return Err(ScoringError::BankMismatch {
            validated: answers.bank_version().to_string(),
            scoring: bank.version().to_string(),
        });
    }

    let mut acc = [AxisAccumulator::default(); Axis::COUNT];
    for (question, &value) in bank.questions().iter().zip(answers.values()) {
        let slot = &mut acc[question.axis.index()];
        slot.raw += question.weight * question.oriented(value);
        slot.min += question.weight * f64::from(question.min);
        slot.max += question.weight * f64::from(question.max);
    }

    let mut values = [0.0; Axis::COUNT];
    for axis in Axis::ALL {
        let a = acc[axis.index()];
        let range = a.max - a.min;
        if range <= 0.0 {
            return Err(ScoringError::DegenerateAxis {
                axis: axis.to_string(),
            });
        }
        values[axis.index()] = SCORE_MIN + (a.raw - a.min) / range * (SCORE_MAX - SCORE_MIN);
    }

    QuizScores::from_array(values)
}
