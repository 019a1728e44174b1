//! ScoringEngine — validate, score, and classify in one call.

use std::sync::Arc;

use archetype_core::config::ClassifierConfig;
use archetype_core::errors::ArchetypeResult;
use archetype_core::models::{Classification, QuizAnswers, QuizScores};

use crate::bank::QuestionBank;
use crate::classifier::Classifier;
use crate::scorer;
use crate::validation::validate_answers;

/// Scores and classification for one answer set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub scores: QuizScores,
    pub classification: Classification,
}

/// Stateless evaluator over an immutable bank and classifier.
/// Cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    bank: Arc<QuestionBank>,
    classifier: Classifier,
}

impl ScoringEngine {
    pub fn new(bank: QuestionBank, config: ClassifierConfig) -> Self {
        Self {
            bank: Arc::new(bank),
            classifier: Classifier::new(config),
        }
    }

    /// Engine over the built-in bank with default thresholds.
    pub fn builtin() -> Self {
        Self::new(QuestionBank::builtin().clone(), ClassifierConfig::default())
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Validate → score → classify.
    pub fn evaluate(&self, answers: &QuizAnswers) -> ArchetypeResult<Evaluation> {
        let validated = match validate_answers(&self.bank, answers) {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(
                    question_id = e.question_id().unwrap_or_default(),
                    error = %e,
                    "answers rejected"
                );
                return Err(e.into());
            }
        };
        let scores = scorer::score(&self.bank, &validated)?;
        let classification = self.classifier.classify(&scores);

        tracing::debug!(
            archetype = %classification.primary,
            confidence = %classification.confidence_level,
            margin = classification.margin,
            "answers classified"
        );

        Ok(Evaluation {
            scores,
            classification,
        })
    }
}
