//! Boundary validation: raw answers in, scale values out.
//!
//! Out-of-range and unknown answers are rejected here. Nothing is clamped
//! and missing answers are never defaulted.

use archetype_core::errors::ValidationError;
use archetype_core::models::{AnswerValue, Question, QuestionKind, QuizAnswers};

use crate::bank::QuestionBank;

/// Answers that passed validation against one specific bank.
///
/// Holds one scale value per question, in bank order. Only
/// [`validate_answers`] can construct it.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedAnswers {
    bank_version: String,
    bank_fingerprint: blake3::Hash,
    values: Vec<f64>,
}

impl ValidatedAnswers {
    pub fn bank_version(&self) -> &str {
        &self.bank_version
    }

    pub fn bank_fingerprint(&self) -> blake3::Hash {
        self.bank_fingerprint
    }

    /// Scale values in bank order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Validate a full answer set against `bank`.
///
/// Checks run in a fixed order so the same input always reports the same
/// error: unknown ids first, then missing ids (all of them, in bank order),
/// then per-question values in bank order.
pub fn validate_answers(
    bank: &QuestionBank,
    answers: &QuizAnswers,
) -> Result<ValidatedAnswers, ValidationError> {
    if let Some((unknown, _)) = answers.iter().find(|(id, _)| bank.question(id).is_none()) {
        return Err(ValidationError::UnknownQuestion {
            question_id: unknown.to_string(),
        });
    }

    let missing: Vec<String> = bank
        .questions()
        .iter()
        .filter(|q| !answers.contains(&q.id))
        .map(|q| q.id.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingAnswers {
            question_ids: missing,
        });
    }

    let mut values = Vec::with_capacity(bank.len());
    for question in bank.questions() {
        let raw = answers
            .get(&question.id)
            .ok_or_else(|| ValidationError::MissingAnswers {
                question_ids: vec![question.id.clone()],
            })?;
        values.push(validate_one(question, raw)?);
    }

    Ok(ValidatedAnswers {
        bank_version: bank.version().to_string(),
        bank_fingerprint: bank.fingerprint(),
        values,
    })
}

/// Validate a single answer and return its position on the question's scale.
pub fn validate_one(question: &Question, raw: &AnswerValue) -> Result<f64, ValidationError> {
    match &question.kind {
        QuestionKind::Likert => {
            let value = likert_value(question, raw)?;
            if !question.in_scale(value as f64) {
                return Err(reject(
                    question,
                    format!(
                        "{value} is outside the scale {}..={}",
                        question.min, question.max
                    ),
                ));
            }
            Ok(value as f64)
        }
        QuestionKind::Categorical { options } => match raw {
            AnswerValue::Text(key) => question
                .option(key)
                .map(|option| f64::from(option.value))
                .ok_or_else(|| reject(question, format!("{key:?} is not one of {}", option_list(options)))),
            AnswerValue::Number(n) => Err(reject(
                question,
                format!("expected one of {}, got number {n}", option_list(options)),
            )),
        },
    }
}

/// Likert answers must be whole numbers. Numeric strings from form posts are
/// accepted; fractional or non-numeric values are not.
fn likert_value(question: &Question, raw: &AnswerValue) -> Result<i64, ValidationError> {
    match raw {
        AnswerValue::Number(n) => {
            if let Some(v) = n.as_i64() {
                return Ok(v);
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f.abs() <= i64::MAX as f64 => Ok(f as i64),
                _ => Err(reject(question, format!("{n} is not a whole number"))),
            }
        }
        AnswerValue::Text(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| reject(question, format!("{s:?} is not a whole number"))),
    }
}

fn option_list(options: &[archetype_core::models::AnswerOption]) -> String {
    options
        .iter()
        .map(|o| o.key.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn reject(question: &Question, reason: String) -> ValidationError {
    ValidationError::InvalidAnswer {
        question_id: question.id.clone(),
        reason,
    }
}
