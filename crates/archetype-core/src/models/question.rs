use serde::{Deserialize, Serialize};

use super::Axis;
use crate::constants;

/// A single quiz question and its contribution to one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Stable id used as the answer key (e.g. `"structure-01"`).
    pub id: String,
    pub prompt: String,
    pub axis: Axis,
    #[serde(default)]
    pub kind: QuestionKind,
    /// Lowest value on the answer scale.
    #[serde(default = "default_scale_min")]
    pub min: u8,
    /// Highest value on the answer scale.
    #[serde(default = "default_scale_max")]
    pub max: u8,
    /// Relative weight of this question within its axis. Must be positive.
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Reverse-keyed: a high answer pulls the axis down.
    #[serde(default)]
    pub inverted: bool,
}

/// How a question is answered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Numeric agreement scale between the question's `min` and `max`.
    #[default]
    Likert,
    /// Pick one of a fixed set of options; each option sits on the numeric scale.
    Categorical { options: Vec<AnswerOption> },
}

/// One option of a categorical question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Wire value submitted by the client.
    pub key: String,
    pub label: String,
    /// Position of the option on the question's scale.
    pub value: u8,
}

fn default_scale_min() -> u8 {
    constants::LIKERT_MIN
}

fn default_scale_max() -> u8 {
    constants::LIKERT_MAX
}

fn default_weight() -> f64 {
    1.0
}

impl Question {
    /// Build a likert question on the default 1–5 scale.
    pub fn likert(id: impl Into<String>, prompt: impl Into<String>, axis: Axis) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            axis,
            kind: QuestionKind::Likert,
            min: constants::LIKERT_MIN,
            max: constants::LIKERT_MAX,
            weight: 1.0,
            inverted: false,
        }
    }

    /// Build a categorical question on the default 1–5 scale.
    pub fn categorical(
        id: impl Into<String>,
        prompt: impl Into<String>,
        axis: Axis,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            kind: QuestionKind::Categorical { options },
            ..Self::likert(id, prompt, axis)
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn inverted(mut self) -> Self {
        self.inverted = true;
        self
    }

    /// Neutral centre of the scale.
    pub fn midpoint(&self) -> f64 {
        (f64::from(self.min) + f64::from(self.max)) / 2.0
    }

    /// Apply the question's direction to an in-range raw value.
    /// Inverted questions map `raw` to `max - raw + min`.
    pub fn oriented(&self, raw: f64) -> f64 {
        if self.inverted {
            f64::from(self.max) - raw + f64::from(self.min)
        } else {
            raw
        }
    }

    /// Whether `value` lies on the declared scale.
    pub fn in_scale(&self, value: f64) -> bool {
        value >= f64::from(self.min) && value <= f64::from(self.max)
    }

    /// Look up a categorical option by its wire key.
    pub fn option(&self, key: &str) -> Option<&AnswerOption> {
        match &self.kind {
            QuestionKind::Categorical { options } => options.iter().find(|o| o.key == key),
            QuestionKind::Likert => None,
        }
    }
}
