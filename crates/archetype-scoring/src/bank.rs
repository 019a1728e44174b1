//! QuestionBank — the ordered question/weight table answers are scored against.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use archetype_core::constants::DEFAULT_BANK_VERSION;
use archetype_core::errors::QuestionBankError;
use archetype_core::models::{Axis, Question, QuestionKind};

/// An immutable, validated set of questions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionBank {
    version: String,
    questions: Vec<Question>,
    #[serde(skip)]
    fingerprint: blake3::Hash,
}

#[derive(Deserialize)]
struct RawBank {
    version: String,
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Build and validate a bank.
    pub fn new(
        version: impl Into<String>,
        questions: Vec<Question>,
    ) -> Result<Self, QuestionBankError> {
        let version = version.into();
        let bank = Self {
            fingerprint: fingerprint(&version, &questions),
            version,
            questions,
        };
        bank.validate()?;
        Ok(bank)
    }

    /// The built-in 28-question bank.
    pub fn builtin() -> &'static QuestionBank {
        static BUILTIN: OnceLock<QuestionBank> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let questions = crate::default_bank::questions();
            QuestionBank {
                fingerprint: fingerprint(DEFAULT_BANK_VERSION, &questions),
                version: DEFAULT_BANK_VERSION.to_string(),
                questions,
            }
        })
    }

    /// Load a bank from TOML:
    ///
    /// ```toml
    /// version = "2024.2"
    ///
    /// [[questions]]
    /// id = "structure-01"
    /// prompt = "I plan my day before I start working."
    /// axis = "structure"
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, QuestionBankError> {
        let raw: RawBank = toml::from_str(toml_str).map_err(|e| QuestionBankError::ParseError {
            message: e.to_string(),
        })?;
        Self::new(raw.version, raw.questions)
    }

    /// Check ids, scales, weights, option values, and axis coverage.
    pub fn validate(&self) -> Result<(), QuestionBankError> {
        let mut seen = HashSet::with_capacity(self.questions.len());
        for q in &self.questions {
            if q.id.trim().is_empty() {
                return Err(invalid(q, "id must not be empty"));
            }
            if !seen.insert(q.id.as_str()) {
                return Err(QuestionBankError::DuplicateQuestion {
                    question_id: q.id.clone(),
                });
            }
            if q.min >= q.max {
                return Err(invalid(q, format!("scale min {} must be below max {}", q.min, q.max)));
            }
            if !q.weight.is_finite() || q.weight <= 0.0 {
                return Err(invalid(q, format!("weight {} must be positive", q.weight)));
            }
            if let QuestionKind::Categorical { options } = &q.kind {
                if options.len() < 2 {
                    return Err(invalid(q, "categorical questions need at least two options"));
                }
                let mut keys = HashSet::with_capacity(options.len());
                for option in options {
                    if !keys.insert(option.key.as_str()) {
                        return Err(invalid(q, format!("duplicate option key {}", option.key)));
                    }
                    if option.value < q.min || option.value > q.max {
                        return Err(invalid(
                            q,
                            format!(
                                "option {} value {} is outside the scale {}..={}",
                                option.key, option.value, q.min, q.max
                            ),
                        ));
                    }
                }
            }
        }

        for axis in Axis::ALL {
            if !self.questions.iter().any(|q| q.axis == axis) {
                return Err(QuestionBankError::EmptyAxis {
                    axis: axis.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Content hash over everything that affects scoring. Two banks that
    /// share a version tag but differ in scales, weights, or keying have
    /// different fingerprints.
    pub fn fingerprint(&self) -> blake3::Hash {
        self.fingerprint
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn questions_for(&self, axis: Axis) -> impl Iterator<Item = &Question> {
        self.questions.iter().filter(move |q| q.axis == axis)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Prompt and option label text are excluded; they never change a score.
fn fingerprint(version: &str, questions: &[Question]) -> blake3::Hash {
    fn field(hasher: &mut blake3::Hasher, bytes: &[u8]) {
        hasher.update(&(bytes.len() as u64).to_le_bytes());
        hasher.update(bytes);
    }

    let mut hasher = blake3::Hasher::new();
    field(&mut hasher, version.as_bytes());
    for q in questions {
        field(&mut hasher, q.id.as_bytes());
        field(&mut hasher, q.axis.as_str().as_bytes());
        hasher.update(&[q.min, q.max, u8::from(q.inverted)]);
        hasher.update(&q.weight.to_bits().to_le_bytes());
        match &q.kind {
            QuestionKind::Likert => {
                hasher.update(&[0]);
            }
            QuestionKind::Categorical { options } => {
                hasher.update(&[1]);
                hasher.update(&(options.len() as u64).to_le_bytes());
                for option in options {
                    field(&mut hasher, option.key.as_bytes());
                    hasher.update(&[option.value]);
                }
            }
        }
    }
    hasher.finalize()
}

fn invalid(q: &Question, reason: impl Into<String>) -> QuestionBankError {
    QuestionBankError::InvalidQuestion {
        question_id: q.id.clone(),
        reason: reason.into(),
    }
}
