pub mod answers;
pub mod archetype;
pub mod axis;
pub mod classification;
pub mod profile;
pub mod question;
pub mod quiz_result;
pub mod scores;

pub use answers::{AnswerValue, QuizAnswers};
pub use archetype::ArchetypeId;
pub use axis::Axis;
pub use classification::{Classification, ConfidenceLevel};
pub use profile::ArchetypeProfile;
pub use question::{AnswerOption, Question, QuestionKind};
pub use quiz_result::{QuizResult, UserId};
pub use scores::{QuizScores, RoundedScores};
