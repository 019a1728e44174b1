#![allow(dead_code)]

use archetype_core::models::{QuizAnswers, QuizResult};
use archetype_scoring::ScoringEngine;
use test_fixtures::golden_scenarios;

/// Score `answers` with the built-in bank and wrap them as an unclaimed result.
pub fn make_result(session_id: &str, answers: QuizAnswers) -> QuizResult {
    let engine = ScoringEngine::builtin();
    let eval = engine.evaluate(&answers).unwrap();
    QuizResult::new(
        session_id,
        answers,
        eval.scores,
        eval.classification,
        engine.bank().version(),
    )
}

/// One result per golden scenario, session ids `golden-<name>`.
pub fn golden_results() -> Vec<QuizResult> {
    golden_scenarios()
        .iter()
        .map(|s| make_result(&format!("golden-{}", s.name), s.answers()))
        .collect()
}
