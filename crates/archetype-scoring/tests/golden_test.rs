//! Golden scenarios: fixed answer sets with known scores and archetypes.

use archetype_core::models::QuizAnswers;
use archetype_scoring::ScoringEngine;
use test_fixtures::golden_scenarios;

#[test]
fn golden_scenarios_are_present() {
    assert!(golden_scenarios().len() >= 10);
}

#[test]
fn golden_scenarios_match_expected_outcome() {
    let engine = ScoringEngine::builtin();
    for scenario in golden_scenarios() {
        let answers: QuizAnswers = scenario.answers();
        let eval = engine
            .evaluate(&answers)
            .unwrap_or_else(|e| panic!("{}: {e}", scenario.name));

        let r = eval.scores.rounded();
        assert_eq!(
            [r.structure, r.motivation, r.cognitive, r.task],
            scenario.expected.scores,
            "{}: scores",
            scenario.name
        );
        assert_eq!(
            eval.classification.primary, scenario.expected.archetype,
            "{}: archetype",
            scenario.name
        );
        assert_eq!(
            eval.classification.confidence_level, scenario.expected.confidence_level,
            "{}: confidence level",
            scenario.name
        );
        assert_eq!(
            eval.classification.balanced, scenario.expected.balanced,
            "{}: balanced",
            scenario.name
        );
        assert_eq!(
            eval.classification.secondary, scenario.expected.secondary,
            "{}: secondary",
            scenario.name
        );
    }
}

#[test]
fn all_threes_is_the_balanced_adaptive_generalist() {
    let eval = ScoringEngine::builtin()
        .evaluate(&test_fixtures::uniform_answers(3))
        .unwrap();
    assert_eq!(eval.scores.as_array(), [50.0; 4]);
    assert_eq!(
        eval.classification.primary.as_str(),
        "adaptive-generalist"
    );
    assert!(eval.classification.balanced);
    assert_eq!(eval.classification.secondary, None);
}
