//! Scoring: determinism, neutral centre, scale extremes, weighting.

use archetype_core::constants::{DEFAULT_QUESTIONS_PER_AXIS, DEFAULT_QUESTION_COUNT};
use archetype_core::models::{Axis, Question, QuizAnswers};
use archetype_scoring::{scorer, validate_answers, QuestionBank};
use test_fixtures::uniform_answers;

fn score_builtin(answers: &QuizAnswers) -> archetype_core::QuizScores {
    let bank = QuestionBank::builtin();
    let validated = validate_answers(bank, answers).unwrap();
    scorer::score(bank, &validated).unwrap()
}

#[test]
fn builtin_bank_has_28_questions_seven_per_axis() {
    let bank = QuestionBank::builtin();
    bank.validate().unwrap();
    assert_eq!(bank.len(), DEFAULT_QUESTION_COUNT);
    for axis in Axis::ALL {
        assert_eq!(
            bank.questions_for(axis).count(),
            DEFAULT_QUESTIONS_PER_AXIS,
            "axis {axis}"
        );
    }
}

#[test]
fn builtin_bank_keys_each_axis_in_one_direction() {
    let bank = QuestionBank::builtin();
    for axis in Axis::ALL {
        let directions: Vec<bool> = bank.questions_for(axis).map(|q| q.inverted).collect();
        assert!(
            directions.iter().all(|&d| d == directions[0]),
            "axis {axis} mixes directions"
        );
    }
}

#[test]
fn all_midpoint_answers_score_exactly_50() {
    let scores = score_builtin(&uniform_answers(3));
    for axis in Axis::ALL {
        assert_eq!(scores.get(axis), 50.0, "axis {axis}");
    }
}

#[test]
fn all_minimum_answers_hit_direction_extremes() {
    let scores = score_builtin(&uniform_answers(1));
    assert_eq!(scores.structure(), 0.0);
    assert_eq!(scores.motivation(), 100.0);
    assert_eq!(scores.cognitive(), 0.0);
    assert_eq!(scores.task(), 100.0);
}

#[test]
fn all_maximum_answers_mirror_all_minimum() {
    let scores = score_builtin(&uniform_answers(5));
    assert_eq!(scores.as_array(), [100.0, 0.0, 100.0, 0.0]);
}

#[test]
fn scoring_is_deterministic() {
    let answers = test_fixtures::golden_scenarios()
        .into_iter()
        .find(|s| s.name == "mixed_with_secondary")
        .unwrap()
        .answers();
    let a = score_builtin(&answers);
    let b = score_builtin(&answers);
    assert_eq!(a, b);
}

#[test]
fn weights_change_the_pull_of_a_question() {
    let light = QuestionBank::new(
        "w",
        vec![
            Question::likert("s1", "a", Axis::Structure),
            Question::likert("s2", "b", Axis::Structure),
            Question::likert("m1", "c", Axis::Motivation),
            Question::likert("c1", "d", Axis::Cognitive),
            Question::likert("t1", "e", Axis::Task),
        ],
    )
    .unwrap();
    let heavy = QuestionBank::new(
        "w",
        vec![
            Question::likert("s1", "a", Axis::Structure).with_weight(3.0),
            Question::likert("s2", "b", Axis::Structure),
            Question::likert("m1", "c", Axis::Motivation),
            Question::likert("c1", "d", Axis::Cognitive),
            Question::likert("t1", "e", Axis::Task),
        ],
    )
    .unwrap();
    let answers = QuizAnswers::new()
        .with("s1", 5u8)
        .with("s2", 1u8)
        .with("m1", 3u8)
        .with("c1", 3u8)
        .with("t1", 3u8);

    let s_light = scorer::score(&light, &validate_answers(&light, &answers).unwrap()).unwrap();
    let s_heavy = scorer::score(&heavy, &validate_answers(&heavy, &answers).unwrap()).unwrap();

    assert_eq!(s_light.structure(), 50.0);
    // (3×5 + 1) − 4 over a range of 16 → 75.
    assert_eq!(s_heavy.structure(), 75.0);
}

#[test]
fn inverted_question_contributes_its_mirror_value() {
    let bank = QuestionBank::new(
        "inv",
        vec![
            Question::likert("s1", "a", Axis::Structure).inverted(),
            Question::likert("m1", "b", Axis::Motivation),
            Question::likert("c1", "c", Axis::Cognitive),
            Question::likert("t1", "d", Axis::Task),
        ],
    )
    .unwrap();
    let answers = QuizAnswers::new()
        .with("s1", 2u8)
        .with("m1", 2u8)
        .with("c1", 3u8)
        .with("t1", 3u8);
    let scores = scorer::score(&bank, &validate_answers(&bank, &answers).unwrap()).unwrap();
    assert_eq!(scores.structure(), 75.0);
    assert_eq!(scores.motivation(), 25.0);
}

#[test]
fn answers_validated_against_another_bank_are_refused() {
    let other = QuestionBank::new(
        "other",
        vec![
            Question::likert("s1", "a", Axis::Structure),
            Question::likert("m1", "b", Axis::Motivation),
            Question::likert("c1", "c", Axis::Cognitive),
            Question::likert("t1", "d", Axis::Task),
        ],
    )
    .unwrap();
    let answers = QuizAnswers::new()
        .with("s1", 1u8)
        .with("m1", 1u8)
        .with("c1", 1u8)
        .with("t1", 1u8);
    let validated = validate_answers(&other, &answers).unwrap();
    let err = scorer::score(QuestionBank::builtin(), &validated).unwrap_err();
    assert!(matches!(
        err,
        archetype_core::errors::ScoringError::BankMismatch { .. }
    ));
}

#[test]
fn same_version_tag_with_different_keying_is_refused() {
    let questions = |inverted: bool| {
        let mut qs = vec![
            Question::likert("s1", "a", Axis::Structure),
            Question::likert("m1", "b", Axis::Motivation),
            Question::likert("c1", "c", Axis::Cognitive),
            Question::likert("t1", "d", Axis::Task),
        ];
        if inverted {
            qs[0] = qs[0].clone().inverted();
        }
        qs
    };
    let plain = QuestionBank::new("2024.1", questions(false)).unwrap();
    let flipped = QuestionBank::new("2024.1", questions(true)).unwrap();
    assert_ne!(plain.fingerprint(), flipped.fingerprint());

    let answers = QuizAnswers::new()
        .with("s1", 1u8)
        .with("m1", 1u8)
        .with("c1", 1u8)
        .with("t1", 1u8);
    let validated = validate_answers(&plain, &answers).unwrap();
    assert!(matches!(
        scorer::score(&flipped, &validated).unwrap_err(),
        archetype_core::errors::ScoringError::BankMismatch { .. }
    ));
    assert!(scorer::score(&plain, &validated).is_ok());
}

#[test]
fn prompt_text_does_not_change_the_fingerprint() {
    let bank = |prompt: &str| {
        QuestionBank::new(
            "v",
            vec![
                Question::likert("s1", prompt, Axis::Structure),
                Question::likert("m1", "b", Axis::Motivation),
                Question::likert("c1", "c", Axis::Cognitive),
                Question::likert("t1", "d", Axis::Task),
            ],
        )
        .unwrap()
    };
    assert_eq!(bank("first wording").fingerprint(), bank("reworded").fingerprint());
    assert_eq!(
        QuestionBank::builtin().fingerprint(),
        QuestionBank::builtin().clone().fingerprint()
    );
}
