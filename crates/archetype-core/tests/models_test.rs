use archetype_core::models::*;
use proptest::prelude::*;

#[test]
fn archetype_ids_serialize_as_kebab_case() {
    let json = serde_json::to_string(&ArchetypeId::AdaptiveGeneralist).unwrap();
    assert_eq!(json, "\"adaptive-generalist\"");
    let back: ArchetypeId = serde_json::from_str("\"deadline-sprinter\"").unwrap();
    assert_eq!(back, ArchetypeId::DeadlineSprinter);
}

#[test]
fn archetype_ids_parse_and_display_consistently() {
    for id in ArchetypeId::ALL {
        assert_eq!(id.as_str().parse::<ArchetypeId>().unwrap(), id);
        assert_eq!(id.to_string(), id.as_str());
    }
    assert!("lazy-genius".parse::<ArchetypeId>().is_err());
}

#[test]
fn archetype_declaration_order_is_lexical() {
    let mut by_str = ArchetypeId::ALL;
    by_str.sort_by_key(|id| id.as_str());
    assert_eq!(by_str, ArchetypeId::ALL);

    let mut by_ord = ArchetypeId::ALL;
    by_ord.sort();
    assert_eq!(by_ord, ArchetypeId::ALL);
}

#[test]
fn generalist_centroid_is_neutral_and_others_are_well_separated() {
    let neutral = QuizScores::neutral();
    assert_eq!(ArchetypeId::AdaptiveGeneralist.centroid(), neutral);
    for id in ArchetypeId::ALL {
        if id == ArchetypeId::AdaptiveGeneralist {
            continue;
        }
        let d = id.centroid().distance_to(&neutral);
        assert!(d >= 50.0, "{id} centroid only {d} from neutral");
    }
}

#[test]
fn every_archetype_has_a_complete_profile() {
    for id in ArchetypeId::ALL {
        let profile = id.profile();
        assert_eq!(profile.id, id);
        assert!(!profile.name.is_empty());
        assert!(!profile.tagline.is_empty());
        assert!(!profile.strengths.is_empty());
        assert!(!profile.blockers.is_empty());
        assert!(!profile.quick_wins.is_empty());
        assert!(!profile.recommended_tools.is_empty());
    }
}

#[test]
fn scores_reject_out_of_range_and_non_finite_values() {
    assert!(QuizScores::new(0.0, 100.0, 50.0, 25.5).is_ok());
    assert!(QuizScores::new(-0.1, 50.0, 50.0, 50.0).is_err());
    assert!(QuizScores::new(50.0, 100.01, 50.0, 50.0).is_err());
    assert!(QuizScores::new(50.0, 50.0, f64::NAN, 50.0).is_err());
    assert!(QuizScores::new(50.0, 50.0, 50.0, f64::INFINITY).is_err());
}

#[test]
fn scores_deserialization_enforces_range() {
    let ok: QuizScores =
        serde_json::from_str(r#"{"structure":10,"motivation":20,"cognitive":30,"task":40}"#)
            .unwrap();
    assert_eq!(ok.get(Axis::Cognitive), 30.0);

    let bad = serde_json::from_str::<QuizScores>(
        r#"{"structure":10,"motivation":200,"cognitive":30,"task":40}"#,
    );
    assert!(bad.is_err());
}

#[test]
fn rounded_scores_round_half_away_from_zero() {
    let scores = QuizScores::new(49.5, 50.49, 0.4, 99.6).unwrap();
    let r = scores.rounded();
    assert_eq!((r.structure, r.motivation, r.cognitive, r.task), (50, 50, 0, 100));
}

#[test]
fn answers_serialize_in_id_order_and_keep_integers() {
    let answers = QuizAnswers::new()
        .with("task-01", 4u8)
        .with("cognitive-01", "big-picture")
        .with("structure-01", 3u8);
    let json = serde_json::to_string(&answers).unwrap();
    assert_eq!(
        json,
        r#"{"cognitive-01":"big-picture","structure-01":3,"task-01":4}"#
    );
    let back: QuizAnswers = serde_json::from_str(&json).unwrap();
    assert_eq!(back, answers);
}

#[test]
fn question_orientation_inverts_within_scale() {
    let q = Question::likert("motivation-01", "I need a deadline to start.", Axis::Motivation)
        .inverted();
    assert_eq!(q.oriented(1.0), 5.0);
    assert_eq!(q.oriented(5.0), 1.0);
    assert_eq!(q.oriented(3.0), 3.0);
    assert_eq!(q.midpoint(), 3.0);
}

#[test]
fn confidence_levels_are_ordered_weakest_first() {
    assert!(ConfidenceLevel::Weak < ConfidenceLevel::Moderate);
    assert!(ConfidenceLevel::Moderate < ConfidenceLevel::Strong);
    assert!(ConfidenceLevel::Strong < ConfidenceLevel::Exact);
    assert_eq!(ConfidenceLevel::parse("strong"), Some(ConfidenceLevel::Strong));
    assert_eq!(ConfidenceLevel::parse("certain"), None);
}

proptest! {
    #[test]
    fn prop_distance_is_symmetric_and_bounded(
        a in prop::array::uniform4(0.0f64..=100.0),
        b in prop::array::uniform4(0.0f64..=100.0),
    ) {
        let a = QuizScores::from_array(a).unwrap();
        let b = QuizScores::from_array(b).unwrap();
        let d = a.distance_to(&b);
        prop_assert!((d - b.distance_to(&a)).abs() < 1e-9);
        prop_assert!((0.0..=200.0).contains(&d));
        prop_assert_eq!(a.distance_to(&a), 0.0);
    }
}
