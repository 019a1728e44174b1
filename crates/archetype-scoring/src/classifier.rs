//! Nearest-centroid archetype classification with margin-based confidence.

use std::cmp::Ordering;

use archetype_core::config::ClassifierConfig;
use archetype_core::models::{ArchetypeId, Classification, ConfidenceLevel, QuizScores};

/// Distance from a score vector to one archetype centroid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchetypeMatch {
    pub archetype: ArchetypeId,
    pub distance: f64,
}

/// Maps score vectors onto the seven archetypes.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// All archetypes ranked by `(distance, id)`, closest first.
    /// Equal distances fall back to lexical id order, so ranking is total
    /// and repeatable.
    pub fn rank(&self, scores: &QuizScores) -> Vec<ArchetypeMatch> {
        let mut matches: Vec<ArchetypeMatch> = ArchetypeId::ALL
            .iter()
            .map(|&archetype| ArchetypeMatch {
                archetype,
                distance: scores.distance_to(&archetype.centroid()),
            })
            .collect();
        matches.sort_by(compare_matches);
        matches
    }

    /// Classify a score vector.
    pub fn classify(&self, scores: &QuizScores) -> Classification {
        let ranked = self.rank(scores);
        let best = ranked[0];
        let runner_up = ranked[1];
        let margin = (runner_up.distance - best.distance).max(0.0);

        let confidence_level = self.confidence_level(margin);

        let confidence_pct = if runner_up.distance > 0.0 {
            (100.0 * margin / runner_up.distance).round().clamp(0.0, 100.0) as u8
        } else {
            0
        };

        let secondary =
            (margin <= self.config.secondary_closeness).then_some(runner_up.archetype);

        Classification {
            primary: best.archetype,
            confidence_pct,
            confidence_level,
            balanced: self.is_balanced(scores),
            secondary,
            primary_distance: best.distance,
            margin,
        }
    }

    /// Qualitative level for a best-vs-runner-up margin.
    /// Thresholds are checked strongest first, so a larger margin never maps
    /// to a lower level.
    pub fn confidence_level(&self, margin: f64) -> ConfidenceLevel {
        if margin >= self.config.exact_margin {
            ConfidenceLevel::Exact
        } else if margin >= self.config.strong_margin {
            ConfidenceLevel::Strong
        } else if margin >= self.config.moderate_margin {
            ConfidenceLevel::Moderate
        } else {
            ConfidenceLevel::Weak
        }
    }

    /// Every axis within `balanced_band` of the neutral centre. Such profiles
    /// are flagged as balanced whatever their margin; the level itself stays
    /// a function of the margin alone.
    pub fn is_balanced(&self, scores: &QuizScores) -> bool {
        scores.max_deviation_from_neutral() <= self.config.balanced_band
    }
}

fn compare_matches(a: &ArchetypeMatch, b: &ArchetypeMatch) -> Ordering {
    a.distance
        .total_cmp(&b.distance)
        .then_with(|| a.archetype.as_str().cmp(b.archetype.as_str()))
}
