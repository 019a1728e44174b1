use serde::{Deserialize, Serialize};

use super::defaults;

/// Thresholds used when mapping scores onto archetypes.
/// Distances and margins are Euclidean units in the 0–100 score space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// A profile whose every axis is within this distance of 50 is balanced
    /// and always reported with weak confidence.
    pub balanced_band: f64,
    /// The runner-up is reported as secondary when its distance is within
    /// this margin of the primary.
    pub secondary_closeness: f64,
    /// Minimum margin for `exact` confidence.
    pub exact_margin: f64,
    /// Minimum margin for `strong` confidence.
    pub strong_margin: f64,
    /// Minimum margin for `moderate` confidence.
    pub moderate_margin: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            balanced_band: defaults::DEFAULT_BALANCED_BAND,
            secondary_closeness: defaults::DEFAULT_SECONDARY_CLOSENESS,
            exact_margin: defaults::DEFAULT_EXACT_MARGIN,
            strong_margin: defaults::DEFAULT_STRONG_MARGIN,
            moderate_margin: defaults::DEFAULT_MODERATE_MARGIN,
        }
    }
}
