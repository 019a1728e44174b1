//! Test fixture loader for golden quiz scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! turning them into `QuizAnswers` in tests across crates.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use archetype_core::models::{ArchetypeId, ConfidenceLevel, QuizAnswers};

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    files
}

/// A golden scenario: answers for the built-in bank and the expected outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct GoldenScenario {
    pub name: String,
    pub description: String,
    /// Seven answers per axis, in question-number order.
    pub answers_by_axis: BTreeMap<String, Vec<u8>>,
    pub expected: GoldenExpectation,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoldenExpectation {
    /// Rounded `[structure, motivation, cognitive, task]`.
    pub scores: [u8; 4],
    pub archetype: ArchetypeId,
    pub confidence_level: ConfidenceLevel,
    #[serde(default)]
    pub balanced: bool,
    pub secondary: Option<ArchetypeId>,
}

impl GoldenScenario {
    /// Expand per-axis answer lists into `<axis>-NN` question ids.
    pub fn answers(&self) -> QuizAnswers {
        self.answers_by_axis
            .iter()
            .flat_map(|(axis, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(move |(i, &v)| (format!("{axis}-{:02}", i + 1), v))
            })
            .collect()
    }
}

/// Load every golden scenario under `golden/`.
pub fn golden_scenarios() -> Vec<GoldenScenario> {
    list_fixtures("golden")
        .into_iter()
        .map(|path| {
            let relative = path
                .strip_prefix(fixtures_root())
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_else(|_| path.to_string_lossy().into_owned());
            load_fixture(&relative)
        })
        .collect()
}

/// Answer every question of the built-in bank with the same value.
pub fn uniform_answers(value: u8) -> QuizAnswers {
    ["structure", "motivation", "cognitive", "task"]
        .iter()
        .flat_map(|axis| (1..=7).map(move |i| (format!("{axis}-{i:02}"), value)))
        .collect()
}
