//! Configuration for the archetype engine.
//! TOML-based, 3-layer resolution: env > file > defaults.

pub mod archetype_config;
pub mod classifier_config;
pub mod defaults;
pub mod observability_config;
pub mod session_config;
pub mod storage_config;

pub use archetype_config::ArchetypeConfig;
pub use classifier_config::ClassifierConfig;
pub use observability_config::ObservabilityConfig;
pub use session_config::SessionConfig;
pub use storage_config::StorageConfig;
