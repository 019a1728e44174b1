//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{ClassifierConfig, ObservabilityConfig, SessionConfig, StorageConfig};
use crate::constants::SESSION_KEY_LEN;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`ARCHETYPE_*`)
/// 2. Config file (`archetype.toml`)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ArchetypeConfig {
    pub storage: StorageConfig,
    pub classifier: ClassifierConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl ArchetypeConfig {
    /// Load configuration from an optional TOML file, then apply env overrides
    /// and validate the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string. Does not validate.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.read_pool_size == 0 {
            return Err(invalid("storage.read_pool_size", "must be at least 1"));
        }

        let c = &self.classifier;
        for (field, value) in [
            ("classifier.balanced_band", c.balanced_band),
            ("classifier.secondary_closeness", c.secondary_closeness),
            ("classifier.exact_margin", c.exact_margin),
            ("classifier.strong_margin", c.strong_margin),
            ("classifier.moderate_margin", c.moderate_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, "must be a non-negative number"));
            }
        }
        if c.balanced_band > 50.0 {
            return Err(invalid("classifier.balanced_band", "must not exceed 50"));
        }
        if !(c.moderate_margin < c.strong_margin && c.strong_margin < c.exact_margin) {
            return Err(invalid(
                "classifier",
                "margins must satisfy moderate < strong < exact",
            ));
        }

        let secret = &self.session.secret;
        if secret.is_empty() {
            return Err(invalid("session.secret", "must be set"));
        }
        if secret.len() != SESSION_KEY_LEN * 2 || !secret.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid(
                "session.secret",
                "must be 64 hexadecimal characters (32 bytes)",
            ));
        }
        if self.session.token_ttl_secs == 0 {
            return Err(invalid("session.token_ttl_secs", "must be positive"));
        }

        Ok(())
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(config: &mut ArchetypeConfig) {
        if let Ok(val) = std::env::var("ARCHETYPE_DB_PATH") {
            config.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("ARCHETYPE_READ_POOL_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.storage.read_pool_size = v;
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_SESSION_SECRET") {
            config.session.secret = val;
        }
        if let Ok(val) = std::env::var("ARCHETYPE_TOKEN_TTL_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.session.token_ttl_secs = v;
            }
        }
        if let Ok(val) = std::env::var("ARCHETYPE_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
