use serde::{Deserialize, Serialize};

use super::defaults;

/// Session credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Hex-encoded 32-byte signing key. Must be set before the engine starts.
    pub secret: String,
    /// Lifetime of an issued session token in seconds.
    pub token_ttl_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_ttl_secs: defaults::DEFAULT_TOKEN_TTL_SECS,
        }
    }
}
