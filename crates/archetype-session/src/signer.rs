//! SessionSigner — issues and verifies `session_id.expires.mac` tokens.
//!
//! The MAC is a blake3 keyed hash over `session_id.expires` with the
//! configured 32-byte secret. Tokens carry no other state.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::Serialize;

use archetype_core::config::SessionConfig;
use archetype_core::constants::SESSION_KEY_LEN;
use archetype_core::errors::{ConfigError, SessionError};

use crate::ids::validate_session_id;

/// A freshly issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionToken {
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
    /// Opaque string handed to the client.
    pub token: String,
}

/// Result of verifying a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedSession {
    pub session_id: String,
    pub expires_at: DateTime<Utc>,
}

/// Signs and verifies session tokens with one secret key.
#[derive(Clone)]
pub struct SessionSigner {
    key: [u8; SESSION_KEY_LEN],
    ttl: Duration,
}

impl std::fmt::Debug for SessionSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionSigner")
            .field("key", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl SessionSigner {
    pub fn new(key: [u8; SESSION_KEY_LEN], ttl: Duration) -> Self {
        Self { key, ttl }
    }

    /// Build from config. The secret must be 64 hex characters.
    pub fn from_config(config: &SessionConfig) -> Result<Self, ConfigError> {
        let key = blake3::Hash::from_hex(config.secret.as_bytes()).map_err(|e| {
            ConfigError::ValidationFailed {
                field: "session.secret".to_string(),
                message: format!("must be 64 hex characters: {e}"),
            }
        })?;
        let ttl = i64::try_from(config.token_ttl_secs)
            .ok()
            .filter(|s| *s > 0)
            .and_then(Duration::try_seconds)
            .ok_or_else(|| ConfigError::ValidationFailed {
                field: "session.token_ttl_secs".to_string(),
                message: format!("{} is not a usable lifetime", config.token_ttl_secs),
            })?;
        Ok(Self::new(*key.as_bytes(), ttl))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token valid for the configured TTL from now.
    pub fn issue(&self, session_id: &str) -> Result<SessionToken, SessionError> {
        self.issue_at(session_id, Utc::now())
    }

    /// Issue a token valid for the configured TTL from `now`.
    pub fn issue_at(&self, session_id: &str, now: DateTime<Utc>) -> Result<SessionToken, SessionError> {
        validate_session_id(session_id)?;
        let expires = now
            .checked_add_signed(self.ttl)
            .ok_or_else(|| malformed("expiry out of range"))?
            .timestamp();
        let mac = self.mac(session_id, expires);
        Ok(SessionToken {
            session_id: session_id.to_string(),
            expires_at: timestamp(expires)?,
            token: format!("{session_id}.{expires}.{}", mac.to_hex()),
        })
    }

    /// Verify a token against the current time.
    pub fn verify(&self, token: &str) -> Result<VerifiedSession, SessionError> {
        self.verify_at(token, Utc::now())
    }

    /// Check structure, signature, then expiry. A token is valid up to and
    /// including its expiry second.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<VerifiedSession, SessionError> {
        let mut parts = token.split('.');
        let (Some(session_id), Some(expires), Some(mac), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(malformed("expected three dot-separated parts"));
        };

        validate_session_id(session_id).map_err(|_| malformed("bad session id"))?;
        let raw_expires = expires;
        let expires: i64 = raw_expires
            .parse()
            .map_err(|_| malformed("expiry is not an integer"))?;
        // One accepted spelling per token: no sign, no leading zeros.
        if expires.to_string() != raw_expires {
            return Err(malformed("expiry is not in canonical form"));
        }
        let presented =
            blake3::Hash::from_hex(mac).map_err(|_| malformed("signature is not 64 hex characters"))?;

        // blake3::Hash equality is constant-time.
        if presented != self.mac(session_id, expires) {
            return Err(SessionError::BadSignature);
        }
        if now.timestamp() > expires {
            return Err(SessionError::Expired { expired_at: expires });
        }

        Ok(VerifiedSession {
            session_id: session_id.to_string(),
            expires_at: timestamp(expires)?,
        })
    }

    fn mac(&self, session_id: &str, expires: i64) -> blake3::Hash {
        blake3::keyed_hash(&self.key, format!("{session_id}.{expires}").as_bytes())
    }
}

fn malformed(reason: &str) -> SessionError {
    SessionError::Malformed {
        reason: reason.to_string(),
    }
}

fn timestamp(secs: i64) -> Result<DateTime<Utc>, SessionError> {
    Utc.timestamp_opt(secs, 0)
        .single()
        .ok_or_else(|| malformed("expiry out of range"))
}
