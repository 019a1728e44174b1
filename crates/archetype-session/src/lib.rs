//! # archetype-session
//!
//! Server-side association of anonymous quiz sessions.
//! A session id is minted when the quiz starts; the client holds a signed,
//! expiring token for it and presents the token to claim the result later.

pub mod ids;
pub mod signer;

pub use ids::{new_session_id, validate_session_id, validate_user_id};
pub use signer::{SessionSigner, SessionToken, VerifiedSession};
