//! Access-token claims

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims carried by a GoTrue-issued access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the principal identifier
    pub sub: String,
    pub email: Option<String>,
    /// Issued at, seconds since the epoch
    pub iat: u64,
    /// Expires at, seconds since the epoch
    pub exp: u64,
    pub aud: String,
    /// Provider-level role ("authenticated"); distinct from the
    /// application role stored in the users table
    pub role: String,
}

impl AccessClaims {
    /// The subject as a principal id. GoTrue subjects are UUIDs; a subject
    /// of any other shape does not name a principal.
    pub fn principal_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}
