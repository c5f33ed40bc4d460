//! Session types
//!
//! The outcome of resolving a request's credentials is a typed value, not
//! HTTP control flow. Only the presentation layer (extractors, handlers)
//! turns an outcome into a redirect or a status code.

use uuid::Uuid;

/// Ephemeral proof of authentication tied to one principal
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// Principal identifier (identity-provider user id)
    pub user_id: Uuid,
    /// Email claim, when the token carries one
    pub email: Option<String>,
    /// Raw access token, for forwarding to the identity provider
    pub access_token: String,
}

/// Result of session resolution for one request
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// A valid session resolving to exactly one principal
    Authenticated(Session),
    /// No credential, a malformed credential, or an invalid/expired token.
    /// Absence of data and absence of session are not distinguished.
    Unauthenticated,
    /// The identity provider itself failed
    ProviderError(String),
}

impl SessionOutcome {
    /// The session, when authenticated
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionOutcome::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Check if this outcome carries a session
    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }
}
