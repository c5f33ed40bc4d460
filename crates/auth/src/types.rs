//! Application role type
//!
//! The persistent store keeps the role as text. It is validated into this
//! closed enum at the read boundary; unknown values never propagate as
//! strings into the application.

use serde::{Deserialize, Serialize};

/// Access-level classification of a principal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// Validate a stored role value. Anything outside the closed set is
    /// rejected as absent.
    pub fn parse(raw: &str) -> Option<UserRole> {
        match raw {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }

    /// Check if this role grants admin access
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::User => write!(f, "user"),
            UserRole::Admin => write!(f, "admin"),
        }
    }
}
