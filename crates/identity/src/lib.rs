//! Cinelog identity provider boundary
//!
//! Wraps the hosted identity provider (Supabase GoTrue) behind a service
//! trait with support for:
//! - Fetching the user record behind an access token
//! - Requesting a password-reset email with a redirect URL
//! - Mock implementation for testing and development

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod gotrue;
pub mod mock;

#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Identity configuration error: {0}")]
    Configuration(String),

    #[error("Identity request failed: {0}")]
    Request(String),

    #[error("{0}")]
    Provider(String),
}

/// User record as reported by the identity provider.
///
/// The provider owns the full lifecycle of this record; the application
/// only ever reads it per-request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Principal {
    pub id: Uuid,
    pub email: Option<String>,
}

/// Identity service configuration
#[derive(Debug, Clone)]
pub struct IdentityConfig {
    /// Identity provider backend (gotrue, mock)
    pub provider: String,
    /// Supabase project base URL
    pub base_url: String,
    /// Supabase anon (publishable) key
    pub anon_key: String,
}

/// Identity service trait for different implementations
#[async_trait::async_trait]
pub trait IdentityService: Send + Sync {
    /// Fetch the user behind an access token.
    ///
    /// `Ok(None)` means the token does not resolve to a user (expired,
    /// revoked, or never valid) - indistinguishable from "no session".
    /// Transport failures and provider outages are errors and propagate.
    async fn get_user(&self, access_token: &str) -> Result<Option<Principal>, IdentityError>;

    /// Request a password-reset email for `email`.
    ///
    /// The provider does not reveal whether the address is registered:
    /// an unregistered email still reports success.
    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), IdentityError>;
}

/// Identity service factory
pub struct IdentityServiceFactory;

impl IdentityServiceFactory {
    /// Create identity service based on configuration
    pub fn create(config: IdentityConfig) -> Result<Box<dyn IdentityService>, IdentityError> {
        match config.provider.as_str() {
            "gotrue" | "supabase" => {
                tracing::info!("Creating GoTrue identity service");
                Ok(Box::new(gotrue::GoTrueClient::new(config)))
            }
            "mock" => {
                tracing::info!("Creating mock identity service");
                Ok(Box::new(mock::MockIdentityService::new()))
            }
            provider => Err(IdentityError::Configuration(format!(
                "Unknown identity provider: {}. Supported providers: gotrue, mock",
                provider
            ))),
        }
    }
}
