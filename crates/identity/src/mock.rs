//! Mock identity service implementation
//!
//! Provides in-memory session and recovery capture for testing without
//! a hosted identity provider.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::{IdentityError, IdentityService, Principal};

/// Password-recovery request captured by the mock service
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecovery {
    pub email: String,
    pub redirect_to: String,
}

/// Mock identity service for testing
#[derive(Debug, Clone, Default)]
pub struct MockIdentityService {
    sessions: Arc<Mutex<HashMap<String, Principal>>>,
    recoveries: Arc<Mutex<Vec<CapturedRecovery>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockIdentityService {
    /// Create a new mock identity service
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token -> principal mapping, returning the principal
    pub fn add_session(&self, access_token: &str, email: &str) -> Principal {
        let principal = Principal {
            id: Uuid::new_v4(),
            email: Some(email.to_string()),
        };
        self.sessions
            .lock()
            .unwrap()
            .insert(access_token.to_string(), principal.clone());
        principal
    }

    /// Make every subsequent call fail with the given provider message
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }

    /// Get all captured recovery requests
    pub fn recoveries(&self) -> Vec<CapturedRecovery> {
        self.recoveries.lock().unwrap().clone()
    }

    /// Get count of captured recovery requests
    pub fn recovery_count(&self) -> usize {
        self.recoveries.lock().unwrap().len()
    }
}

#[async_trait::async_trait]
impl IdentityService for MockIdentityService {
    async fn get_user(&self, access_token: &str) -> Result<Option<Principal>, IdentityError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(IdentityError::Provider(message));
        }

        Ok(self.sessions.lock().unwrap().get(access_token).cloned())
    }

    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), IdentityError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(IdentityError::Provider(message));
        }

        tracing::info!(email = %email, "Mock identity service capturing recovery request");

        // Unregistered emails succeed too - the provider never reveals
        // whether an address exists
        self.recoveries.lock().unwrap().push(CapturedRecovery {
            email: email.to_string(),
            redirect_to: redirect_to.to_string(),
        });

        Ok(())
    }
}
