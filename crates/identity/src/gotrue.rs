//! GoTrue HTTP client implementation
//!
//! Real HTTP client against the Supabase GoTrue REST API:
//! `GET {base}/auth/v1/user` and `POST {base}/auth/v1/recover`.

use serde::Deserialize;
use uuid::Uuid;

use crate::{IdentityConfig, IdentityError, IdentityService, Principal};

/// Wire shape of the GoTrue user record (subset).
#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: Uuid,
    email: Option<String>,
}

/// Wire shape of a GoTrue error body.
///
/// GoTrue has used both `msg` and `error_description` across versions.
#[derive(Debug, Deserialize)]
struct GoTrueErrorBody {
    msg: Option<String>,
    error_description: Option<String>,
}

/// Real GoTrue identity client.
pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl GoTrueClient {
    /// Create a new GoTrue client from configuration.
    pub fn new(config: IdentityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            anon_key: config.anon_key,
        }
    }

    async fn error_message(response: reqwest::Response) -> String {
        let status = response.status();
        match response.json::<GoTrueErrorBody>().await {
            Ok(body) => body
                .msg
                .or(body.error_description)
                .unwrap_or_else(|| format!("Identity provider returned {}", status)),
            Err(_) => format!("Identity provider returned {}", status),
        }
    }
}

#[async_trait::async_trait]
impl IdentityService for GoTrueClient {
    async fn get_user(&self, access_token: &str) -> Result<Option<Principal>, IdentityError> {
        let response = self
            .http
            .get(format!("{}/auth/v1/user", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            let user: GoTrueUser = response
                .json()
                .await
                .map_err(|e| IdentityError::Request(e.to_string()))?;
            return Ok(Some(Principal {
                id: user.id,
                email: user.email,
            }));
        }

        // 401/403/404 mean the token resolves to no user - absence, not failure
        if status.is_client_error() {
            tracing::debug!(status = %status, "Access token did not resolve to a user");
            return Ok(None);
        }

        Err(IdentityError::Provider(Self::error_message(response).await))
    }

    async fn reset_password_for_email(
        &self,
        email: &str,
        redirect_to: &str,
    ) -> Result<(), IdentityError> {
        let response = self
            .http
            .post(format!("{}/auth/v1/recover", self.base_url))
            .query(&[("redirect_to", redirect_to)])
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email }))
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IdentityError::Provider(Self::error_message(response).await));
        }

        tracing::debug!("Password recovery requested");
        Ok(())
    }
}
