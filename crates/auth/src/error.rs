//! Access-control errors
//!
//! The page-guard contract: unauthenticated callers are redirected to the
//! login path before any protected data is touched; authenticated callers
//! without the required role get a 403 with a JSON error body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use serde_json::json;

/// Login route unauthenticated callers are redirected to
pub const LOGIN_PATH: &str = "/login";

/// Access-control error
#[derive(Debug)]
pub enum AuthError {
    /// No valid session; resolves to a redirect, not a status page
    Unauthenticated,
    /// Valid session, insufficient role
    RoleForbidden,
    /// The identity provider failed while resolving the caller
    ProviderError(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthenticated => Redirect::to(LOGIN_PATH).into_response(),
            AuthError::RoleForbidden => {
                let body = Json(json!({
                    "error": {
                        "code": "ROLE_FORBIDDEN",
                        "message": "Administrator access required",
                    }
                }));
                (StatusCode::FORBIDDEN, body).into_response()
            }
            AuthError::ProviderError(message) => {
                tracing::error!(error = %message, "Identity provider failure during auth");
                let body = Json(json!({
                    "error": {
                        "code": "IDENTITY_PROVIDER_ERROR",
                        "message": "Authentication is temporarily unavailable",
                    }
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
