//! Accounts domain state and auth backend integration

use std::sync::Arc;

use axum::extract::FromRef;
use cinelog_auth::AuthBackend;
use cinelog_identity::IdentityService;

/// Application state for the accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub auth: AuthBackend,
    pub identity: Arc<dyn IdentityService>,
    /// Public site URL, used to build the password-reset redirect link
    pub site_url: String,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
