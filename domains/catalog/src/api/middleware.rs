//! Catalogue domain state and auth backend integration

use axum::extract::FromRef;
use cinelog_auth::AuthBackend;

use crate::repository::{CatalogRepositories, LinkRepository};

/// Application state for the catalogue domain
#[derive(Clone)]
pub struct CatalogState {
    pub repos: CatalogRepositories,
    pub links: LinkRepository,
    pub auth: AuthBackend,
}

impl FromRef<CatalogState> for AuthBackend {
    fn from_ref(state: &CatalogState) -> Self {
        state.auth.clone()
    }
}
