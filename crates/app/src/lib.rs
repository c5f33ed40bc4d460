//! Cinelog application composition root
//!
//! Composes the domain routers into a single application.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use cinelog_accounts::AccountsState;
use cinelog_auth::{AuthBackend, AuthConfig};
use cinelog_catalog::{CatalogRepositories, CatalogState, LinkRepository};
use cinelog_common::Config;
use cinelog_identity::{IdentityConfig, IdentityService, IdentityServiceFactory};
use cinelog_storage::{ObjectStore, ObjectStoreFactory, StorageConfig};

/// Create the main application router with all routes and middleware
pub async fn create_app(config: Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Session validation against the Supabase project's JWT secret
    let auth_config = AuthConfig {
        jwt_secret: config.supabase_jwt_secret.clone(),
        issuer: Some(format!(
            "{}/auth/v1",
            config.supabase_url.trim_end_matches('/')
        )),
        audience: Some("authenticated".to_string()),
    };
    let auth = AuthBackend::new(pool.clone(), auth_config);

    // Identity provider boundary
    let identity_config = IdentityConfig {
        provider: config.identity_provider.clone(),
        base_url: config.supabase_url.clone(),
        anon_key: config.supabase_anon_key.clone(),
    };
    let identity: Arc<dyn IdentityService> =
        Arc::from(IdentityServiceFactory::create(identity_config)?);

    // Object storage boundary (streaming links document)
    let storage_config = StorageConfig {
        provider: config.storage_provider.clone(),
        bucket: config.storage_bucket.clone(),
        links_key: config.storage_links_key.clone(),
        region: config.aws_region.clone(),
        endpoint_url: config.aws_endpoint_url.clone(),
    };
    let store: Arc<dyn ObjectStore> = Arc::from(ObjectStoreFactory::create(&storage_config).await?);

    // Domain states
    let catalog_state = CatalogState {
        repos: CatalogRepositories::new(pool.clone()),
        links: LinkRepository::new(
            store,
            storage_config.bucket.clone(),
            storage_config.links_key.clone(),
        ),
        auth: auth.clone(),
    };
    let accounts_state = AccountsState {
        auth,
        identity,
        site_url: config.site_url.clone(),
    };

    // Build router - compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Cinelog API v0.1.0" }))
        .merge(cinelog_catalog::routes().with_state(catalog_state))
        .merge(cinelog_accounts::routes().with_state(accounts_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
