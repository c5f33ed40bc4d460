//! Environment-backed configuration
//!
//! Everything the server needs is read from process environment variables
//! (12-factor style); nothing in scope persists or mutates them.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (Supabase PostgreSQL)
    pub database_url: String,

    /// Identity provider (Supabase project)
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub supabase_jwt_secret: String,

    /// Public site URL used in password-reset redirect links
    pub site_url: String,

    /// Identity provider backend selector (gotrue, mock)
    pub identity_provider: String,

    /// Object storage (streaming links document)
    pub storage_provider: String,
    pub storage_bucket: String,
    pub storage_links_key: String,
    pub aws_region: String,
    pub aws_endpoint_url: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            supabase_url: env::var("SUPABASE_URL")
                .map_err(|_| anyhow::anyhow!("SUPABASE_URL is required"))?,
            supabase_anon_key: env::var("SUPABASE_ANON_KEY")
                .map_err(|_| anyhow::anyhow!("SUPABASE_ANON_KEY is required"))?,
            supabase_jwt_secret: env::var("SUPABASE_JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("SUPABASE_JWT_SECRET is required"))?,

            site_url: env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),

            identity_provider: env::var("IDENTITY_PROVIDER")
                .unwrap_or_else(|_| "gotrue".to_string()),

            storage_provider: env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "s3".to_string()),
            storage_bucket: env::var("STORAGE_BUCKET")
                .map_err(|_| anyhow::anyhow!("STORAGE_BUCKET is required"))?,
            storage_links_key: env::var("STORAGE_LINKS_KEY")
                .unwrap_or_else(|_| "links.json".to_string()),
            aws_region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            aws_endpoint_url: env::var("AWS_ENDPOINT_URL").ok(),

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "cinelog=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        Ok(config)
    }
}
