//! Cinelog object storage boundary
//!
//! Streaming links live outside the relational store, in a single JSON
//! document held in an S3-compatible bucket. This crate wraps "download
//! object by bucket and key" behind a trait with an S3 implementation and
//! an in-memory mock, plus the links document model.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod mock;
pub mod s3;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    #[error("Object not found")]
    NotFound,

    #[error("Storage request failed: {0}")]
    Request(String),
}

/// Object storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Storage backend (s3, mock)
    pub provider: String,
    /// Bucket holding the links document
    pub bucket: String,
    /// Object key of the links document
    pub links_key: String,
    /// AWS region
    pub region: String,
    /// Endpoint override for S3-compatible providers
    pub endpoint_url: Option<String>,
}

/// Object store trait for different implementations
#[async_trait::async_trait]
pub trait ObjectStore: Send + Sync {
    /// Download an object's raw bytes by bucket and key.
    async fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError>;
}

/// One streaming link record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamLink {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// The streaming-links document: a top-level `items` mapping from movie
/// identifier (stringified) to a sequence of link records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinksDocument {
    #[serde(default)]
    pub items: HashMap<String, Vec<StreamLink>>,
}

impl LinksDocument {
    /// Parse a raw JSON payload into a links document.
    pub fn parse(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Links for a movie identifier, empty when the id is absent from `items`.
    pub fn links_for(&self, movie_id: i32) -> Vec<StreamLink> {
        self.items
            .get(&movie_id.to_string())
            .cloned()
            .unwrap_or_default()
    }
}

/// Object store factory
pub struct ObjectStoreFactory;

impl ObjectStoreFactory {
    /// Create object store based on configuration
    pub async fn create(config: &StorageConfig) -> Result<Box<dyn ObjectStore>, StorageError> {
        match config.provider.as_str() {
            "s3" => {
                tracing::info!("Creating S3 object store");
                Ok(Box::new(s3::S3ObjectStore::new(config).await))
            }
            "mock" => {
                tracing::info!("Creating mock object store");
                Ok(Box::new(mock::MockObjectStore::new()))
            }
            provider => Err(StorageError::Configuration(format!(
                "Unknown storage provider: {}. Supported providers: s3, mock",
                provider
            ))),
        }
    }
}
