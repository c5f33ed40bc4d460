//! Streaming-link repository
//!
//! Links live in a single JSON document in object storage, keyed by movie
//! identifier. Lookup is a soft read: an absent document, a failed
//! download, an unparsable payload, or an absent movie id all resolve to
//! an empty sequence, never an error.

use std::sync::Arc;

use cinelog_storage::{LinksDocument, ObjectStore, StorageError, StreamLink};

#[derive(Clone)]
pub struct LinkRepository {
    store: Arc<dyn ObjectStore>,
    bucket: String,
    key: String,
}

impl LinkRepository {
    pub fn new(store: Arc<dyn ObjectStore>, bucket: String, key: String) -> Self {
        Self { store, bucket, key }
    }

    /// Streaming links for a movie, empty when there are none.
    pub async fn list_links(&self, movie_id: i32) -> Vec<StreamLink> {
        let bytes = match self.store.download(&self.bucket, &self.key).await {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound) => {
                tracing::debug!(bucket = %self.bucket, key = %self.key, "Links document absent");
                return Vec::new();
            }
            Err(e) => {
                tracing::error!(error = %e, bucket = %self.bucket, "Failed to download links document");
                return Vec::new();
            }
        };

        match LinksDocument::parse(&bytes) {
            Ok(document) => document.links_for(movie_id),
            Err(e) => {
                tracing::error!(error = %e, bucket = %self.bucket, "Links document is not valid JSON");
                Vec::new()
            }
        }
    }
}
