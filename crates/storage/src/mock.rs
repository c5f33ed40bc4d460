//! Mock object store implementation
//!
//! In-memory bucket/key map for testing without object storage.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::{ObjectStore, StorageError};

/// Mock object store for testing
#[derive(Debug, Clone, Default)]
pub struct MockObjectStore {
    objects: Arc<Mutex<HashMap<(String, String), Vec<u8>>>>,
    fail_with: Arc<Mutex<Option<String>>>,
}

impl MockObjectStore {
    /// Create a new mock object store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an object under a bucket and key
    pub fn put(&self, bucket: &str, key: &str, bytes: impl Into<Vec<u8>>) {
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), bytes.into());
    }

    /// Make every subsequent download fail with the given message
    pub fn fail_with(&self, message: &str) {
        *self.fail_with.lock().unwrap() = Some(message.to_string());
    }
}

#[async_trait::async_trait]
impl ObjectStore for MockObjectStore {
    async fn download(&self, bucket: &str, key: &str) -> Result<Vec<u8>, StorageError> {
        if let Some(message) = self.fail_with.lock().unwrap().clone() {
            return Err(StorageError::Request(message));
        }

        self.objects
            .lock()
            .unwrap()
            .get(&(bucket.to_string(), key.to_string()))
            .cloned()
            .ok_or(StorageError::NotFound)
    }
}
