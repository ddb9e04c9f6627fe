//! In-memory blob store used by the integration tests.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::infrastructure::object_store::ObjectStore;

/// [`ObjectStore`] keeping blobs in a map.
#[derive(Default)]
pub struct InMemoryObjectStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl InMemoryObjectStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
    async fn put(&self, id: &str, bytes: &[u8]) -> Result<(), AppError> {
        let mut blobs = self.blobs.lock().await;
        blobs.insert(id.to_string(), bytes.to_vec());
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<Vec<u8>>, AppError> {
        let blobs = self.blobs.lock().await;
        Ok(blobs.get(id).cloned())
    }
}
