//! In-memory file store.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::FileStore;

/// An uploaded object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[derive(Debug, Clone)]
pub struct InMemoryFileStore {
    objects: Arc<RwLock<HashMap<String, StoredObject>>>,
    public_base_url: String,
    fail_uploads: bool,
}

impl InMemoryFileStore {
    pub fn new(public_base_url: impl Into<String>) -> Self {
        Self {
            objects: Arc::new(RwLock::new(HashMap::new())),
            public_base_url: public_base_url.into(),
            fail_uploads: false,
        }
    }

    /// A store whose uploads always fail.
    pub fn failing(public_base_url: impl Into<String>) -> Self {
        Self {
            fail_uploads: true,
            ..Self::new(public_base_url)
        }
    }

    pub async fn get(&self, path: &str) -> Option<StoredObject> {
        self.objects.read().await.get(path).cloned()
    }

    pub async fn object_count(&self) -> usize {
        self.objects.read().await.len()
    }
}

impl Default for InMemoryFileStore {
    fn default() -> Self {
        Self::new("memory://avatars")
    }
}

#[async_trait]
impl FileStore for InMemoryFileStore {
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), DomainError> {
        if self.fail_uploads {
            return Err(DomainError::new(ErrorCode::StorageError, "Upload rejected")
                .with_detail("path", path));
        }
        self.objects.write().await.insert(
            path.to_string(),
            StoredObject {
                bytes,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    fn public_url(&self, path: &str) -> String {
        format!("{}/{}", self.public_base_url.trim_end_matches('/'), path)
    }
}
