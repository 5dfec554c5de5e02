//! File store port for avatar images.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;

#[async_trait]
pub trait FileStore: Send + Sync {
    /// Uploads `bytes` to `path`, replacing any existing object.
    ///
    /// # Errors
    ///
    /// - `StorageError` if the upload fails
    async fn upload(&self, path: &str, bytes: Vec<u8>, content_type: &str) -> Result<(), DomainError>;

    /// Public URL for an uploaded object. Does not check the object exists.
    fn public_url(&self, path: &str) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn FileStore) {}
    }
}
