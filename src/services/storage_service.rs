use thiserror::Error;
use uuid::Uuid;

use crate::config;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload rejected: {0}")]
    Rejected(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Gateway to the external blob store. The only contract this side owns is
/// the key-naming scheme `{projectId}/{uuid}.{ext}` and returning a
/// dereferenceable public URL; storage mechanics belong to the remote end.
pub struct StorageService {
    client: reqwest::Client,
}

impl StorageService {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Build the object key for a file attached to a project: namespaced by
    /// project id, unique per upload, original extension preserved.
    pub fn object_key(project_id: Uuid, filename: &str) -> String {
        let ext = match filename.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext,
            _ => "bin",
        };
        format!("{}/{}.{}", project_id, Uuid::new_v4(), ext)
    }

    /// Publicly resolvable URL for a stored key.
    pub fn public_url(key: &str) -> String {
        let storage = &config::config().storage;
        format!(
            "{}/{}/{}",
            storage.public_base_url.trim_end_matches('/'),
            storage.bucket,
            key
        )
    }

    /// Store the bytes under a fresh key and return the public URL.
    pub async fn upload(
        &self,
        project_id: Uuid,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let storage = &config::config().storage;
        let key = Self::object_key(project_id, filename);
        let put_url = format!(
            "{}/{}/{}",
            storage.endpoint.trim_end_matches('/'),
            storage.bucket,
            key
        );

        let response = self
            .client
            .put(&put_url)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StorageError::Rejected(format!(
                "blob store returned {} for {}",
                response.status(),
                put_url
            )));
        }

        tracing::debug!("Uploaded {} bytes to {}", key, put_url);
        Ok(Self::public_url(&key))
    }
}

impl Default for StorageService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_key_is_namespaced_by_project() {
        let project_id = Uuid::new_v4();
        let key = StorageService::object_key(project_id, "photo.png");
        assert!(key.starts_with(&format!("{}/", project_id)));
        assert!(key.ends_with(".png"));
    }

    #[test]
    fn object_key_without_extension_falls_back_to_bin() {
        let key = StorageService::object_key(Uuid::new_v4(), "README");
        assert!(key.ends_with(".bin"));
    }

    #[test]
    fn object_keys_are_unique_per_upload() {
        let project_id = Uuid::new_v4();
        let a = StorageService::object_key(project_id, "a.jpg");
        let b = StorageService::object_key(project_id, "a.jpg");
        assert_ne!(a, b);
    }
}
