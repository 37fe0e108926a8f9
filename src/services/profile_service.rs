use thiserror::Error;
use uuid::Uuid;

use crate::database::models::profile::Profile;
use crate::database::profiles::{ProfileStore, ProfileStoreError};

#[derive(Debug, Error)]
pub enum ProfileServiceError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error(transparent)]
    Store(#[from] ProfileStoreError),
}

/// The slice of the identity collaborator this application consumes:
/// username ↔ user-id resolution plus profile display metadata.
pub struct ProfileService {
    store: ProfileStore,
}

impl ProfileService {
    pub fn new(store: ProfileStore) -> Self {
        Self { store }
    }

    pub async fn connect() -> Result<Self, ProfileServiceError> {
        Ok(Self::new(ProfileStore::connect().await?))
    }

    /// Username → user id. Unknown usernames yield `None`; callers surface
    /// that as a plain not-found and nothing more.
    pub async fn get_user_id_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Uuid>, ProfileServiceError> {
        Ok(self.store.find_user_id_by_username(username).await?)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<Profile>, ProfileServiceError> {
        Ok(self.store.find_by_username(username).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Profile, ProfileServiceError> {
        Ok(self.store.fetch(id).await?)
    }

    pub async fn register(
        &self,
        username: &str,
        display_name: Option<&str>,
    ) -> Result<Profile, ProfileServiceError> {
        Self::validate_username(username)?;
        Ok(self.store.create(username, display_name).await?)
    }

    pub async fn update(
        &self,
        id: Uuid,
        username: Option<&str>,
        display_name: Option<&str>,
    ) -> Result<Profile, ProfileServiceError> {
        if let Some(username) = username {
            Self::validate_username(username)?;
        }
        Ok(self.store.update(id, username, display_name).await?)
    }

    /// Usernames double as public URL path segments, so the charset is
    /// restricted to what routes tolerate.
    fn validate_username(username: &str) -> Result<(), ProfileServiceError> {
        if username.len() < 2 {
            return Err(ProfileServiceError::InvalidUsername(
                "username must be at least 2 characters".to_string(),
            ));
        }

        if username.len() > 40 {
            return Err(ProfileServiceError::InvalidUsername(
                "username must be at most 40 characters".to_string(),
            ));
        }

        if !username.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(ProfileServiceError::InvalidUsername(
                "username can only contain letters, numbers, hyphens, and underscores".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn username_validation_rules() {
        assert!(ProfileService::validate_username("alice").is_ok());
        assert!(ProfileService::validate_username("al-ice_99").is_ok());
        assert!(ProfileService::validate_username("a").is_err());
        assert!(ProfileService::validate_username("has space").is_err());
        assert!(ProfileService::validate_username("dot.name").is_err());
        assert!(ProfileService::validate_username(&"x".repeat(41)).is_err());
    }
}
