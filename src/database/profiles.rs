use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::profile::Profile;

#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Storage access for the username ↔ user-id mapping.
pub struct ProfileStore {
    pool: PgPool,
}

impl ProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect() -> Result<Self, ProfileStoreError> {
        Ok(Self::new(DatabaseManager::pool().await?))
    }

    /// Username → user id. Returns `None` for unknown usernames; callers
    /// surface that as a plain not-found with no further detail.
    pub async fn find_user_id_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Uuid>, ProfileStoreError> {
        let id = sqlx::query_scalar::<_, Uuid>("SELECT id FROM profiles WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(id)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<Profile>, ProfileStoreError> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(profile)
    }

    pub async fn fetch(&self, id: Uuid) -> Result<Profile, ProfileStoreError> {
        sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ProfileStoreError::NotFound(format!("profile {} not found", id)))
    }

    pub async fn create(
        &self,
        username: &str,
        display_name: Option<&str>,
    ) -> Result<Profile, ProfileStoreError> {
        let result = sqlx::query_as::<_, Profile>(
            "INSERT INTO profiles (username, display_name) VALUES ($1, $2) RETURNING *",
        )
        .bind(username)
        .bind(display_name)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(profile) => Ok(profile),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(ProfileStoreError::UsernameTaken(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Update username and/or display name; absent fields keep their value.
    pub async fn update(
        &self,
        id: Uuid,
        username: Option<&str>,
        display_name: Option<&str>,
    ) -> Result<Profile, ProfileStoreError> {
        let result = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles SET
                username = COALESCE($1, username),
                display_name = COALESCE($2, display_name),
                updated_at = now()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(display_name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await;

        match result {
            Ok(Some(profile)) => Ok(profile),
            Ok(None) => Err(ProfileStoreError::NotFound(format!("profile {} not found", id))),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Err(ProfileStoreError::UsernameTaken(username.unwrap_or_default().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}
