use serde::Serialize;
use thiserror::Error;

use crate::database::models::profile::Profile;
use crate::database::models::project::Project;
use crate::database::profiles::{ProfileStore, ProfileStoreError};
use crate::database::projects::{ProjectStore, ProjectStoreError};

#[derive(Debug, Error)]
pub enum VisitorError {
    /// Unknown usernames fail closed: no distinction between "never existed"
    /// and anything else leaks out.
    #[error("no such user")]
    UnknownUser,

    #[error(transparent)]
    Profiles(#[from] ProfileStoreError),

    #[error(transparent)]
    Projects(#[from] ProjectStoreError),
}

/// The visitor-facing payload for `/:username`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicProfile {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

/// Resolves a public username path segment to that user's published work.
/// Both steps are read-only and require no authentication.
pub struct VisitorService {
    profiles: ProfileStore,
    projects: ProjectStore,
}

impl VisitorService {
    pub fn new(profiles: ProfileStore, projects: ProjectStore) -> Self {
        Self { profiles, projects }
    }

    pub async fn connect() -> Result<Self, VisitorError> {
        Ok(Self::new(ProfileStore::connect().await?, ProjectStore::connect().await?))
    }

    /// Two-step lookup: username → user id, then user id → projects with
    /// `is_public = true` only. A project with `isPublic = false` never
    /// appears here regardless of its status.
    pub async fn resolve(&self, username: &str) -> Result<PublicProfile, VisitorError> {
        let profile = self
            .profiles
            .find_by_username(username)
            .await?
            .ok_or(VisitorError::UnknownUser)?;

        let projects = self.projects.list_public_for_user(profile.id).await?;

        Ok(PublicProfile { profile, projects })
    }
}
