use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::config;
use crate::database::models::project::{Project, ProjectUpdate};
use crate::database::projects::{ProjectStore, ProjectStoreError};
use crate::editor::session::{PersistenceError, ProjectPersistence};
use crate::services::cache::ProjectCache;
use crate::services::session::Session;

#[derive(Debug, Error)]
pub enum ProjectServiceError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error(transparent)]
    Store(#[from] ProjectStoreError),
}

/// Application-level project operations: enforces the authenticated-caller
/// requirement on mutations and keeps the process-wide read cache coherent.
pub struct ProjectService {
    store: ProjectStore,
    cache: &'static ProjectCache,
}

impl ProjectService {
    pub fn new(store: ProjectStore) -> Self {
        Self {
            store,
            cache: ProjectCache::global(),
        }
    }

    pub async fn connect() -> Result<Self, ProjectServiceError> {
        Ok(Self::new(ProjectStore::connect().await?))
    }

    fn cache_enabled() -> bool {
        config::config().cache.enable_read_cache
    }

    /// Create a project owned by the session user. Fails with
    /// `Unauthenticated` when there is no session.
    pub async fn create(
        &self,
        session: Option<&Session>,
        data: &Project,
    ) -> Result<Project, ProjectServiceError> {
        let session = session.ok_or(ProjectServiceError::Unauthenticated)?;
        let created = self.store.create(session.user_id, data).await?;
        self.cache.invalidate_user(session.user_id).await;
        Ok(created)
    }

    pub async fn update(
        &self,
        session: Option<&Session>,
        id: Uuid,
        data: &ProjectUpdate,
    ) -> Result<(), ProjectServiceError> {
        let session = session.ok_or(ProjectServiceError::Unauthenticated)?;
        self.store.update(id, data).await?;
        self.cache.invalidate_project(id, Some(session.user_id)).await;
        Ok(())
    }

    pub async fn delete(&self, session: Option<&Session>, id: Uuid) -> Result<(), ProjectServiceError> {
        let session = session.ok_or(ProjectServiceError::Unauthenticated)?;
        self.store.delete(id).await?;
        self.cache.invalidate_project(id, Some(session.user_id)).await;
        Ok(())
    }

    pub async fn get(&self, id: Uuid) -> Result<Project, ProjectServiceError> {
        if Self::cache_enabled() {
            if let Some(hit) = self.cache.get_detail(id).await {
                return Ok(hit);
            }
        }

        let project = self.store.fetch(id).await?;

        if Self::cache_enabled() {
            self.cache.put_detail(&project).await;
        }
        Ok(project)
    }

    pub async fn list(&self, session: Option<&Session>) -> Result<Vec<Project>, ProjectServiceError> {
        let session = session.ok_or(ProjectServiceError::Unauthenticated)?;

        if Self::cache_enabled() {
            if let Some(hit) = self.cache.get_list(session.user_id).await {
                return Ok(hit);
            }
        }

        let projects = self.store.list_for_user(session.user_id).await?;

        if Self::cache_enabled() {
            self.cache.put_list(session.user_id, &projects).await;
        }
        Ok(projects)
    }

    /// Visitor-facing read: public rows only, never cached (the visitor view
    /// must reflect owner edits immediately).
    pub async fn list_public_for_user(&self, user_id: Uuid) -> Result<Vec<Project>, ProjectServiceError> {
        Ok(self.store.list_public_for_user(user_id).await?)
    }
}

impl From<ProjectServiceError> for PersistenceError {
    fn from(err: ProjectServiceError) -> Self {
        match err {
            ProjectServiceError::Unauthenticated => PersistenceError::Unauthenticated,
            ProjectServiceError::Store(ProjectStoreError::Validation(msg)) => {
                PersistenceError::Validation(msg)
            }
            ProjectServiceError::Store(ProjectStoreError::NotFound(msg)) => {
                PersistenceError::NotFound(msg)
            }
            ProjectServiceError::Store(other) => PersistenceError::Storage(other.to_string()),
        }
    }
}

/// The editor's persistence seam, bound to one session. The editor itself
/// stays agnostic of authentication; this adapter carries the context.
pub struct SessionScopedProjects {
    service: ProjectService,
    session: Option<Session>,
}

impl SessionScopedProjects {
    pub fn new(service: ProjectService, session: Option<Session>) -> Self {
        Self { service, session }
    }
}

#[async_trait]
impl ProjectPersistence for SessionScopedProjects {
    async fn create(&self, data: &Project) -> Result<Project, PersistenceError> {
        self.service
            .create(self.session.as_ref(), data)
            .await
            .map_err(PersistenceError::from)
    }

    async fn update(&self, id: Uuid, data: &ProjectUpdate) -> Result<(), PersistenceError> {
        self.service
            .update(self.session.as_ref(), id, data)
            .await
            .map_err(PersistenceError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_onto_the_editor_taxonomy() {
        assert!(matches!(
            PersistenceError::from(ProjectServiceError::Unauthenticated),
            PersistenceError::Unauthenticated
        ));

        let validation = ProjectServiceError::Store(ProjectStoreError::Validation(
            "project title is required".to_string(),
        ));
        assert!(matches!(PersistenceError::from(validation), PersistenceError::Validation(_)));

        let missing =
            ProjectServiceError::Store(ProjectStoreError::NotFound("project x not found".to_string()));
        assert!(matches!(PersistenceError::from(missing), PersistenceError::NotFound(_)));
    }
}
