use sqlx::{PgPool, Postgres, Transaction};
use thiserror::Error;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::media::{MediaItem, MediaItemRow};
use crate::database::models::project::{create_slug, Project, ProjectRow, ProjectUpdate};
use crate::database::models::timeline::{TimelineItem, TimelineItemRow};
use crate::database::models::tool::{ToolItem, ToolItemRow};

#[derive(Debug, Error)]
pub enum ProjectStoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence gateway for the project aggregate: one parent row plus three
/// exclusively-owned child collections. Children are always written as a
/// complete set (delete-all-then-reinsert); there is no child-level patching.
pub struct ProjectStore {
    pool: PgPool,
}

impl ProjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect() -> Result<Self, ProjectStoreError> {
        Ok(Self::new(DatabaseManager::pool().await?))
    }

    /// Insert the parent row, then every non-empty child collection with
    /// `display_order` = position in the submitted array. The whole sequence
    /// runs in one transaction so a failed child insert cannot leave an
    /// orphaned parent behind. Returns the created parent row (children are
    /// fetched lazily by `fetch`).
    pub async fn create(&self, user_id: Uuid, data: &Project) -> Result<Project, ProjectStoreError> {
        if data.title.trim().is_empty() {
            return Err(ProjectStoreError::Validation("project title is required".to_string()));
        }

        // Slug is derived from the title at creation time only, unless the
        // caller supplied one explicitly.
        let slug = data
            .slug
            .clone()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| create_slug(&data.title));

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects
                (title, description, cover_image, category, overview, challenge,
                 process, outcome, status, theme, is_public, slug, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.cover_image)
        .bind(&data.category)
        .bind(&data.overview)
        .bind(&data.challenge)
        .bind(&data.process)
        .bind(&data.outcome)
        .bind(data.status.as_str())
        .bind(data.theme.name())
        .bind(data.is_public)
        .bind(&slug)
        .bind(user_id)
        .fetch_one(&mut *tx)
        .await?;

        insert_timeline(&mut tx, row.id, &data.timeline).await?;
        insert_media(&mut tx, row.id, &data.media).await?;
        insert_tools(&mut tx, row.id, &data.tools).await?;

        tx.commit().await?;

        tracing::info!("Created project {} for user {}", row.id, user_id);
        Ok(row.into_summary())
    }

    /// Update the parent row's mutable fields and replace every child
    /// collection present in `data`, even an empty one (full-replace
    /// contract, not a diff/merge). Absent collections are left untouched.
    /// `updated_at` always moves; `slug` only when explicitly supplied.
    pub async fn update(&self, id: Uuid, data: &ProjectUpdate) -> Result<(), ProjectStoreError> {
        if data.title.trim().is_empty() {
            return Err(ProjectStoreError::Validation("project title is required".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE projects SET
                title = $1, description = $2, cover_image = $3, category = $4,
                overview = $5, challenge = $6, process = $7, outcome = $8,
                status = $9, theme = $10, is_public = $11,
                slug = COALESCE($12, slug),
                updated_at = now()
            WHERE id = $13
            "#,
        )
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.cover_image)
        .bind(&data.category)
        .bind(&data.overview)
        .bind(&data.challenge)
        .bind(&data.process)
        .bind(&data.outcome)
        .bind(data.status.as_str())
        .bind(data.theme.name())
        .bind(data.is_public)
        .bind(&data.slug)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ProjectStoreError::NotFound(format!("project {} not found", id)));
        }

        if let Some(timeline) = &data.timeline {
            sqlx::query("DELETE FROM project_timeline WHERE project_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_timeline(&mut tx, id, timeline).await?;
        }

        if let Some(media) = &data.media {
            sqlx::query("DELETE FROM project_media WHERE project_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_media(&mut tx, id, media).await?;
        }

        if let Some(tools) = &data.tools {
            sqlx::query("DELETE FROM project_tools WHERE project_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            insert_tools(&mut tx, id, tools).await?;
        }

        tx.commit().await?;

        tracing::debug!("Updated project {}", id);
        Ok(())
    }

    /// Read the parent row and all three child collections, timeline and
    /// media ordered by `display_order` ascending.
    pub async fn fetch(&self, id: Uuid) -> Result<Project, ProjectStoreError> {
        let row = sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| ProjectStoreError::NotFound(format!("project {} not found", id)))?;

        let (timeline, media, tools) = futures::try_join!(
            sqlx::query_as::<_, TimelineItemRow>(
                "SELECT * FROM project_timeline WHERE project_id = $1 ORDER BY display_order ASC",
            )
            .bind(id)
            .fetch_all(&self.pool),
            sqlx::query_as::<_, MediaItemRow>(
                "SELECT * FROM project_media WHERE project_id = $1 ORDER BY display_order ASC",
            )
            .bind(id)
            .fetch_all(&self.pool),
            sqlx::query_as::<_, ToolItemRow>("SELECT * FROM project_tools WHERE project_id = $1")
                .bind(id)
                .fetch_all(&self.pool),
        )?;

        Ok(row.into_project(
            timeline.into_iter().map(TimelineItem::from).collect(),
            media.into_iter().map(MediaItem::from).collect(),
            tools.into_iter().map(ToolItem::from).collect(),
        ))
    }

    /// All of one user's projects, most recently updated first, without
    /// child detail (list views don't need it).
    pub async fn list_for_user(&self, user_id: Uuid) -> Result<Vec<Project>, ProjectStoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT * FROM projects WHERE user_id = $1 ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProjectRow::into_summary).collect())
    }

    /// Visitor-facing list: only rows with `is_public = true`, regardless of
    /// status. Children are initialized empty and fetched on demand.
    pub async fn list_public_for_user(&self, user_id: Uuid) -> Result<Vec<Project>, ProjectStoreError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT * FROM projects WHERE user_id = $1 AND is_public = true ORDER BY updated_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ProjectRow::into_summary).collect())
    }

    /// Delete the parent row; the storage cascade removes child rows.
    /// Succeeds even when the row did not exist (no distinct signal).
    pub async fn delete(&self, id: Uuid) -> Result<(), ProjectStoreError> {
        sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!("Deleted project {}", id);
        Ok(())
    }
}

async fn insert_timeline(
    tx: &mut Transaction<'_, Postgres>,
    project_id: Uuid,
    items: &[TimelineItem],
) -> Result<(), sqlx::Error> {
    for (index, item) in items.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO project_timeline (project_id, date, title, description, display_order)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(project_id)
        .bind(&item.date)
        .bind(&item.title)
        .bind(&item.description)
        .bind(index as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_media(
    tx: &mut Transaction<'_, Postgres>,
    project_id: Uuid,
    items: &[MediaItem],
) -> Result<(), sqlx::Error> {
    for (index, item) in items.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO project_media (project_id, type, url, caption, display_order)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(project_id)
        .bind(item.media_type.as_str())
        .bind(&item.url)
        .bind(&item.caption)
        .bind(index as i32)
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn insert_tools(
    tx: &mut Transaction<'_, Postgres>,
    project_id: Uuid,
    items: &[ToolItem],
) -> Result<(), sqlx::Error> {
    for item in items {
        sqlx::query("INSERT INTO project_tools (project_id, name, icon) VALUES ($1, $2, $3)")
            .bind(project_id)
            .bind(&item.name)
            .bind(&item.icon)
            .execute(&mut **tx)
            .await?;
    }
    Ok(())
}
