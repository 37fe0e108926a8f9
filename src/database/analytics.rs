use serde::Serialize;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::page_view::PageView;

#[derive(Debug, Error)]
pub enum AnalyticsStoreError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Dashboard aggregates over the page-view log. Plain counts only; anything
/// resembling real analytics computation lives elsewhere.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_views: i64,
    pub projects: Vec<ProjectViews>,
    pub devices: Vec<DeviceViews>,
    pub recent: Vec<PageView>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectViews {
    pub project_id: Uuid,
    pub title: String,
    pub views: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceViews {
    pub device: String,
    pub views: i64,
}

/// Append-only storage for page-view events.
pub struct AnalyticsStore {
    pool: PgPool,
}

impl AnalyticsStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect() -> Result<Self, AnalyticsStoreError> {
        Ok(Self::new(DatabaseManager::pool().await?))
    }

    pub async fn insert_page_view(
        &self,
        project_id: Option<Uuid>,
        page_path: &str,
        browser: &str,
        device: &str,
        referrer: Option<&str>,
    ) -> Result<(), AnalyticsStoreError> {
        sqlx::query(
            r#"
            INSERT INTO analytics (project_id, page_path, browser, device, referrer)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(project_id)
        .bind(page_path)
        .bind(browser)
        .bind(device)
        .bind(referrer)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn summary_for_user(&self, user_id: Uuid) -> Result<AnalyticsSummary, AnalyticsStoreError> {
        let total_views = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(a.id) FROM analytics a
            JOIN projects p ON a.project_id = p.id
            WHERE p.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        let projects = sqlx::query_as::<_, (Uuid, String, i64)>(
            r#"
            SELECT p.id, p.title, COUNT(a.id) AS views
            FROM projects p
            LEFT JOIN analytics a ON a.project_id = p.id
            WHERE p.user_id = $1
            GROUP BY p.id, p.title
            ORDER BY views DESC, p.title ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|(project_id, title, views)| ProjectViews { project_id, title, views })
        .collect();

        let devices = sqlx::query_as::<_, (Option<String>, i64)>(
            r#"
            SELECT a.device, COUNT(a.id) AS views
            FROM analytics a
            JOIN projects p ON a.project_id = p.id
            WHERE p.user_id = $1
            GROUP BY a.device
            ORDER BY views DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(|(device, views)| DeviceViews {
            device: device.unwrap_or_else(|| "Unknown".to_string()),
            views,
        })
        .collect();

        let recent = sqlx::query_as::<_, PageView>(
            r#"
            SELECT a.* FROM analytics a
            JOIN projects p ON a.project_id = p.id
            WHERE p.user_id = $1
            ORDER BY a.created_at DESC
            LIMIT 20
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(AnalyticsSummary { total_views, projects, devices, recent })
    }
}
