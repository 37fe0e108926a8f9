use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single recorded page view. `project_id` is null for non-project pages
/// (home, profile listings).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub id: Uuid,
    pub project_id: Option<Uuid>,
    pub page_path: String,
    pub browser: Option<String>,
    pub device: Option<String>,
    pub referrer: Option<String>,
    pub created_at: DateTime<Utc>,
}
