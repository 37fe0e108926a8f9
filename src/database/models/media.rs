use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::types::MediaType;

/// Storage row for an ordered gallery entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MediaItemRow {
    pub id: Uuid,
    pub project_id: Uuid,
    #[sqlx(rename = "type")]
    pub media_type: String,
    pub url: String,
    pub caption: Option<String>,
    pub display_order: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(rename = "type", default)]
    pub media_type: MediaType,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

impl From<MediaItemRow> for MediaItem {
    fn from(row: MediaItemRow) -> Self {
        Self {
            id: Some(row.id),
            media_type: MediaType::from_storage(&row.media_type),
            url: row.url,
            caption: row.caption,
            display_order: Some(row.display_order),
        }
    }
}
