use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Storage row for an ordered timeline entry. `display_order` is assigned at
/// write time from the position in the submitted array.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TimelineItemRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub date: String,
    pub title: String,
    pub description: Option<String>,
    pub display_order: i32,
}

/// Wire/editor representation. `date` is a free-form label ("Jan 2025",
/// "Research Phase"), never parsed as a calendar date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_order: Option<i32>,
}

impl From<TimelineItemRow> for TimelineItem {
    fn from(row: TimelineItemRow) -> Self {
        Self {
            id: Some(row.id),
            date: row.date,
            title: row.title,
            description: row.description,
            display_order: Some(row.display_order),
        }
    }
}
