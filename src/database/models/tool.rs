use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Storage row for a tool entry. Tools carry no display order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ToolItemRow {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}

impl From<ToolItemRow> for ToolItem {
    fn from(row: ToolItemRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.name,
            icon: row.icon,
        }
    }
}
