use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::project::Project;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::{AnalyticsService, ProjectService};
use crate::themes::{self, Presentation, Theme};

#[derive(Debug, Deserialize)]
pub struct DetailQuery {
    /// Optional theme override, used by the editor's theme preview.
    pub theme: Option<String>,
}

/// GET /projects/:id - Case-study detail rendered through its theme.
/// Page-view tracking is spawned fire-and-forget so rendering never waits
/// on (or fails because of) the analytics write.
pub async fn detail(
    Path(id): Path<Uuid>,
    Query(query): Query<DetailQuery>,
    headers: HeaderMap,
) -> ApiResult<Value> {
    let projects = ProjectService::connect().await?;
    let project = projects.get(id).await?;

    let page_path = format!("/projects/{}", id);
    let user_agent = header_value(&headers, header::USER_AGENT);
    let referrer = header_value(&headers, header::REFERER);
    tokio::spawn(async move {
        match AnalyticsService::connect().await {
            Ok(analytics) => {
                analytics
                    .track_page_view(Some(id), &page_path, user_agent.as_deref(), referrer.as_deref())
                    .await
            }
            Err(e) => tracing::warn!("Analytics unavailable: {}", e),
        }
    });

    let theme = match query.theme.as_deref() {
        Some(name) => Theme::from_name(Some(name)),
        None => project.theme,
    };
    let presentation = themes::render(&project, theme);

    Ok(ApiResponse::success(json!({
        "project": project,
        "presentation": presentation,
    })))
}

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub project: Project,
    #[serde(default)]
    pub theme: Option<String>,
}

/// POST /projects/preview - Render an unsaved draft (editor preview mode).
/// Pure: nothing is persisted and nothing is fetched.
pub async fn preview(Json(payload): Json<PreviewRequest>) -> ApiResult<Presentation> {
    let theme = match payload.theme.as_deref() {
        Some(name) => Theme::from_name(Some(name)),
        None => payload.project.theme,
    };

    Ok(ApiResponse::success(themes::render(&payload.project, theme)))
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}
