use axum::{
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::middleware::response::ApiResponse;
use crate::services::AnalyticsService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackRequest {
    #[serde(default)]
    pub project_id: Option<Uuid>,
    pub page_path: String,
    #[serde(default)]
    pub referrer: Option<String>,
}

/// POST /track - Record a page view. Always answers 202: tracking failures
/// are logged server-side and must never surface to the visitor.
pub async fn track(headers: HeaderMap, Json(payload): Json<TrackRequest>) -> ApiResponse<Value> {
    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    tokio::spawn(async move {
        match AnalyticsService::connect().await {
            Ok(analytics) => {
                analytics
                    .track_page_view(
                        payload.project_id,
                        &payload.page_path,
                        user_agent.as_deref(),
                        payload.referrer.as_deref(),
                    )
                    .await
            }
            Err(e) => tracing::warn!("Analytics unavailable: {}", e),
        }
    });

    ApiResponse::with_status(json!({ "accepted": true }), StatusCode::ACCEPTED)
}
