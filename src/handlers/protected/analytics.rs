use axum::Extension;

use crate::database::analytics::AnalyticsSummary;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::AnalyticsService;

/// GET /api/analytics/summary - View counts feeding the dashboard's
/// analytics screen. Plain aggregates, nothing more.
pub async fn summary(Extension(auth): Extension<AuthUser>) -> ApiResult<AnalyticsSummary> {
    let analytics = AnalyticsService::connect().await?;
    let summary = analytics.summary_for_user(auth.user_id).await?;

    Ok(ApiResponse::success(summary))
}
