use axum::extract::Path;

use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::{PublicProfile, VisitorService};

/// GET /:username - Visitor profile page: the profile plus that user's
/// public projects only. Unknown usernames yield a plain not-found.
pub async fn get(Path(username): Path<String>) -> ApiResult<PublicProfile> {
    let visitors = VisitorService::connect().await?;
    let public_profile = visitors.resolve(&username).await?;

    Ok(ApiResponse::success(public_profile))
}
