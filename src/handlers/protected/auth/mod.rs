use axum::{Extension, Json};
use serde::Deserialize;

use crate::database::models::profile::Profile;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::ProfileService;

/// GET /api/auth/whoami - The caller's own profile.
pub async fn whoami(Extension(auth): Extension<AuthUser>) -> ApiResult<Profile> {
    let profiles = ProfileService::connect().await?;
    let profile = profiles.get(auth.user_id).await?;

    Ok(ApiResponse::success(profile))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

/// PUT /api/auth/profile - Update username and/or display name. Absent
/// fields keep their current values.
pub async fn update_profile(
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<ProfileUpdateRequest>,
) -> ApiResult<Profile> {
    let profiles = ProfileService::connect().await?;
    let profile = profiles
        .update(auth.user_id, payload.username.as_deref(), payload.display_name.as_deref())
        .await?;

    Ok(ApiResponse::success(profile))
}
