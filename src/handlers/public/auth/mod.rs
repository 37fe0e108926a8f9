use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{generate_jwt, Claims};
use crate::config;
use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::ProfileService;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
}

/// POST /auth/register - Create a profile and mint a session token.
///
/// Account credentials themselves live with the external identity provider;
/// this side only records the username ↔ user-id mapping it needs.
pub async fn register(Json(payload): Json<RegisterRequest>) -> ApiResult<Value> {
    let profiles = ProfileService::connect().await?;
    let profile = profiles
        .register(&payload.username, payload.display_name.as_deref())
        .await?;

    let token = generate_jwt(Claims::new(profile.id, profile.username.clone()))?;

    tracing::info!("Registered profile '{}'", profile.username);
    Ok(ApiResponse::created(json!({
        "token": token,
        "profile": profile,
    })))
}

/// POST /auth/login - Exchange an externally-verified identity for a session
/// token. Unknown usernames fail closed with a generic message.
pub async fn login(Json(payload): Json<LoginRequest>) -> ApiResult<Value> {
    let profiles = ProfileService::connect().await?;
    let profile = profiles
        .get_by_username(&payload.username)
        .await?
        .ok_or_else(|| ApiError::unauthorized("Invalid credentials"))?;

    let token = generate_jwt(Claims::new(profile.id, profile.username.clone()))?;
    let expires_in = config::config().security.jwt_expiry_hours * 3600;

    Ok(ApiResponse::success(json!({
        "token": token,
        "profile": profile,
        "expires_in": expires_in,
    })))
}
