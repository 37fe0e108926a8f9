use axum::{
    extract::{Path, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use std::collections::HashMap;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Guard for username-scoped dashboard routes. An authenticated user whose
/// own username does not match the `:username` path segment is redirected to
/// their canonical dashboard path. Must be layered after JWT authentication.
pub async fn validate_owner_middleware(
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Response {
    let auth = match request.extensions().get::<AuthUser>() {
        Some(auth) => auth.clone(),
        None => {
            return ApiError::unauthorized("Authentication required before owner validation")
                .into_response()
        }
    };

    match params.get("username") {
        Some(username) if *username == auth.username => next.run(request).await,
        other => {
            tracing::debug!(
                "Dashboard path owner mismatch: {:?} requested by '{}'",
                other,
                auth.username
            );
            Redirect::temporary(&format!("/{}/dashboard/projects", auth.username)).into_response()
        }
    }
}
