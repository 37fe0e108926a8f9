use axum::{extract::Path, Extension, Json};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::database::models::project::{Project, ProjectUpdate};
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::ProjectService;

/// GET /api/projects/:id - Full aggregate for the editor: parent fields plus
/// timeline and media in display order and the tool list.
pub async fn record_get(Path(id): Path<Uuid>) -> ApiResult<Project> {
    let service = ProjectService::connect().await?;
    let project = service.get(id).await?;

    Ok(ApiResponse::success(project))
}

/// PUT /api/projects/:id - Update the parent's mutable fields and replace
/// every child collection present in the payload (even when empty).
pub async fn record_put(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProjectUpdate>,
) -> ApiResult<Value> {
    let service = ProjectService::connect().await?;
    let session = auth.session();
    service.update(Some(&session), id, &payload).await?;

    Ok(ApiResponse::success(json!({ "id": id })))
}

/// DELETE /api/projects/:id - Delete the project; child rows go with it via
/// the storage cascade. Succeeds even if the row was already gone.
pub async fn record_delete(
    Extension(auth): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> ApiResult<Value> {
    let service = ProjectService::connect().await?;
    let session = auth.session();
    service.delete(Some(&session), id).await?;

    Ok(ApiResponse::success(json!({ "deleted": true })))
}
