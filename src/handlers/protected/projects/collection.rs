use axum::{Extension, Json};

use crate::database::models::project::Project;
use crate::middleware::auth::AuthUser;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::ProjectService;

/// GET /api/projects - The caller's projects, most recently updated first.
/// No child detail: list views don't need it.
pub async fn list(Extension(auth): Extension<AuthUser>) -> ApiResult<Vec<Project>> {
    let service = ProjectService::connect().await?;
    let session = auth.session();
    let projects = service.list(Some(&session)).await?;

    Ok(ApiResponse::success(projects))
}

/// POST /api/projects - Create a project with its child collections in one
/// call. Returns the created parent row.
pub async fn create(
    Extension(auth): Extension<AuthUser>,
    Json(payload): Json<Project>,
) -> ApiResult<Project> {
    let service = ProjectService::connect().await?;
    let session = auth.session();
    let created = service.create(Some(&session), &payload).await?;

    Ok(ApiResponse::created(created))
}
