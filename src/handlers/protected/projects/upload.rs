use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{header, HeaderMap},
};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::services::StorageService;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    /// Original filename; only its extension survives into the stored key.
    pub filename: String,
}

/// POST /api/projects/:id/files - Store a binary blob under a key namespaced
/// by the project id and answer with the public URL.
pub async fn upload(
    Path(id): Path<Uuid>,
    Query(query): Query<UploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Value> {
    if body.is_empty() {
        return Err(ApiError::bad_request("File body is empty"));
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let storage = StorageService::new();
    let url = storage.upload(id, &query.filename, body.to_vec(), &content_type).await?;

    Ok(ApiResponse::created(json!({ "url": url })))
}
