// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};
use std::collections::HashMap;

/// HTTP API error with appropriate status codes and client-friendly messages
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    ValidationError {
        message: String,
        field_errors: Option<HashMap<String, String>>,
    },

    // 401 Unauthorized
    Unauthorized(String),

    // 403 Forbidden
    Forbidden(String),

    // 404 Not Found
    NotFound(String),

    // 409 Conflict
    Conflict(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 502 Bad Gateway (external service issues)
    BadGateway(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::ValidationError { .. } => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Forbidden(_) => 403,
            ApiError::NotFound(_) => 404,
            ApiError::Conflict(_) => 409,
            ApiError::InternalServerError(_) => 500,
            ApiError::BadGateway(_) => 502,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::ValidationError { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Forbidden(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::Conflict(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::BadGateway(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::ValidationError { .. } => "VALIDATION_ERROR",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Forbidden(_) => "FORBIDDEN",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Conflict(_) => "CONFLICT",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
            ApiError::BadGateway(_) => "BAD_GATEWAY",
            ApiError::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
        }
    }

    /// Convert to JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::ValidationError { message, field_errors } => {
                let mut response = json!({
                    "error": true,
                    "message": message,
                    "code": "VALIDATION_ERROR"
                });

                if let Some(field_errors) = field_errors {
                    response["field_errors"] = json!(field_errors);
                }

                response
            }
            _ => {
                json!({
                    "error": true,
                    "message": self.message(),
                    "code": self.error_code()
                })
            }
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn validation_error(
        message: impl Into<String>,
        field_errors: Option<HashMap<String, String>>,
    ) -> Self {
        ApiError::ValidationError {
            message: message.into(),
            field_errors,
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        ApiError::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ApiError::Conflict(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

// Convert store and service error types to ApiError

impl From<crate::database::manager::DatabaseError> for ApiError {
    fn from(err: crate::database::manager::DatabaseError) -> Self {
        match err {
            crate::database::manager::DatabaseError::NotFound(msg) => ApiError::not_found(msg),
            crate::database::manager::DatabaseError::ConfigMissing(_)
            | crate::database::manager::DatabaseError::InvalidDatabaseUrl => {
                tracing::error!("Database configuration error: {}", err);
                ApiError::service_unavailable("Database temporarily unavailable")
            }
            crate::database::manager::DatabaseError::QueryError(msg) => {
                // Don't expose internal SQL errors to clients
                tracing::error!("Database query error: {}", msg);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
            crate::database::manager::DatabaseError::Sqlx(sqlx_err) => {
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error("Database error occurred")
            }
        }
    }
}

impl From<crate::database::projects::ProjectStoreError> for ApiError {
    fn from(err: crate::database::projects::ProjectStoreError) -> Self {
        match err {
            crate::database::projects::ProjectStoreError::Validation(msg) => {
                let mut field_errors = HashMap::new();
                field_errors.insert("title".to_string(), msg.clone());
                ApiError::validation_error(msg, Some(field_errors))
            }
            crate::database::projects::ProjectStoreError::NotFound(msg) => ApiError::not_found(msg),
            crate::database::projects::ProjectStoreError::Database(e) => e.into(),
            crate::database::projects::ProjectStoreError::Sqlx(e) => {
                tracing::error!("Project store error: {}", e);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::services::project_service::ProjectServiceError> for ApiError {
    fn from(err: crate::services::project_service::ProjectServiceError) -> Self {
        match err {
            crate::services::project_service::ProjectServiceError::Unauthenticated => {
                ApiError::unauthorized("Authentication required")
            }
            crate::services::project_service::ProjectServiceError::Store(e) => e.into(),
        }
    }
}

impl From<crate::database::profiles::ProfileStoreError> for ApiError {
    fn from(err: crate::database::profiles::ProfileStoreError) -> Self {
        match err {
            crate::database::profiles::ProfileStoreError::NotFound(msg) => ApiError::not_found(msg),
            crate::database::profiles::ProfileStoreError::UsernameTaken(username) => {
                ApiError::conflict(format!("Username '{}' is already taken", username))
            }
            crate::database::profiles::ProfileStoreError::Database(e) => e.into(),
            crate::database::profiles::ProfileStoreError::Sqlx(e) => {
                tracing::error!("Profile store error: {}", e);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::services::profile_service::ProfileServiceError> for ApiError {
    fn from(err: crate::services::profile_service::ProfileServiceError) -> Self {
        match err {
            crate::services::profile_service::ProfileServiceError::InvalidUsername(msg) => {
                let mut field_errors = HashMap::new();
                field_errors.insert("username".to_string(), msg.clone());
                ApiError::validation_error(msg, Some(field_errors))
            }
            crate::services::profile_service::ProfileServiceError::Store(e) => e.into(),
        }
    }
}

impl From<crate::database::analytics::AnalyticsStoreError> for ApiError {
    fn from(err: crate::database::analytics::AnalyticsStoreError) -> Self {
        match err {
            crate::database::analytics::AnalyticsStoreError::Database(e) => e.into(),
            crate::database::analytics::AnalyticsStoreError::Sqlx(e) => {
                tracing::error!("Analytics store error: {}", e);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

impl From<crate::services::visitor_service::VisitorError> for ApiError {
    fn from(err: crate::services::visitor_service::VisitorError) -> Self {
        match err {
            // Fails closed: nothing beyond "not found" leaks about usernames
            crate::services::visitor_service::VisitorError::UnknownUser => {
                ApiError::not_found("no such user")
            }
            crate::services::visitor_service::VisitorError::Profiles(e) => e.into(),
            crate::services::visitor_service::VisitorError::Projects(e) => e.into(),
        }
    }
}

impl From<crate::services::storage_service::StorageError> for ApiError {
    fn from(err: crate::services::storage_service::StorageError) -> Self {
        match err {
            crate::services::storage_service::StorageError::Rejected(msg) => {
                tracing::error!("Blob store rejected upload: {}", msg);
                ApiError::bad_gateway("File storage rejected the upload")
            }
            crate::services::storage_service::StorageError::Http(e) => {
                tracing::error!("Blob store request failed: {}", e);
                ApiError::bad_gateway("File storage is unreachable")
            }
        }
    }
}

impl From<crate::auth::JwtError> for ApiError {
    fn from(err: crate::auth::JwtError) -> Self {
        tracing::error!("JWT error: {}", err);
        ApiError::internal_server_error("Failed to issue session token")
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}
