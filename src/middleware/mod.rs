pub mod auth;
pub mod response;
pub mod validate_owner;

pub use auth::{jwt_auth_middleware, AuthUser};
pub use response::{ApiResponse, ApiResult};
pub use validate_owner::validate_owner_middleware;
