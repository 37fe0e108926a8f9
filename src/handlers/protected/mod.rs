// Protected handlers: every route here sits behind the JWT middleware and
// receives the caller's AuthUser extension.
pub mod analytics;
pub mod auth;
pub mod projects;
