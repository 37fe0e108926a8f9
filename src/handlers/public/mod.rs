// Public handlers: no authentication, no user context. Everything here is
// reachable by anonymous visitors, so inputs are validated from scratch.
pub mod auth;
pub mod profile;
pub mod project;
pub mod track;
