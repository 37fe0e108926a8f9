pub mod analytics_service;
pub mod cache;
pub mod profile_service;
pub mod project_service;
pub mod session;
pub mod storage_service;
pub mod visitor_service;

pub use analytics_service::AnalyticsService;
pub use cache::ProjectCache;
pub use profile_service::{ProfileService, ProfileServiceError};
pub use project_service::{ProjectService, ProjectServiceError, SessionScopedProjects};
pub use session::Session;
pub use storage_service::{StorageError, StorageService};
pub use visitor_service::{PublicProfile, VisitorError, VisitorService};
