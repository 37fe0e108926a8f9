pub mod analytics;
pub mod manager;
pub mod models;
pub mod profiles;
pub mod projects;

pub use analytics::{AnalyticsStore, AnalyticsStoreError, AnalyticsSummary};
pub use manager::{DatabaseError, DatabaseManager};
pub use profiles::{ProfileStore, ProfileStoreError};
pub use projects::{ProjectStore, ProjectStoreError};
