pub mod media;
pub mod page_view;
pub mod profile;
pub mod project;
pub mod timeline;
pub mod tool;

pub use media::{MediaItem, MediaItemRow};
pub use page_view::PageView;
pub use profile::Profile;
pub use project::{create_slug, Project, ProjectRow, ProjectUpdate};
pub use timeline::{TimelineItem, TimelineItemRow};
pub use tool::{ToolItem, ToolItemRow};
