pub mod collection;
pub mod record;
pub mod upload;

pub use collection::{create, list};
pub use record::{record_delete, record_get, record_put};
pub use upload::upload;
