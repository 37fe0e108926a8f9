pub mod draft;
pub mod session;

pub use draft::{EditorTab, MediaField, ProjectDraft, TimelineField, ToolField};
pub use session::{
    EditorError, EditorSession, EditorState, PersistenceError, ProjectPersistence, SubmitOutcome,
};
