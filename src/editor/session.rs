use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::database::models::project::{Project, ProjectUpdate};
use crate::editor::draft::{EditorTab, ProjectDraft};
use crate::types::ProjectStatus;

/// Errors a persistence backend can surface to the editor.
#[derive(Debug, Clone, Error)]
pub enum PersistenceError {
    #[error("Authentication required")]
    Unauthenticated,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Storage failure: {0}")]
    Storage(String),
}

/// The editor's seam to durable storage. Implemented by the project service
/// (session-scoped) in the application and by mocks in tests.
#[async_trait]
pub trait ProjectPersistence: Send + Sync {
    async fn create(&self, data: &Project) -> Result<Project, PersistenceError>;
    async fn update(&self, id: Uuid, data: &ProjectUpdate) -> Result<(), PersistenceError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Editing,
    Submitting,
}

#[derive(Debug, Error)]
pub enum EditorError {
    /// Missing required field; surfaced as a form message, the submission
    /// never reaches persistence.
    #[error("{0}")]
    Validation(String),

    #[error("An upload is still in progress")]
    UploadInFlight,

    #[error("A submission is already in progress")]
    AlreadySubmitting,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// What a successful submission tells the caller: which project to navigate
/// to, and whether it was just created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub project_id: Option<Uuid>,
    pub created: bool,
}

/// One authoring session over a single draft. The draft is owned exclusively
/// here and never shared across concurrent editors.
pub struct EditorSession<P: ProjectPersistence> {
    pub draft: ProjectDraft,
    tab: EditorTab,
    state: EditorState,
    file_uploading: bool,
    persistence: P,
}

impl<P: ProjectPersistence> EditorSession<P> {
    /// Start a session over a fresh draft (creation flow).
    pub fn new(persistence: P) -> Self {
        Self {
            draft: ProjectDraft::new(),
            tab: EditorTab::Details,
            state: EditorState::Editing,
            file_uploading: false,
            persistence,
        }
    }

    /// Start a session over a persisted project (editing flow).
    pub fn edit(persistence: P, existing: Project) -> Self {
        Self {
            draft: ProjectDraft::from_existing(existing),
            tab: EditorTab::Details,
            state: EditorState::Editing,
            file_uploading: false,
            persistence,
        }
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn tab(&self) -> EditorTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: EditorTab) {
        self.tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.tab = self.tab.next();
    }

    pub fn prev_tab(&mut self) {
        self.tab = self.tab.prev();
    }

    pub fn is_file_uploading(&self) -> bool {
        self.file_uploading
    }

    /// Mark an attached upload as in flight; submits are refused until
    /// `finish_upload` is called.
    pub fn begin_upload(&mut self) {
        self.file_uploading = true;
    }

    pub fn finish_upload(&mut self) {
        self.file_uploading = false;
    }

    /// Save the draft with the requested status. Validates that the title is
    /// non-empty before anything touches persistence; on failure of any kind
    /// the session is back in `Editing` so the user can fix and resubmit.
    pub async fn submit(&mut self, target: ProjectStatus) -> Result<SubmitOutcome, EditorError> {
        if self.file_uploading {
            return Err(EditorError::UploadInFlight);
        }
        if self.state == EditorState::Submitting {
            return Err(EditorError::AlreadySubmitting);
        }
        if self.draft.project.title.trim().is_empty() {
            return Err(EditorError::Validation("Project title is required.".to_string()));
        }

        self.state = EditorState::Submitting;
        self.draft.project.status = target;

        let result = if let Some(id) = self.draft.project.id {
            let update = self.draft.project.as_update();
            let result = self.persistence.update(id, &update).await;
            result.map(|_| SubmitOutcome { project_id: Some(id), created: false })
        } else {
            let result = self.persistence.create(&self.draft.project).await;
            match result {
                Ok(created) => {
                    self.draft.project.id = created.id;
                    Ok(SubmitOutcome { project_id: created.id, created: true })
                }
                Err(e) => Err(e),
            }
        };

        self.state = EditorState::Editing;
        Ok(result?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Records calls; optionally fails every write.
    #[derive(Default)]
    struct MockPersistence {
        creates: AtomicUsize,
        updates: AtomicUsize,
        last_update: Mutex<Option<ProjectUpdate>>,
        fail: bool,
    }

    impl MockPersistence {
        fn failing() -> Self {
            Self { fail: true, ..Default::default() }
        }
    }

    #[async_trait]
    impl ProjectPersistence for MockPersistence {
        async fn create(&self, data: &Project) -> Result<Project, PersistenceError> {
            self.creates.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PersistenceError::Storage("insert failed".to_string()));
            }
            let mut created = data.clone();
            created.id = Some(Uuid::new_v4());
            Ok(created)
        }

        async fn update(&self, _id: Uuid, data: &ProjectUpdate) -> Result<(), PersistenceError> {
            self.updates.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(PersistenceError::Storage("update failed".to_string()));
            }
            *self.last_update.lock().unwrap() = Some(data.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn empty_title_never_reaches_persistence() {
        let mut session = EditorSession::new(MockPersistence::default());
        session.draft.set_title("   ");

        let err = session.submit(ProjectStatus::Draft).await.unwrap_err();
        assert!(matches!(err, EditorError::Validation(_)));
        assert_eq!(session.persistence.creates.load(Ordering::SeqCst), 0);
        assert_eq!(session.persistence.updates.load(Ordering::SeqCst), 0);
        assert_eq!(session.state(), EditorState::Editing);
    }

    #[tokio::test]
    async fn submit_creates_when_draft_has_no_id() {
        let mut session = EditorSession::new(MockPersistence::default());
        session.draft.set_title("Redesign");

        let outcome = session.submit(ProjectStatus::Published).await.unwrap();
        assert!(outcome.created);
        assert!(outcome.project_id.is_some());
        // the draft adopts the persisted id and the requested status
        assert_eq!(session.draft.project.id, outcome.project_id);
        assert_eq!(session.draft.project.status, ProjectStatus::Published);
        assert_eq!(session.persistence.creates.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn submit_updates_when_draft_carries_an_id() {
        let id = Uuid::new_v4();
        let existing = Project {
            id: Some(id),
            title: "Redesign".to_string(),
            ..Default::default()
        };
        let mut session = EditorSession::edit(MockPersistence::default(), existing);
        session.draft.add_timeline_item();

        let outcome = session.submit(ProjectStatus::Draft).await.unwrap();
        assert!(!outcome.created);
        assert_eq!(outcome.project_id, Some(id));
        assert_eq!(session.persistence.updates.load(Ordering::SeqCst), 1);

        // the update carries the complete collections for full replacement
        let update = session.persistence.last_update.lock().unwrap().clone().unwrap();
        assert_eq!(update.timeline.map(|t| t.len()), Some(1));
        assert!(update.media.is_some());
        assert!(update.tools.is_some());
    }

    #[tokio::test]
    async fn upload_in_flight_blocks_submits() {
        let mut session = EditorSession::new(MockPersistence::default());
        session.draft.set_title("Redesign");

        session.begin_upload();
        let err = session.submit(ProjectStatus::Draft).await.unwrap_err();
        assert!(matches!(err, EditorError::UploadInFlight));
        assert_eq!(session.persistence.creates.load(Ordering::SeqCst), 0);

        session.finish_upload();
        assert!(session.submit(ProjectStatus::Draft).await.is_ok());
    }

    #[tokio::test]
    async fn failed_submit_returns_to_editing_and_allows_retry() {
        let mut session = EditorSession::new(MockPersistence::failing());
        session.draft.set_title("Redesign");

        let err = session.submit(ProjectStatus::Published).await.unwrap_err();
        assert!(matches!(err, EditorError::Persistence(_)));
        assert_eq!(session.state(), EditorState::Editing);
        assert!(session.draft.project.id.is_none());

        // the draft is intact and a retry goes back through persistence
        let _ = session.submit(ProjectStatus::Published).await.unwrap_err();
        assert_eq!(session.persistence.creates.load(Ordering::SeqCst), 2);
    }
}
