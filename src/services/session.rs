use uuid::Uuid;

/// Explicit session context threaded to the services that need it.
/// Constructed once per authenticated request or editing session, never an
/// ambient global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub username: String,
}

impl Session {
    pub fn new(user_id: Uuid, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }
}
