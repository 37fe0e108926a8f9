use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config;
use crate::database::models::project::Project;

/// Process-wide read cache for project detail and list views, keyed by
/// entity id. Every mutation that changes an entity must invalidate the
/// entries covering it. Bounded: inserts past `max_entries` are skipped
/// rather than evicting (views simply fall through to storage).
pub struct ProjectCache {
    details: RwLock<HashMap<Uuid, Project>>,
    lists: RwLock<HashMap<Uuid, Vec<Project>>>,
    max_entries: usize,
}

impl ProjectCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            details: RwLock::new(HashMap::new()),
            lists: RwLock::new(HashMap::new()),
            max_entries,
        }
    }

    pub fn global() -> &'static ProjectCache {
        use std::sync::OnceLock;
        static INSTANCE: OnceLock<ProjectCache> = OnceLock::new();
        INSTANCE.get_or_init(|| ProjectCache::new(config::config().cache.max_entries))
    }

    pub async fn get_detail(&self, id: Uuid) -> Option<Project> {
        self.details.read().await.get(&id).cloned()
    }

    pub async fn put_detail(&self, project: &Project) {
        let Some(id) = project.id else { return };
        let mut details = self.details.write().await;
        if details.len() >= self.max_entries && !details.contains_key(&id) {
            return;
        }
        details.insert(id, project.clone());
    }

    pub async fn get_list(&self, user_id: Uuid) -> Option<Vec<Project>> {
        self.lists.read().await.get(&user_id).cloned()
    }

    pub async fn put_list(&self, user_id: Uuid, projects: &[Project]) {
        let mut lists = self.lists.write().await;
        if lists.len() >= self.max_entries && !lists.contains_key(&user_id) {
            return;
        }
        lists.insert(user_id, projects.to_vec());
    }

    /// Drop the detail entry for one project and, when the owner is known,
    /// that owner's list view.
    pub async fn invalidate_project(&self, id: Uuid, user_id: Option<Uuid>) {
        self.details.write().await.remove(&id);
        if let Some(user_id) = user_id {
            self.lists.write().await.remove(&user_id);
        }
    }

    pub async fn invalidate_user(&self, user_id: Uuid) {
        self.lists.write().await.remove(&user_id);
    }

    pub async fn clear(&self) {
        self.details.write().await.clear();
        self.lists.write().await.clear();
    }
}
