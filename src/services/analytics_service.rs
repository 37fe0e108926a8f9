use uuid::Uuid;

use crate::database::analytics::{AnalyticsStore, AnalyticsStoreError, AnalyticsSummary};

/// Page-view tracking and the dashboard's view aggregates. Tracking is
/// strictly best-effort: a failed write is logged and swallowed because it
/// must never block or break page rendering.
pub struct AnalyticsService {
    store: AnalyticsStore,
}

impl AnalyticsService {
    pub fn new(store: AnalyticsStore) -> Self {
        Self { store }
    }

    pub async fn connect() -> Result<Self, AnalyticsStoreError> {
        Ok(Self::new(AnalyticsStore::connect().await?))
    }

    pub async fn track_page_view(
        &self,
        project_id: Option<Uuid>,
        page_path: &str,
        user_agent: Option<&str>,
        referrer: Option<&str>,
    ) {
        let ua = user_agent.unwrap_or("");
        let browser = browser_family(ua);
        let device = device_class(ua);

        if let Err(e) = self
            .store
            .insert_page_view(project_id, page_path, browser, device, referrer)
            .await
        {
            tracing::warn!("Failed to track page view for {}: {}", page_path, e);
        }
    }

    pub async fn summary_for_user(&self, user_id: Uuid) -> Result<AnalyticsSummary, AnalyticsStoreError> {
        self.store.summary_for_user(user_id).await
    }
}

/// Coarse browser family from the user agent. Edge and Opera ship Chrome's
/// token too, so they are checked first.
pub fn browser_family(user_agent: &str) -> &'static str {
    if user_agent.contains("Firefox") {
        "Firefox"
    } else if user_agent.contains("Edge") || user_agent.contains("Edg") {
        "Edge"
    } else if user_agent.contains("Opera") || user_agent.contains("OPR") {
        "Opera"
    } else if user_agent.contains("Chrome") {
        "Chrome"
    } else if user_agent.contains("Safari") {
        "Safari"
    } else {
        "Unknown"
    }
}

/// Coarse device class from the user agent.
pub fn device_class(user_agent: &str) -> &'static str {
    const MOBILE_MARKERS: &[&str] = &[
        "Android", "webOS", "iPhone", "iPad", "iPod", "BlackBerry", "IEMobile", "Opera Mini",
    ];
    const TABLET_MARKERS: &[&str] = &["Tablet", "PlayBook"];

    if MOBILE_MARKERS.iter().any(|m| user_agent.contains(m)) {
        "Mobile"
    } else if TABLET_MARKERS.iter().any(|m| user_agent.contains(m)) {
        "Tablet"
    } else {
        "Desktop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_family_detection() {
        assert_eq!(browser_family("Mozilla/5.0 Gecko/20100101 Firefox/126.0"), "Firefox");
        assert_eq!(browser_family("Mozilla/5.0 Chrome/125.0 Safari/537.36 Edg/125.0"), "Edge");
        assert_eq!(browser_family("Mozilla/5.0 Chrome/125.0 Safari/537.36 OPR/110.0"), "Opera");
        assert_eq!(browser_family("Mozilla/5.0 Chrome/125.0 Safari/537.36"), "Chrome");
        assert_eq!(browser_family("Mozilla/5.0 Version/17.4 Safari/605.1.15"), "Safari");
        assert_eq!(browser_family("curl/8.5.0"), "Unknown");
    }

    #[test]
    fn device_class_detection() {
        assert_eq!(device_class("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0)"), "Mobile");
        assert_eq!(device_class("Mozilla/5.0 (Linux; Android 14; Pixel 8)"), "Mobile");
        assert_eq!(device_class("Mozilla/5.0 (PlayBook; U; RIM Tablet OS)"), "Tablet");
        assert_eq!(device_class("Mozilla/5.0 (X11; Linux x86_64)"), "Desktop");
    }
}
