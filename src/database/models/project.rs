use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::database::models::media::MediaItem;
use crate::database::models::timeline::TimelineItem;
use crate::database::models::tool::ToolItem;
use crate::themes::Theme;
use crate::types::ProjectStatus;

/// Storage row for the `projects` table (snake_case columns).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectRow {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cover_image: Option<String>,
    pub category: Option<String>,
    pub overview: Option<String>,
    pub challenge: Option<String>,
    pub process: Option<String>,
    pub outcome: Option<String>,
    pub status: String,
    pub theme: String,
    pub is_public: bool,
    pub slug: Option<String>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProjectRow {
    /// Assemble the wire aggregate from this row plus its child collections.
    pub fn into_project(
        self,
        timeline: Vec<TimelineItem>,
        media: Vec<MediaItem>,
        tools: Vec<ToolItem>,
    ) -> Project {
        Project {
            id: Some(self.id),
            title: self.title,
            description: self.description,
            cover_image: self.cover_image,
            category: self.category,
            overview: self.overview,
            challenge: self.challenge,
            process: self.process,
            outcome: self.outcome,
            status: ProjectStatus::from_storage(&self.status),
            theme: Theme::from_name(Some(&self.theme)),
            is_public: self.is_public,
            slug: self.slug,
            created_at: Some(self.created_at),
            updated_at: Some(self.updated_at),
            user_id: Some(self.user_id),
            timeline,
            media,
            tools,
        }
    }

    /// List views carry no child detail; collections start empty and are
    /// fetched lazily on demand.
    pub fn into_summary(self) -> Project {
        self.into_project(Vec::new(), Vec::new(), Vec::new())
    }
}

/// Wire/editor representation of the project aggregate (camelCase).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub process: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub media: Vec<MediaItem>,
    #[serde(default)]
    pub tools: Vec<ToolItem>,
}

impl Project {
    /// Snapshot the mutable fields for an update call. The editor always
    /// holds the complete current collections, so all three are present,
    /// which triggers full replacement on write. `slug` stays `None`: it is
    /// never regenerated on edit unless explicitly supplied.
    pub fn as_update(&self) -> ProjectUpdate {
        ProjectUpdate {
            title: self.title.clone(),
            description: self.description.clone(),
            cover_image: self.cover_image.clone(),
            category: self.category.clone(),
            overview: self.overview.clone(),
            challenge: self.challenge.clone(),
            process: self.process.clone(),
            outcome: self.outcome.clone(),
            status: self.status,
            theme: self.theme,
            is_public: self.is_public,
            slug: None,
            timeline: Some(self.timeline.clone()),
            media: Some(self.media.clone()),
            tools: Some(self.tools.clone()),
        }
    }
}

/// Update payload: the full new scalar state of the parent row (everything
/// mutable; id, userId and createdAt are never touched) plus optional child
/// collections. A collection that is present, even empty, is replaced
/// wholesale; an absent collection is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub process: Option<String>,
    #[serde(default)]
    pub outcome: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub timeline: Option<Vec<TimelineItem>>,
    #[serde(default)]
    pub media: Option<Vec<MediaItem>>,
    #[serde(default)]
    pub tools: Option<Vec<ToolItem>>,
}

/// Derive a URL slug from a title: lower-cased, whitespace collapsed to
/// single hyphens, everything outside `[a-z0-9-]` stripped, no consecutive
/// or leading/trailing hyphens.
pub fn create_slug(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        }
        // anything else is a non-word character: stripped
    }

    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slug_is_lowercase_hyphenated() {
        assert_eq!(create_slug("Hello, World!"), "hello-world");
        assert_eq!(create_slug("Brand Redesign 2024"), "brand-redesign-2024");
    }

    #[test]
    fn slug_collapses_and_trims_hyphens() {
        assert_eq!(create_slug("  spaced   out  "), "spaced-out");
        assert_eq!(create_slug("--a---b--"), "a-b");
        assert_eq!(create_slug("trailing dash-"), "trailing-dash");
    }

    #[test]
    fn slug_strips_non_word_characters() {
        assert_eq!(create_slug("Café & Bar (v2)"), "caf-bar-v2");
        assert_eq!(create_slug("100% #organic"), "100-organic");
    }

    #[test]
    fn slug_alphabet_property() {
        for title in ["Some Title!", "ÜBER cool", "a_b_c", "x  -  y", "!!!"] {
            let slug = create_slug(title);
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad char in slug {:?} for {:?}",
                slug,
                title
            );
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }

    #[test]
    fn project_wire_format_is_camel_case() {
        let project = Project {
            cover_image: Some("https://example.com/c.png".to_string()),
            is_public: true,
            ..Default::default()
        };
        let v = serde_json::to_value(&project).unwrap();
        assert!(v.get("coverImage").is_some());
        assert!(v.get("isPublic").is_some());
        assert!(v.get("cover_image").is_none());
    }

    #[test]
    fn project_deserializes_with_defaults() {
        let p: Project = serde_json::from_value(json!({ "title": "Redesign" })).unwrap();
        assert_eq!(p.title, "Redesign");
        assert_eq!(p.status, ProjectStatus::Draft);
        assert!(p.timeline.is_empty());
        assert!(!p.is_public);
    }

    #[test]
    fn update_absent_collections_stay_none() {
        let u: ProjectUpdate =
            serde_json::from_value(json!({ "title": "t", "timeline": [] })).unwrap();
        assert_eq!(u.timeline.as_deref(), Some(&[][..]));
        assert!(u.media.is_none());
        assert!(u.tools.is_none());
    }

    #[test]
    fn as_update_keeps_collections_and_drops_slug() {
        let project = Project {
            title: "Redesign".to_string(),
            slug: Some("redesign".to_string()),
            timeline: vec![TimelineItem { title: "Kickoff".to_string(), ..Default::default() }],
            ..Default::default()
        };
        let update = project.as_update();
        assert!(update.slug.is_none());
        assert_eq!(update.timeline.as_ref().map(|t| t.len()), Some(1));
        assert_eq!(update.media.as_ref().map(|m| m.len()), Some(0));
    }
}
