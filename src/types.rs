/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Lifecycle state of a project. New projects start as drafts; publishing
/// and archiving are explicit user actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Draft => "draft",
            ProjectStatus::Published => "published",
            ProjectStatus::Archived => "archived",
        }
    }

    /// Parse a storage value. Unknown strings fall back to draft so reads
    /// stay total even if the column was written by an older build.
    pub fn from_storage(value: &str) -> Self {
        match value {
            "published" => ProjectStatus::Published,
            "archived" => ProjectStatus::Archived,
            _ => ProjectStatus::Draft,
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of entry in a project's media gallery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    #[default]
    Image,
    Video,
    Embed,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Embed => "embed",
        }
    }

    pub fn from_storage(value: &str) -> Self {
        match value {
            "video" => MediaType::Video,
            "embed" => MediaType::Embed,
            _ => MediaType::Image,
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_strings() {
        for status in [ProjectStatus::Draft, ProjectStatus::Published, ProjectStatus::Archived] {
            assert_eq!(ProjectStatus::from_storage(status.as_str()), status);
        }
    }

    #[test]
    fn unknown_status_falls_back_to_draft() {
        assert_eq!(ProjectStatus::from_storage("retired"), ProjectStatus::Draft);
        assert_eq!(ProjectStatus::from_storage(""), ProjectStatus::Draft);
    }

    #[test]
    fn media_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&MediaType::Embed).unwrap(), "\"embed\"");
        assert_eq!(MediaType::from_storage("gif"), MediaType::Image);
    }
}
