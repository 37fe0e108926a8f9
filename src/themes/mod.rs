pub mod bold;
pub mod elegant;
pub mod gradient;
pub mod gray;
pub mod minimalist;

use serde::{Deserialize, Serialize};

use crate::database::models::project::Project;
use crate::types::MediaType;

/// Named presentational variants. Adding a theme means adding a variant and
/// one render arm below; call sites never branch on raw theme strings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Minimalist,
    Bold,
    Elegant,
    Gray,
    Gradient,
}

impl Theme {
    pub const ALL: [Theme; 5] = [
        Theme::Minimalist,
        Theme::Bold,
        Theme::Elegant,
        Theme::Gray,
        Theme::Gradient,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Minimalist => "minimalist",
            Theme::Bold => "bold",
            Theme::Elegant => "elegant",
            Theme::Gray => "gray",
            Theme::Gradient => "gradient",
        }
    }

    /// Unrecognized or unset theme names fall back to the default variant.
    pub fn from_name(name: Option<&str>) -> Theme {
        match name {
            Some("bold") => Theme::Bold,
            Some("elegant") => Theme::Elegant,
            Some("gray") => Theme::Gray,
            Some("gradient") => Theme::Gradient,
            _ => Theme::Minimalist,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered, renderer-agnostic output of a theme pass. The `class` fields
/// carry the variant's styling tokens; a client maps them onto markup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub theme: Theme,
    pub page_class: &'static str,
    pub sections: Vec<Section>,
}

/// The semantic sections every variant renders when their backing data is
/// present. A section is emitted only when non-empty. The four narrative
/// sections are distinct variants so the wire tag names the slot directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    Header {
        title: String,
        description: Option<String>,
        class: &'static str,
    },
    Cover {
        url: String,
        alt: String,
        class: &'static str,
    },
    Overview {
        heading: &'static str,
        body: String,
        class: &'static str,
    },
    Challenge {
        heading: &'static str,
        body: String,
        class: &'static str,
    },
    Process {
        heading: &'static str,
        body: String,
        class: &'static str,
    },
    Outcome {
        heading: &'static str,
        body: String,
        class: &'static str,
    },
    Timeline {
        heading: &'static str,
        entries: Vec<TimelineEntry>,
        class: &'static str,
    },
    Gallery {
        heading: &'static str,
        items: Vec<GalleryItem>,
        class: &'static str,
    },
    Tools {
        heading: &'static str,
        tools: Vec<ToolBadge>,
        class: &'static str,
    },
}

impl Section {
    /// Stable discriminant used by tests and clients that only care about
    /// section identity, not content. Matches the serialized `kind` tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Header { .. } => "header",
            Section::Cover { .. } => "cover",
            Section::Overview { .. } => "overview",
            Section::Challenge { .. } => "challenge",
            Section::Process { .. } => "process",
            Section::Outcome { .. } => "outcome",
            Section::Timeline { .. } => "timeline",
            Section::Gallery { .. } => "gallery",
            Section::Tools { .. } => "tools",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
    pub date: String,
    pub title: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(rename = "type")]
    pub media_type: MediaType,
    pub url: String,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolBadge {
    pub name: String,
    pub icon: Option<String>,
}

/// Pure mapping from (project data, theme) to presentational structure.
/// No storage access happens here: switching the active theme is a
/// re-render of data already in hand.
pub fn render(project: &Project, theme: Theme) -> Presentation {
    match theme {
        Theme::Minimalist => minimalist::render(project),
        Theme::Bold => bold::render(project),
        Theme::Elegant => elegant::render(project),
        Theme::Gray => gray::render(project),
        Theme::Gradient => gradient::render(project),
    }
}

// Shared builders. Variants decide headings and classes; the data mapping
// (and its ordering guarantees) is common.

pub(crate) fn text(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Timeline entries in array order, never re-sorted.
pub(crate) fn timeline_entries(project: &Project) -> Vec<TimelineEntry> {
    project
        .timeline
        .iter()
        .map(|item| TimelineEntry {
            date: item.date.clone(),
            title: item.title.clone(),
            description: item.description.clone(),
        })
        .collect()
}

/// Gallery items in array order, never re-sorted.
pub(crate) fn gallery_items(project: &Project) -> Vec<GalleryItem> {
    project
        .media
        .iter()
        .map(|item| GalleryItem {
            media_type: item.media_type,
            url: item.url.clone(),
            caption: item.caption.clone(),
        })
        .collect()
}

pub(crate) fn tool_badges(project: &Project) -> Vec<ToolBadge> {
    project
        .tools
        .iter()
        .map(|item| ToolBadge {
            name: item.name.clone(),
            icon: item.icon.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_project as full_project;

    #[test]
    fn unknown_theme_names_fall_back_to_default() {
        assert_eq!(Theme::from_name(Some("brutalist")), Theme::Minimalist);
        assert_eq!(Theme::from_name(None), Theme::Minimalist);
        assert_eq!(Theme::from_name(Some("gradient")), Theme::Gradient);
    }

    #[test]
    fn every_variant_renders_the_same_semantic_sections() {
        let project = full_project();
        let expected = [
            "header", "cover", "overview", "challenge", "timeline",
            "process", "gallery", "outcome", "tools",
        ];

        for theme in Theme::ALL {
            let presentation = render(&project, theme);
            let kinds: Vec<&str> = presentation.sections.iter().map(Section::kind).collect();
            assert_eq!(kinds, expected, "section set mismatch for {}", theme);
        }
    }

    #[test]
    fn empty_optional_sections_are_skipped() {
        let project = Project {
            title: "Sparse".to_string(),
            challenge: Some("   ".to_string()), // whitespace-only counts as empty
            ..Default::default()
        };

        for theme in Theme::ALL {
            let presentation = render(&project, theme);
            let kinds: Vec<&str> = presentation.sections.iter().map(Section::kind).collect();
            assert_eq!(kinds, ["header"], "only the header should render for {}", theme);
        }
    }

    #[test]
    fn timeline_and_gallery_preserve_input_order() {
        let project = full_project();

        for theme in Theme::ALL {
            let presentation = render(&project, theme);
            for section in &presentation.sections {
                if let Section::Timeline { entries, .. } = section {
                    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
                    assert_eq!(titles, ["Kickoff", "Launch"]);
                }
                if let Section::Gallery { items, .. } = section {
                    let urls: Vec<&str> = items.iter().map(|i| i.url.as_str()).collect();
                    assert_eq!(urls, ["https://example.com/1.png", "https://example.com/2.png"]);
                }
            }
        }
    }

    #[test]
    fn rendering_is_pure() {
        let project = full_project();
        assert_eq!(render(&project, Theme::Bold), render(&project, Theme::Bold));
    }

    #[test]
    fn sections_serialize_with_a_kind_tag() {
        let presentation = render(&full_project(), Theme::Minimalist);
        let v = serde_json::to_value(&presentation).unwrap();
        assert_eq!(v["theme"], "minimalist");
        assert_eq!(v["sections"][0]["kind"], "header");
        assert!(v["pageClass"].is_string());
    }
}
