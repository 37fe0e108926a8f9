use crate::database::models::media::MediaItem;
use crate::database::models::project::Project;
use crate::database::models::timeline::TimelineItem;
use crate::database::models::tool::ToolItem;
use crate::themes::Theme;
use crate::types::{MediaType, ProjectStatus};

/// Editor tabs in authoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorTab {
    Details,
    Content,
    Media,
    Timeline,
    Tools,
    Preview,
}

impl EditorTab {
    pub const ALL: [EditorTab; 6] = [
        EditorTab::Details,
        EditorTab::Content,
        EditorTab::Media,
        EditorTab::Timeline,
        EditorTab::Tools,
        EditorTab::Preview,
    ];

    pub fn next(self) -> Self {
        match self {
            EditorTab::Details => EditorTab::Content,
            EditorTab::Content => EditorTab::Media,
            EditorTab::Media => EditorTab::Timeline,
            EditorTab::Timeline => EditorTab::Tools,
            EditorTab::Tools => EditorTab::Preview,
            EditorTab::Preview => EditorTab::Preview,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditorTab::Details => EditorTab::Details,
            EditorTab::Content => EditorTab::Details,
            EditorTab::Media => EditorTab::Content,
            EditorTab::Timeline => EditorTab::Media,
            EditorTab::Tools => EditorTab::Timeline,
            EditorTab::Preview => EditorTab::Tools,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineField {
    Date,
    Title,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaField {
    Type,
    Url,
    Caption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolField {
    Name,
    Icon,
}

/// The in-memory project draft being authored. It always holds the complete
/// current collections; submission writes each one wholesale, so there is
/// nothing to merge against later.
#[derive(Debug, Clone, Default)]
pub struct ProjectDraft {
    pub project: Project,
}

impl ProjectDraft {
    /// Fresh draft with the defaults a new editor screen shows.
    pub fn new() -> Self {
        Self {
            project: Project {
                category: Some("web-design".to_string()),
                status: ProjectStatus::Draft,
                ..Default::default()
            },
        }
    }

    /// Draft seeded from a persisted project (editing flow).
    pub fn from_existing(project: Project) -> Self {
        Self { project }
    }

    pub fn is_editing(&self) -> bool {
        self.project.id.is_some()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.project.title = value.into();
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.project.description = none_if_empty(value.into());
    }

    pub fn set_category(&mut self, value: impl Into<String>) {
        self.project.category = none_if_empty(value.into());
    }

    pub fn set_cover_image(&mut self, value: impl Into<String>) {
        self.project.cover_image = none_if_empty(value.into());
    }

    pub fn set_overview(&mut self, value: impl Into<String>) {
        self.project.overview = none_if_empty(value.into());
    }

    pub fn set_challenge(&mut self, value: impl Into<String>) {
        self.project.challenge = none_if_empty(value.into());
    }

    pub fn set_process(&mut self, value: impl Into<String>) {
        self.project.process = none_if_empty(value.into());
    }

    pub fn set_outcome(&mut self, value: impl Into<String>) {
        self.project.outcome = none_if_empty(value.into());
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.project.theme = theme;
    }

    pub fn set_is_public(&mut self, is_public: bool) {
        self.project.is_public = is_public;
    }

    // Ordered collections: array order is the display order. Out-of-range
    // indices are guarded no-ops returning false.

    pub fn add_timeline_item(&mut self) {
        self.project.timeline.push(TimelineItem::default());
    }

    pub fn set_timeline_field(
        &mut self,
        index: usize,
        field: TimelineField,
        value: impl Into<String>,
    ) -> bool {
        let Some(item) = self.project.timeline.get_mut(index) else {
            return false;
        };
        match field {
            TimelineField::Date => item.date = value.into(),
            TimelineField::Title => item.title = value.into(),
            TimelineField::Description => item.description = none_if_empty(value.into()),
        }
        true
    }

    pub fn remove_timeline_item(&mut self, index: usize) -> bool {
        if index >= self.project.timeline.len() {
            return false;
        }
        self.project.timeline.remove(index);
        true
    }

    pub fn add_media_item(&mut self) {
        self.project.media.push(MediaItem::default());
    }

    pub fn set_media_field(&mut self, index: usize, field: MediaField, value: impl Into<String>) -> bool {
        let Some(item) = self.project.media.get_mut(index) else {
            return false;
        };
        match field {
            MediaField::Type => item.media_type = MediaType::from_storage(&value.into()),
            MediaField::Url => item.url = value.into(),
            MediaField::Caption => item.caption = none_if_empty(value.into()),
        }
        true
    }

    pub fn remove_media_item(&mut self, index: usize) -> bool {
        if index >= self.project.media.len() {
            return false;
        }
        self.project.media.remove(index);
        true
    }

    pub fn add_tool(&mut self) {
        self.project.tools.push(ToolItem::default());
    }

    pub fn set_tool_field(&mut self, index: usize, field: ToolField, value: impl Into<String>) -> bool {
        let Some(item) = self.project.tools.get_mut(index) else {
            return false;
        };
        match field {
            ToolField::Name => item.name = value.into(),
            ToolField::Icon => item.icon = none_if_empty(value.into()),
        }
        true
    }

    pub fn remove_tool(&mut self, index: usize) -> bool {
        if index >= self.project.tools.len() {
            return false;
        }
        self.project.tools.remove(index);
        true
    }

    /// Advisory completion indicator shown next to the editor: the share of
    /// satisfied sections among basic details, content, media, timeline and
    /// tools. Never a gate on submission.
    pub fn completion_percent(&self) -> u8 {
        let p = &self.project;
        let sections = [
            !p.title.trim().is_empty() && p.description.as_deref().is_some_and(|d| !d.trim().is_empty()),
            p.overview.as_deref().is_some_and(|o| !o.trim().is_empty()),
            !p.media.is_empty(),
            !p.timeline.is_empty(),
            !p.tools.is_empty(),
        ];
        let satisfied = sections.iter().filter(|s| **s).count();
        (satisfied * 100 / sections.len()) as u8
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
