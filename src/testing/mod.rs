use crate::database::models::media::MediaItem;
use crate::database::models::project::Project;
use crate::database::models::timeline::TimelineItem;
use crate::database::models::tool::ToolItem;

/// A fully-populated project aggregate for unit tests: every optional
/// narrative field set, two ordered timeline entries, two gallery items and
/// one tool.
pub fn sample_project() -> Project {
    Project {
        title: "Brand Redesign".to_string(),
        description: Some("A complete refresh".to_string()),
        cover_image: Some("https://example.com/cover.png".to_string()),
        category: Some("branding".to_string()),
        overview: Some("Context and goals".to_string()),
        challenge: Some("Dated identity, fragmented assets".to_string()),
        process: Some("Audit, sketches, iterations".to_string()),
        outcome: Some("Launched in three markets".to_string()),
        timeline: vec![
            timeline_item("Jan", "Kickoff"),
            timeline_item("Mar", "Launch"),
        ],
        media: vec![
            media_item("https://example.com/1.png"),
            media_item("https://example.com/2.png"),
        ],
        tools: vec![ToolItem {
            name: "Figma".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

pub fn timeline_item(date: &str, title: &str) -> TimelineItem {
    TimelineItem {
        date: date.to_string(),
        title: title.to_string(),
        ..Default::default()
    }
}

pub fn media_item(url: &str) -> MediaItem {
    MediaItem {
        url: url.to_string(),
        ..Default::default()
    }
}
