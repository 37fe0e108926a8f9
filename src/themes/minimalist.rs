//! Quiet single-column layout: light type, thin rules between sections.

use super::{
    gallery_items, text, timeline_entries, tool_badges, Presentation, Section, Theme,
};
use crate::database::models::project::Project;

const HEADING: &str = "text-2xl font-light mb-4 border-b pb-2";

pub fn render(project: &Project) -> Presentation {
    let mut sections = Vec::new();

    sections.push(Section::Header {
        title: project.title.clone(),
        description: text(&project.description),
        class: "text-4xl font-light tracking-tight",
    });

    if let Some(url) = text(&project.cover_image) {
        sections.push(Section::Cover {
            url,
            alt: project.title.clone(),
            class: "w-full h-auto rounded-sm",
        });
    }

    if let Some(body) = text(&project.overview) {
        sections.push(Section::Overview {
            heading: "Overview",
            body,
            class: HEADING,
        });
    }

    if let Some(body) = text(&project.challenge) {
        sections.push(Section::Challenge {
            heading: "The Challenge",
            body,
            class: HEADING,
        });
    }

    if !project.timeline.is_empty() {
        sections.push(Section::Timeline {
            heading: "Project Timeline",
            entries: timeline_entries(project),
            class: HEADING,
        });
    }

    if let Some(body) = text(&project.process) {
        sections.push(Section::Process {
            heading: "Process & Approach",
            body,
            class: HEADING,
        });
    }

    if !project.media.is_empty() {
        sections.push(Section::Gallery {
            heading: "Gallery",
            items: gallery_items(project),
            class: HEADING,
        });
    }

    if let Some(body) = text(&project.outcome) {
        sections.push(Section::Outcome {
            heading: "Outcome & Results",
            body,
            class: HEADING,
        });
    }

    if !project.tools.is_empty() {
        sections.push(Section::Tools {
            heading: "Tools & Technologies",
            tools: tool_badges(project),
            class: HEADING,
        });
    }

    Presentation {
        theme: Theme::Minimalist,
        page_class: "max-w-4xl mx-auto bg-white",
        sections,
    }
}
