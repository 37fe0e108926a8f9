//! Dark monochrome layout: gray-900 canvas, blue accents.

use super::{
    gallery_items, text, timeline_entries, tool_badges, Presentation, Section, Theme,
};
use crate::database::models::project::Project;

const HEADING: &str = "text-2xl font-semibold text-blue-400 mb-4";

pub fn render(project: &Project) -> Presentation {
    let mut sections = Vec::new();

    sections.push(Section::Header {
        title: project.title.clone(),
        description: text(&project.description),
        class: "text-center text-3xl md:text-4xl font-bold text-blue-400",
    });

    if let Some(url) = text(&project.cover_image) {
        sections.push(Section::Cover {
            url,
            alt: project.title.clone(),
            class: "w-full h-auto rounded-lg border border-gray-700",
        });
    }

    if let Some(body) = text(&project.overview) {
        sections.push(Section::Overview {
            heading: "About This Project",
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
            heading: "Milestones",
            entries: timeline_entries(project),
            class: HEADING,
        });
    }

    if let Some(body) = text(&project.process) {
        sections.push(Section::Process {
            heading: "The Process",
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
            heading: "The Results",
            body,
            class: HEADING,
        });
    }

    if !project.tools.is_empty() {
        sections.push(Section::Tools {
            heading: "Technologies Used",
            tools: tool_badges(project),
            class: HEADING,
        });
    }

    Presentation {
        theme: Theme::Gray,
        page_class: "max-w-4xl mx-auto space-y-8 bg-gray-900 text-white p-6 rounded-lg",
        sections,
    }
}
