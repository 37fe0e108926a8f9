//! Saturated gradient canvas with translucent panels and gradient text.

use super::{
    gallery_items, text, timeline_entries, tool_badges, Presentation, Section, Theme,
};
use crate::database::models::project::Project;

const HEADING: &str = "text-2xl font-semibold bg-clip-text text-transparent bg-gradient-to-r from-blue-300 to-pink-300 mb-4";

pub fn render(project: &Project) -> Presentation {
    let mut sections = Vec::new();

    sections.push(Section::Header {
        title: project.title.clone(),
        description: text(&project.description),
        class: "text-center text-4xl md:text-5xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-300 to-pink-300",
    });

    if let Some(url) = text(&project.cover_image) {
        sections.push(Section::Cover {
            url,
            alt: project.title.clone(),
            class: "w-full h-auto rounded-lg ring-1 ring-white/20",
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
        theme: Theme::Gradient,
        page_class: "max-w-4xl mx-auto space-y-8 backdrop-blur-sm bg-gradient-to-br from-blue-900 via-purple-800 to-pink-700 text-white p-6 rounded-lg",
        sections,
    }
}
