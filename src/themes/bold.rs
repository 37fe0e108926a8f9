//! Loud accent blocks: colored header banner, heavy headings, deep shadows.

use super::{
    gallery_items, text, timeline_entries, tool_badges, Presentation, Section, Theme,
};
use crate::database::models::project::Project;

const HEADING: &str = "text-3xl font-bold mb-6 text-projectshelf-primary";

pub fn render(project: &Project) -> Presentation {
    let mut sections = Vec::new();

    sections.push(Section::Header {
        title: project.title.clone(),
        description: text(&project.description),
        class: "bg-projectshelf-accent text-white p-8 md:p-12 rounded-lg text-4xl md:text-5xl font-bold",
    });

    if let Some(url) = text(&project.cover_image) {
        sections.push(Section::Cover {
            url,
            alt: project.title.clone(),
            class: "w-full h-auto rounded-lg shadow-xl transform -mt-16",
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
        theme: Theme::Bold,
        page_class: "max-w-4xl mx-auto",
        sections,
    }
}
