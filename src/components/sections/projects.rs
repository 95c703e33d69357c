use dioxus::prelude::*;
use portfolio_core::content::PROJECTS;

use crate::components::{SectionReveal, SectionTitle};

#[component]
pub fn ProjectsSection() -> Element {
    rsx! {
        section { id: "portfolio", class: "page-section",
            SectionTitle { section: "portfolio".to_string(), title: "Portfolio Projects".to_string() }
            div { class: "card-grid four",
                for (index, project) in PROJECTS.iter().enumerate() {
                    SectionReveal {
                        key: "{index}",
                        latch: format!("portfolio.{}", index),
                        class: "project-card".to_string(),
                        div { class: "project-cover", style: "{project.cover_style()}",
                            div { class: "project-eye", "\u{1F441}\u{FE0F}" }
                        }
                        div { class: "project-body",
                            h3 { class: "project-title", "{project.title}" }
                            p { class: "project-desc", "{project.description}" }
                        }
                    }
                }
            }
        }
    }
}
