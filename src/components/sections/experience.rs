use dioxus::prelude::*;
use portfolio_core::content::EXPERIENCE;
use portfolio_core::reveal::stagger_ms;

use crate::components::{SectionReveal, SectionTitle};

#[component]
pub fn ExperienceSection() -> Element {
    rsx! {
        section { id: "experience", class: "page-section",
            SectionTitle { section: "experience".to_string(), title: "Experience".to_string() }
            div { class: "card-grid three",
                for (index, entry) in EXPERIENCE.iter().enumerate() {
                    SectionReveal {
                        key: "{index}",
                        latch: format!("experience.{}", index),
                        delay_ms: stagger_ms(index, 100),
                        class: "glass-card lift".to_string(),
                        div { class: "card-icon", "{entry.icon}" }
                        h3 { class: "card-title", "{entry.title}" }
                        p { class: "card-dates", "{entry.dates}" }
                        p { class: "body-text", "{entry.description}" }
                    }
                }
            }
        }
    }
}
