use dioxus::prelude::*;
use portfolio_core::content::PROCESS_STEPS;
use portfolio_core::reveal::stagger_ms;
use portfolio_core::EntryPose;

use crate::components::{SectionReveal, SectionTitle};

#[component]
pub fn ProcessSection() -> Element {
    rsx! {
        section { id: "process", class: "page-section",
            SectionTitle { section: "process".to_string(), title: "My Design Process".to_string() }
            div { class: "process-timeline",
                div { class: "process-line" }
                div { class: "process-steps",
                    for (index, step) in PROCESS_STEPS.iter().enumerate() {
                        SectionReveal {
                            key: "{step.step}",
                            latch: format!("process.{}", index),
                            pose: EntryPose::alternating(index),
                            delay_ms: stagger_ms(index, 200),
                            class: "process-step".to_string(),
                            div { class: "step-icon", "{step.icon}" }
                            h3 { class: "card-title", "{step.title}" }
                            p { class: "body-text", "{step.description}" }
                        }
                    }
                }
            }
        }
    }
}
