use dioxus::prelude::*;
use portfolio_core::content::PROFILE;

use crate::components::{SectionReveal, SectionTitle};

#[component]
pub fn AboutSection() -> Element {
    rsx! {
        section { id: "about", class: "page-section",
            SectionTitle { section: "about".to_string(), title: "About Me".to_string() }
            SectionReveal { latch: "about".to_string(), delay_ms: 200, class: "about-grid".to_string(),
                div {
                    for paragraph in PROFILE.about {
                        p { class: "body-text", "{paragraph}" }
                    }
                }
                div { class: "about-art",
                    span { "\u{1F3A8}" }
                }
            }
        }
    }
}
