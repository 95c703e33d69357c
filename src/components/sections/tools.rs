//! My Tools Section
//!
//! Grid of tool cards. The card under the pointer shows its caption as an
//! overlay; only one caption is visible at a time.

use dioxus::prelude::*;
use portfolio_core::content::{Tool, TOOLS};
use portfolio_core::EntryPose;

use crate::components::{SectionReveal, SectionTitle};
use crate::context::use_hover;

#[component]
fn ToolCard(index: usize, tool: Tool) -> Element {
    let mut hover = use_hover();
    let active = hover.read().is_active(tool.name);

    rsx! {
        SectionReveal {
            latch: format!("tools.{}", index),
            pose: EntryPose::Grow,
            div {
                class: "tool-card",
                onmouseenter: move |_| hover.write().set_hover(tool.name),
                onmouseleave: move |_| hover.write().leave(tool.name),

                div { class: "tool-icon", "\u{1F6E0}\u{FE0F}" }
                h4 { class: "tool-name", "{tool.name}" }

                if active {
                    p { class: "tool-caption", "{tool.caption}" }
                }
            }
        }
    }
}

#[component]
pub fn ToolsSection() -> Element {
    rsx! {
        section { id: "tools", class: "page-section",
            SectionTitle { section: "tools".to_string(), title: "My Tools".to_string() }
            div { class: "tool-grid",
                for (index, tool) in TOOLS.iter().enumerate() {
                    ToolCard { key: "{tool.name}", index, tool: *tool }
                }
            }
        }
    }
}
