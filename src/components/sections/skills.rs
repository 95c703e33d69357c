//! Skills Section
//!
//! Two columns of skill bars. Each bar's fill grows from zero to its
//! width the first time its row is revealed.

use dioxus::prelude::*;
use portfolio_core::content::{Skill, DESIGN_SKILLS, TOOL_SKILLS};
use portfolio_core::reveal::stagger_ms;
use portfolio_core::EntryPose;

use crate::components::{SectionReveal, SectionTitle};

/// One column of skill bars; rows latch under `"<group>.<index>"`.
#[component]
fn SkillColumn(
    group: String,
    heading: String,
    skills: &'static [Skill],
    pose: EntryPose,
    delay_ms: u32,
) -> Element {
    rsx! {
        SectionReveal {
            latch: group.clone(),
            pose: EntryPose::Fade,
            delay_ms,
            class: "skill-column".to_string(),
            h3 { class: "column-title", "{heading}" }
            for (index, skill) in skills.iter().enumerate() {
                SectionReveal {
                    key: "{index}",
                    latch: format!("{}.{}", group, index),
                    pose,
                    delay_ms: stagger_ms(index, 200),
                    class: "skill-row".to_string(),
                    div { class: "skill-label",
                        span { "{skill.name}" }
                        span { "100%" }
                    }
                    div { class: "skill-track",
                        div {
                            class: "skill-fill",
                            style: "--skill-width: {skill.width}%;",
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsSection() -> Element {
    rsx! {
        section { id: "skills", class: "page-section",
            SectionTitle { section: "skills".to_string(), title: "Skills".to_string() }
            div { class: "card-grid two wide-gap",
                SkillColumn {
                    group: "skills.design".to_string(),
                    heading: "Design Expertise".to_string(),
                    skills: DESIGN_SKILLS,
                    pose: EntryPose::SlideLeft,
                    delay_ms: 200,
                }
                SkillColumn {
                    group: "skills.tools".to_string(),
                    heading: "Tools & AI".to_string(),
                    skills: TOOL_SKILLS,
                    pose: EntryPose::SlideRight,
                    delay_ms: 400,
                }
            }
        }
    }
}
