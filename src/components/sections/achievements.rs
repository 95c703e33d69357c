use dioxus::prelude::*;
use portfolio_core::content::{ACHIEVEMENTS, SLOGANS};
use portfolio_core::EntryPose;

use crate::components::{SectionReveal, SectionTitle};

#[component]
pub fn AchievementsSection() -> Element {
    rsx! {
        section { id: "achievements", class: "page-section",
            SectionTitle { section: "achievements".to_string(), title: "Achievements".to_string() }
            SectionReveal {
                latch: "achievements".to_string(),
                pose: EntryPose::Fade,
                class: "achievement-panel".to_string(),
                ul { class: "achievement-list",
                    for item in ACHIEVEMENTS {
                        li { class: if item.highlighted { "achievement highlighted" } else { "achievement" },
                            "{item.text}"
                        }
                    }
                    li { class: "achievement",
                        "Designed viral T-shirt slogans:"
                        ul { class: "slogan-list",
                            for slogan in SLOGANS {
                                li { "{slogan}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
