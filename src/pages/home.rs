//! The portfolio page.
//!
//! One long page; the nav bar jumps between sections by fragment anchor.

use dioxus::prelude::*;

use crate::components::sections::{
    AboutSection, AchievementsSection, ContactSection, ExperienceSection, HeroSection,
    ProcessSection, ProjectsSection, SkillsSection, TestimonialsSection, ToolsSection,
};
use crate::components::{Footer, NavBar};

#[component]
pub fn Home() -> Element {
    rsx! {
        NavBar {}
        HeroSection {}

        main { class: "page-sections",
            AboutSection {}
            ExperienceSection {}
            SkillsSection {}
            ToolsSection {}
            ProcessSection {}
            AchievementsSection {}
            ProjectsSection {}
            TestimonialsSection {}
            ContactSection {}
        }

        Footer {}
    }
}
