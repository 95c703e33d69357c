//! Page sections, top to bottom.

mod about;
mod achievements;
mod contact;
mod experience;
mod hero;
mod process;
mod projects;
mod skills;
mod testimonials;
mod tools;

pub use about::AboutSection;
pub use achievements::AchievementsSection;
pub use contact::ContactSection;
pub use experience::ExperienceSection;
pub use hero::HeroSection;
pub use process::ProcessSection;
pub use projects::ProjectsSection;
pub use skills::SkillsSection;
pub use testimonials::TestimonialsSection;
pub use tools::ToolsSection;
