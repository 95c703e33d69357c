//! UI Components for the portfolio page.
//!
//! Page chrome plus one component per section.

mod footer;
mod nav_bar;
mod section_reveal;
pub mod sections;

pub use footer::Footer;
pub use nav_bar::NavBar;
pub use section_reveal::{SectionReveal, SectionTitle};
