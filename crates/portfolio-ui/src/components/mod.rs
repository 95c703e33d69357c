//! Reusable UI components
//!
//! Rounded pill buttons, bordered inputs with an accent focus ring, and
//! the reveal wrapper that plays a section's entrance once.

mod button;
mod input;
mod reveal;

pub use button::*;
pub use input::*;
pub use reveal::*;
