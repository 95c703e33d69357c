//! Portfolio UI Components
//!
//! Small Dioxus building blocks shared by the page sections. All colors
//! come from CSS custom properties on the page root, so every component
//! follows the light/dark theme without taking it as a prop.
//!
//! - **Accent (#B6EDE5)**: calls to action, highlights, focus rings
//! - **Primary (#1A1A1A)**: headings and solid buttons

pub mod components;

pub use components::*;
