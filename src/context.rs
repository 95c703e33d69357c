//! Page state context for the portfolio.
//!
//! The page component owns the view state and provides it to every
//! section via use_context:
//!
//! - theme preference
//! - contact form
//! - reveal latches
//! - hover target
//! - external collaborators (message delivery, resume source)
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let mut theme = use_theme();
//! theme.write().toggle();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use portfolio_core::{
    ContactForm, FileResume, HoverTracker, MessageDelivery, RevealRegistry, SiteConfig,
    ThemeController,
};

/// Shared delivery collaborator type for context.
pub type SharedDelivery = Arc<dyn MessageDelivery + Send + Sync>;

/// External collaborators, built once from the site configuration.
#[derive(Clone)]
pub struct Collaborators {
    pub delivery: SharedDelivery,
    pub resume: Option<FileResume>,
}

impl Collaborators {
    /// Build from configuration, falling back to log-only delivery if the
    /// outbox cannot be opened.
    pub fn from_config(config: &SiteConfig) -> Self {
        let delivery = config.delivery().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to open outbox, submissions will only be logged");
            Arc::new(portfolio_core::LogDelivery)
        });

        Self {
            delivery,
            resume: config.resume_source(),
        }
    }
}

/// Hook to access the theme controller.
pub fn use_theme() -> Signal<ThemeController> {
    use_context::<Signal<ThemeController>>()
}

/// Hook to access the contact form state.
pub fn use_contact_form() -> Signal<ContactForm> {
    use_context::<Signal<ContactForm>>()
}

/// Hook to access the reveal latches.
///
/// Reading the registry subscribes the caller to every latch, so read it
/// only where the revealed state is rendered.
pub fn use_reveal() -> Signal<RevealRegistry> {
    use_context::<Signal<RevealRegistry>>()
}

/// Hook to access the hovered card.
pub fn use_hover() -> Signal<HoverTracker> {
    use_context::<Signal<HoverTracker>>()
}

/// Hook to access the external collaborators.
pub fn use_collaborators() -> Collaborators {
    use_context::<Collaborators>()
}
