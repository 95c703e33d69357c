//! Portfolio Core Library
//!
//! View state and content for a single-page designer portfolio.
//!
//! ## Overview
//!
//! The page has no backend. Everything interactive reduces to three small
//! state objects that the page component owns and hands down to its
//! children:
//!
//! - [`ThemeController`]: light/dark preference applied as a root class
//! - [`ContactForm`]: field values, validation, and the transient
//!   `submitted` acknowledgement with its 5 second reset
//! - [`RevealRegistry`] and [`HoverTracker`]: one-shot viewport reveal
//!   latches per section, and the single card under the pointer
//!
//! Display content lives in [`content`] as static slices. Submissions and
//! the resume download go through the [`MessageDelivery`] and
//! [`ResumeSource`] collaborators.
//!
//! ## Quick Start
//!
//! ```ignore
//! use portfolio_core::{ContactForm, FormField, LogDelivery};
//!
//! let mut form = ContactForm::default();
//! form.update_field(FormField::Name, "Ayesha");
//! form.update_field(FormField::Email, "ayesha@example.com");
//! form.update_field(FormField::Message, "Need a logo");
//!
//! let ticket = form.submit(&LogDelivery)?;
//! assert!(form.submitted());
//!
//! // Later, once the ticket's delay has elapsed:
//! form.expire(ticket);
//! assert!(!form.submitted());
//! ```

pub mod config;
pub mod content;
pub mod delivery;
pub mod error;
pub mod form;
pub mod hover;
pub mod resume;
pub mod reveal;
pub mod theme;

// Re-exports
pub use config::SiteConfig;
pub use delivery::{JsonlOutbox, LogDelivery, MessageDelivery, OutboxEntry};
pub use error::{PortfolioError, PortfolioResult, ValidationError};
pub use form::{
    ContactForm, ContactMessage, FormField, FormIssue, ResetTicket, SUBMITTED_RESET_DELAY,
};
pub use hover::HoverTracker;
pub use resume::{FileResume, ResumeSource};
pub use reveal::{EntryPose, RevealLatch, RevealRegistry};
pub use theme::{ThemeController, ThemePreference};
