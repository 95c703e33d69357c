//! Contact form state.
//!
//! Field edits, submit-time validation, and the transient `submitted`
//! acknowledgement. A successful submit hands back a [`ResetTicket`]; once
//! its delay has elapsed the caller passes it to [`ContactForm::expire`].
//! Any edit or newer submission bumps the form's generation, so an old
//! ticket can never clear a newer acknowledgement.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::time::Instant;

use crate::delivery::MessageDelivery;
use crate::error::{PortfolioResult, ValidationError};

/// How long the "message sent" acknowledgement stays up.
pub const SUBMITTED_RESET_DELAY: Duration = Duration::from_secs(5);

/// One of the three contact form inputs
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    /// The `name` attribute of the input element
    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Your Email",
            FormField::Message => "Your Message",
        }
    }

    /// Which field a validation failure points at
    pub fn for_error(error: ValidationError) -> Self {
        match error {
            ValidationError::EmptyName => FormField::Name,
            ValidationError::InvalidEmail => FormField::Email,
            ValidationError::EmptyMessage => FormField::Message,
        }
    }
}

/// The values a visitor typed into the form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    /// Check the submit-time rules in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ValidationError::EmptyMessage);
        }
        Ok(())
    }
}

/// Handle for one successful submission's acknowledgement reset.
///
/// The deadline is fixed when the submission succeeds, not when the
/// caller starts waiting on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTicket {
    generation: u64,
    deadline: Instant,
}

impl ResetTicket {
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Sleep until the deadline, then hand the ticket back.
    pub async fn elapsed(self) -> Self {
        tokio::time::sleep_until(self.deadline).await;
        self
    }
}

/// Problem shown under the form after a failed submit
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormIssue {
    #[error("{0}")]
    Invalid(ValidationError),

    #[error("Message could not be sent: {0}")]
    Undelivered(String),
}

/// Contact form state owned by the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    submitted: bool,
    issue: Option<FormIssue>,
    generation: u64,
    reset_delay: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::with_reset_delay(SUBMITTED_RESET_DELAY)
    }
}

impl ContactForm {
    pub fn with_reset_delay(reset_delay: Duration) -> Self {
        Self {
            fields: ContactMessage::default(),
            submitted: false,
            issue: None,
            generation: 0,
            reset_delay,
        }
    }

    pub fn fields(&self) -> &ContactMessage {
        &self.fields
    }

    pub fn value(&self, field: FormField) -> &str {
        self.fields.get(field)
    }

    pub fn submitted(&self) -> bool {
        self.submitted
    }

    pub fn issue(&self) -> Option<&FormIssue> {
        self.issue.as_ref()
    }

    /// Set one field. Clears the acknowledgement and any reported problem,
    /// and invalidates any outstanding reset ticket.
    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.get_mut(field) = value.into();
        self.submitted = false;
        self.issue = None;
        self.generation += 1;
    }

    /// Validate and deliver the current values.
    ///
    /// On failure the entered values stay as they are and the problem is
    /// recorded in [`issue`](Self::issue). On success the fields are
    /// cleared, `submitted` is set, and the returned ticket resets it.
    pub fn submit<D>(&mut self, delivery: &D) -> PortfolioResult<ResetTicket>
    where
        D: MessageDelivery + ?Sized,
    {
        if let Err(e) = self.fields.validate() {
            tracing::debug!(error = %e, "Contact form rejected");
            self.issue = Some(FormIssue::Invalid(e));
            return Err(e.into());
        }

        if let Err(e) = delivery.deliver(&self.fields) {
            tracing::warn!(error = %e, "Contact form delivery failed");
            self.issue = Some(FormIssue::Undelivered(e.to_string()));
            return Err(e);
        }

        tracing::info!(
            name = %self.fields.name,
            email = %self.fields.email,
            "Contact form submitted"
        );

        self.fields = ContactMessage::default();
        self.submitted = true;
        self.issue = None;
        self.generation += 1;

        Ok(ResetTicket {
            generation: self.generation,
            deadline: Instant::now() + self.reset_delay,
        })
    }

    /// Clear `submitted` if `ticket` still belongs to the latest submission.
    ///
    /// Returns whether anything changed.
    pub fn expire(&mut self, ticket: ResetTicket) -> bool {
        if ticket.generation != self.generation || !self.submitted {
            return false;
        }
        self.submitted = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::LogDelivery;
    use crate::error::PortfolioError;

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::default();
        form.update_field(FormField::Name, name);
        form.update_field(FormField::Email, email);
        form.update_field(FormField::Message, message);
        form
    }

    struct Refusing;

    impl MessageDelivery for Refusing {
        fn deliver(&self, _message: &ContactMessage) -> PortfolioResult<()> {
            Err(PortfolioError::Delivery("mailer offline".to_string()))
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        let mut form = filled("", "a@b.com", "hi");
        let err = form.submit(&LogDelivery).unwrap_err();

        assert!(matches!(
            err,
            PortfolioError::Validation(ValidationError::EmptyName)
        ));
        assert!(!form.submitted());
        assert_eq!(form.value(FormField::Email), "a@b.com");
        assert_eq!(form.value(FormField::Message), "hi");
    }

    #[test]
    fn whitespace_name_is_rejected() {
        let mut form = filled("   ", "a@b.com", "hi");
        assert!(form.submit(&LogDelivery).is_err());
        assert_eq!(
            form.issue(),
            Some(&FormIssue::Invalid(ValidationError::EmptyName))
        );
    }

    #[test]
    fn email_without_at_is_rejected() {
        let mut form = filled("x", "no-at-sign", "hi");
        let err = form.submit(&LogDelivery).unwrap_err();

        assert!(matches!(
            err,
            PortfolioError::Validation(ValidationError::InvalidEmail)
        ));
        assert_eq!(form.value(FormField::Email), "no-at-sign");
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut form = filled("x", "a@b.com", "\n\t ");
        let err = form.submit(&LogDelivery).unwrap_err();
        assert!(matches!(
            err,
            PortfolioError::Validation(ValidationError::EmptyMessage)
        ));
    }

    #[test]
    fn valid_submit_clears_fields_and_sets_submitted() {
        let mut form = filled("x", "a@b.com", "hi");
        let before = Instant::now();
        let ticket = form.submit(&LogDelivery).unwrap();

        assert!(form.submitted());
        assert_eq!(form.fields(), &ContactMessage::default());
        assert_eq!(form.issue(), None);
        assert!(ticket.deadline() >= before + SUBMITTED_RESET_DELAY);
    }

    #[test]
    fn expire_resets_submitted_once() {
        let mut form = filled("x", "a@b.com", "hi");
        let ticket = form.submit(&LogDelivery).unwrap();

        assert!(form.expire(ticket));
        assert!(!form.submitted());
        assert!(!form.expire(ticket));
    }

    #[test]
    fn edit_invalidates_ticket() {
        let mut form = filled("x", "a@b.com", "hi");
        let ticket = form.submit(&LogDelivery).unwrap();

        form.update_field(FormField::Name, "y");
        assert!(!form.submitted());
        assert!(!form.expire(ticket));
    }

    #[test]
    fn newer_submission_supersedes_older_ticket() {
        let mut form = filled("x", "a@b.com", "hi");
        let first = form.submit(&LogDelivery).unwrap();

        form.update_field(FormField::Name, "y");
        form.update_field(FormField::Email, "c@d.com");
        form.update_field(FormField::Message, "again");
        let second = form.submit(&LogDelivery).unwrap();

        assert!(!form.expire(first));
        assert!(form.submitted());
        assert!(form.expire(second));
    }

    #[test]
    fn delivery_failure_keeps_fields() {
        let mut form = filled("x", "a@b.com", "hi");
        let err = form.submit(&Refusing).unwrap_err();

        assert!(matches!(err, PortfolioError::Delivery(_)));
        assert!(!form.submitted());
        assert_eq!(form.fields(), &ContactMessage::new("x", "a@b.com", "hi"));
        assert!(matches!(form.issue(), Some(FormIssue::Undelivered(_))));
    }

    #[test]
    fn edit_clears_issue() {
        let mut form = filled("", "a@b.com", "hi");
        let _ = form.submit(&LogDelivery);
        assert!(form.issue().is_some());

        form.update_field(FormField::Name, "x");
        assert_eq!(form.issue(), None);
    }

    #[test]
    fn field_for_error() {
        assert_eq!(FormField::for_error(ValidationError::EmptyName), FormField::Name);
        assert_eq!(FormField::for_error(ValidationError::InvalidEmail), FormField::Email);
        assert_eq!(FormField::for_error(ValidationError::EmptyMessage), FormField::Message);
    }
}
