//! Contact Section
//!
//! Hire link plus the contact form. Validation problems are shown inline
//! under the form; a successful send shows an acknowledgement that clears
//! itself after the configured delay unless the visitor edits first.

use dioxus::prelude::*;
use portfolio_core::content::{HIRE_URL, SENT_NOTICE};
use portfolio_core::form::FormIssue;
use portfolio_core::{FormField, ResetTicket};
use portfolio_ui::{Button, ButtonVariant, Input, LinkButton, TextArea};

use crate::components::{SectionReveal, SectionTitle};
use crate::context::{use_collaborators, use_contact_form};

/// Cancel the pending acknowledgement reset, if any.
fn cancel_reset(mut reset_task: Signal<Option<Task>>) {
    if let Some(task) = reset_task.write().take() {
        task.cancel();
    }
}

/// Whether the current issue points at `field`
fn is_invalid(issue: Option<&FormIssue>, field: FormField) -> bool {
    matches!(issue, Some(FormIssue::Invalid(e)) if FormField::for_error(*e) == field)
}

#[component]
pub fn ContactSection() -> Element {
    let mut form = use_contact_form();
    let collaborators = use_collaborators();
    let mut reset_task: Signal<Option<Task>> = use_signal(|| None);

    let mut schedule_reset = move |ticket: ResetTicket| {
        let task = spawn(async move {
            let ticket = ticket.elapsed().await;
            if form.write().expire(ticket) {
                tracing::debug!("Contact acknowledgement cleared");
            }
            reset_task.set(None);
        });
        reset_task.set(Some(task));
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        // A rejected resubmit leaves the pending reset running.
        let result = form.write().submit(&*collaborators.delivery);
        if let Ok(ticket) = result {
            cancel_reset(reset_task);
            schedule_reset(ticket);
        }
    };

    let edit = move |field: FormField| {
        move |value: String| {
            cancel_reset(reset_task);
            form.write().update_field(field, value);
        }
    };

    let state = form.read();
    let issue = state.issue();

    rsx! {
        section { id: "contact", class: "page-section contact-panel",
            SectionTitle { section: "contact".to_string(), title: "Get In Touch".to_string() }

            div { class: "contact-intro",
                p { class: "body-text large",
                    "\u{1F4E7} Get in touch or start your project now. Let's create something amazing together!"
                }
                LinkButton {
                    href: HIRE_URL.to_string(),
                    variant: ButtonVariant::Primary,
                    external: true,
                    "\u{1F680} Hire Me on Fiverr \u{2192}"
                }
            }

            SectionReveal { latch: "contact.form".to_string(),
                form { class: "contact-form", onsubmit: on_submit,
                    Input {
                        name: FormField::Name.key().to_string(),
                        value: state.value(FormField::Name).to_string(),
                        placeholder: FormField::Name.placeholder().to_string(),
                        required: true,
                        invalid: is_invalid(issue, FormField::Name),
                        oninput: edit(FormField::Name),
                    }
                    Input {
                        name: FormField::Email.key().to_string(),
                        input_type: "email".to_string(),
                        value: state.value(FormField::Email).to_string(),
                        placeholder: FormField::Email.placeholder().to_string(),
                        required: true,
                        invalid: is_invalid(issue, FormField::Email),
                        oninput: edit(FormField::Email),
                    }
                    TextArea {
                        name: FormField::Message.key().to_string(),
                        value: state.value(FormField::Message).to_string(),
                        placeholder: FormField::Message.placeholder().to_string(),
                        rows: 4,
                        required: true,
                        invalid: is_invalid(issue, FormField::Message),
                        oninput: edit(FormField::Message),
                    }

                    Button {
                        variant: ButtonVariant::Gradient,
                        button_type: "submit".to_string(),
                        "Send Message"
                    }

                    if let Some(issue) = issue {
                        p { class: "form-issue", role: "alert", "{issue}" }
                    }

                    if state.submitted() {
                        p { class: "form-sent", role: "status", "{SENT_NOTICE}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::ValidationError;

    #[test]
    fn invalid_marker_follows_issue() {
        let issue = FormIssue::Invalid(ValidationError::InvalidEmail);
        assert!(is_invalid(Some(&issue), FormField::Email));
        assert!(!is_invalid(Some(&issue), FormField::Name));
        assert!(!is_invalid(None, FormField::Email));

        let undelivered = FormIssue::Undelivered("offline".to_string());
        assert!(!is_invalid(Some(&undelivered), FormField::Message));
    }
}
