//! Timing tests for the contact form acknowledgement reset.
//!
//! Runs on tokio's paused clock, so the 5 second delay is simulated.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use portfolio_core::{
    ContactForm, ContactMessage, FormField, FormIssue, LogDelivery, MessageDelivery,
    PortfolioError, PortfolioResult, ResetTicket, ValidationError,
};
use tokio::task::JoinHandle;

fn filled_form() -> Arc<Mutex<ContactForm>> {
    let mut form = ContactForm::default();
    form.update_field(FormField::Name, "x");
    form.update_field(FormField::Email, "a@b.com");
    form.update_field(FormField::Message, "hi");
    Arc::new(Mutex::new(form))
}

fn refill(form: &Mutex<ContactForm>) {
    let mut form = form.lock();
    form.update_field(FormField::Name, "y");
    form.update_field(FormField::Email, "c@d.com");
    form.update_field(FormField::Message, "again");
}

struct Offline;

impl MessageDelivery for Offline {
    fn deliver(&self, _message: &ContactMessage) -> PortfolioResult<()> {
        Err(PortfolioError::Delivery("mailer offline".to_string()))
    }
}

/// Wait out the ticket and expire it, the way the page does.
fn schedule_reset(form: Arc<Mutex<ContactForm>>, ticket: ResetTicket) -> JoinHandle<bool> {
    tokio::spawn(async move {
        let ticket = ticket.elapsed().await;
        form.lock().expire(ticket)
    })
}

#[tokio::test(start_paused = true)]
async fn submitted_resets_after_five_seconds() {
    let form = filled_form();
    let ticket = form.lock().submit(&LogDelivery).unwrap();
    let reset = schedule_reset(form.clone(), ticket);

    tokio::time::advance(Duration::from_millis(4_900)).await;
    assert!(form.lock().submitted());

    assert!(reset.await.unwrap());
    assert!(!form.lock().submitted());
}

#[tokio::test(start_paused = true)]
async fn edit_after_one_second_clears_immediately_and_timer_is_inert() {
    let form = filled_form();
    let ticket = form.lock().submit(&LogDelivery).unwrap();
    let reset = schedule_reset(form.clone(), ticket);

    tokio::time::advance(Duration::from_secs(1)).await;
    form.lock().update_field(FormField::Name, "z");
    assert!(!form.lock().submitted());

    // The old timer still runs to completion but changes nothing.
    assert!(!reset.await.unwrap());
    assert!(!form.lock().submitted());
    assert_eq!(form.lock().value(FormField::Name), "z");
}

#[tokio::test(start_paused = true)]
async fn stale_timer_does_not_clear_newer_submission() {
    let form = filled_form();
    let first = form.lock().submit(&LogDelivery).unwrap();
    let first_reset = schedule_reset(form.clone(), first);

    tokio::time::advance(Duration::from_secs(2)).await;
    refill(&form);
    let second = form.lock().submit(&LogDelivery).unwrap();
    let second_reset = schedule_reset(form.clone(), second);

    // First deadline (t=5s) passes while the second submission is showing.
    assert!(!first_reset.await.unwrap());
    assert!(form.lock().submitted());

    // Second deadline (t=7s) clears it.
    assert!(second_reset.await.unwrap());
    assert!(!form.lock().submitted());
}

#[tokio::test(start_paused = true)]
async fn custom_delay_is_honored() {
    let mut form = ContactForm::with_reset_delay(Duration::from_secs(1));
    form.update_field(FormField::Name, "x");
    form.update_field(FormField::Email, "a@b.com");
    form.update_field(FormField::Message, "hi");
    let form = Arc::new(Mutex::new(form));

    let start = tokio::time::Instant::now();
    let ticket = form.lock().submit(&LogDelivery).unwrap();
    assert!(schedule_reset(form.clone(), ticket).await.unwrap());
    assert!(start.elapsed() >= Duration::from_secs(1));
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[tokio::test(start_paused = true)]
async fn aborted_timer_leaves_submitted_set() {
    let form = filled_form();
    let ticket = form.lock().submit(&LogDelivery).unwrap();
    let reset = schedule_reset(form.clone(), ticket);

    // Unmount drops the task before it fires.
    reset.abort();
    tokio::time::advance(Duration::from_secs(10)).await;

    assert!(reset.await.unwrap_err().is_cancelled());
    assert!(form.lock().submitted());
}

#[tokio::test(start_paused = true)]
async fn rejected_resubmit_keeps_pending_reset() {
    let form = filled_form();
    let ticket = form.lock().submit(&LogDelivery).unwrap();
    let reset = schedule_reset(form.clone(), ticket);

    // Send again on the cleared form while the acknowledgement is showing.
    tokio::time::advance(Duration::from_secs(1)).await;
    assert!(form.lock().submit(&LogDelivery).is_err());
    assert!(form.lock().submitted());
    assert_eq!(
        form.lock().issue(),
        Some(&FormIssue::Invalid(ValidationError::EmptyName))
    );

    // The original reset is still in charge and clears it on time.
    assert!(reset.await.unwrap());
    assert!(!form.lock().submitted());
}

#[tokio::test(start_paused = true)]
async fn undelivered_resubmit_keeps_entered_values() {
    let form = filled_form();
    let ticket = form.lock().submit(&LogDelivery).unwrap();
    let reset = schedule_reset(form.clone(), ticket);

    tokio::time::advance(Duration::from_secs(2)).await;
    refill(&form);
    assert!(form.lock().submit(&Offline).is_err());
    assert!(matches!(
        form.lock().issue(),
        Some(FormIssue::Undelivered(_))
    ));

    // The earlier reset fires but leaves the unsent values alone.
    assert!(!reset.await.unwrap());
    assert!(!form.lock().submitted());
    assert_eq!(form.lock().value(FormField::Name), "y");
    assert_eq!(form.lock().value(FormField::Message), "again");
}
