//! Reveal wrappers bound to the page's reveal latches.

use dioxus::prelude::*;
use portfolio_core::{EntryPose, RevealRegistry};
use portfolio_ui::{Reveal, SectionHeading};

use crate::context::use_reveal;

/// Subscribe to one latch only, so flipping another section's latch does
/// not re-render this one.
fn use_latch(reveal: Signal<RevealRegistry>, latch: String) -> Memo<bool> {
    use_memo(move || reveal.read().is_revealed(&latch))
}

/// [`Reveal`] whose state lives in the page's reveal registry under `latch`
/// (e.g. `"about"` or `"tools.3"`).
#[component]
pub fn SectionReveal(
    latch: String,
    #[props(default)] pose: EntryPose,
    #[props(default = 0)] delay_ms: u32,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let mut reveal = use_reveal();
    let revealed = use_latch(reveal, latch.clone());

    rsx! {
        Reveal {
            revealed: revealed(),
            pose,
            delay_ms,
            class,
            onreveal: move |_| {
                reveal.write().observe(&latch, true);
            },
            {children}
        }
    }
}

/// Section heading latched under `"<section>.title"`.
#[component]
pub fn SectionTitle(section: String, title: String) -> Element {
    let mut reveal = use_reveal();
    let latch = format!("{}.title", section);
    let revealed = use_latch(reveal, latch.clone());

    rsx! {
        SectionHeading {
            title,
            revealed: revealed(),
            onreveal: move |_| {
                reveal.write().observe(&latch, true);
            },
        }
    }
}
