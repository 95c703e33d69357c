//! Scroll-triggered entrance
//!
//! [`Reveal`] draws its children in an entry pose (offset, transparent)
//! until `revealed` is true, then transitions to the final pose. It does
//! not own the latch: it reports the first viewport intersection through
//! `onreveal` and the page decides.

use dioxus::prelude::*;
use portfolio_core::EntryPose;

/// Class list for a reveal wrapper
pub fn reveal_class(pose: EntryPose, revealed: bool, extra: &str) -> String {
    let mut class = format!("reveal {}", pose.class());
    if revealed {
        class.push_str(" revealed");
    }
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

#[derive(Clone, PartialEq, Props)]
pub struct RevealProps {
    /// Whether the section's latch is already set
    pub revealed: bool,
    /// Called on an intersecting visibility event while not yet revealed
    pub onreveal: EventHandler<()>,
    #[props(default)]
    pub pose: EntryPose,
    /// Transition delay, for staggered grids
    #[props(default = 0)]
    pub delay_ms: u32,
    /// Extra classes for the wrapper element
    #[props(default)]
    pub class: String,
    pub children: Element,
}

/// Wrapper that plays its entrance once
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Reveal {
///         revealed: reveal.read().is_revealed("about"),
///         onreveal: move |_| { reveal.write().observe("about", true); },
///         pose: EntryPose::Rise,
///         p { "About me" }
///     }
/// }
/// ```
#[component]
pub fn Reveal(props: RevealProps) -> Element {
    let class = reveal_class(props.pose, props.revealed, &props.class);
    let revealed = props.revealed;

    rsx! {
        div {
            class: "{class}",
            style: "transition-delay: {props.delay_ms}ms;",
            onvisible: move |evt| {
                if revealed {
                    return;
                }
                if let Ok(true) = evt.data().is_intersecting() {
                    props.onreveal.call(());
                }
            },
            {props.children}
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeadingProps {
    pub title: String,
    pub revealed: bool,
    pub onreveal: EventHandler<()>,
}

/// Centered section title that rises into place
#[component]
pub fn SectionHeading(props: SectionHeadingProps) -> Element {
    rsx! {
        Reveal {
            revealed: props.revealed,
            onreveal: props.onreveal,
            pose: EntryPose::Rise,
            h2 { class: "section-title", "{props.title}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_class_tracks_latch() {
        assert_eq!(reveal_class(EntryPose::Rise, false, ""), "reveal reveal-rise");
        assert_eq!(
            reveal_class(EntryPose::Grow, true, "tool-card"),
            "reveal reveal-grow revealed tool-card"
        );
    }
}
