//! Navigation Bar Component
//!
//! Fixed translucent bar: name on the left, fragment links in the middle,
//! language badge, hire link and theme toggle on the right.

use dioxus::prelude::*;
use portfolio_core::content::{HIRE_URL, NAV_LINKS, PROFILE};
use portfolio_ui::{ButtonVariant, IconButton, LinkButton};

use crate::context::use_theme;

#[component]
pub fn NavBar() -> Element {
    let mut theme = use_theme();
    let preference = theme.read().preference();

    rsx! {
        nav { class: "nav-bar",
            div { class: "nav-inner",
                a { class: "nav-brand", href: "#home", "{PROFILE.name}" }

                div { class: "nav-links",
                    for link in NAV_LINKS {
                        a { class: "nav-link", href: "{link.href()}", "{link.label}" }
                    }
                }

                div { class: "nav-actions",
                    span { class: "language-badge", "{PROFILE.languages}" }
                    LinkButton {
                        href: HIRE_URL.to_string(),
                        variant: ButtonVariant::Accent,
                        external: true,
                        class: "btn-small".to_string(),
                        "Fiverr Profile"
                    }
                    IconButton {
                        aria_label: "Toggle dark mode".to_string(),
                        onclick: move |_| {
                            theme.write().toggle();
                        },
                        "{preference.toggle_icon()}"
                    }
                }
            }
        }
    }
}
