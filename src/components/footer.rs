use dioxus::prelude::*;
use portfolio_core::content::{PROFILE, SOCIAL_LINKS};

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "footer-inner",
                p { class: "footer-title", "Thanks for Visiting!" }
                p { class: "footer-quote", "{PROFILE.footer_quote}" }
                div { class: "footer-links",
                    for link in SOCIAL_LINKS {
                        if link.external {
                            a {
                                class: "footer-link",
                                href: "{link.href}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label}"
                            }
                        } else {
                            a { class: "footer-link", href: "{link.href}", "{link.label}" }
                        }
                    }
                }
                p { class: "footer-copyright", "{PROFILE.copyright}" }
            }
        }
    }
}
