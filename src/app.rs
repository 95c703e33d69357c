use dioxus::prelude::*;
use portfolio_core::content::SECTION_IDS;
use portfolio_core::{ContactForm, HoverTracker, RevealRegistry, ThemeController};

use crate::context::Collaborators;
use crate::pages::Home;
use crate::theme::{palette_css, GLOBAL_STYLES};

/// Application routes.
///
/// - `/` - The portfolio page; sections are reached by fragment anchors
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
}

/// Root application component.
///
/// Owns the page view state, provides it to children, and applies the
/// theme class to the page root.
#[component]
pub fn App() -> Element {
    // Initializers run once, at mount.
    let palette: Signal<String> = use_signal(palette_css);
    let theme: Signal<ThemeController> = use_signal(ThemeController::new);
    let form: Signal<ContactForm> =
        use_signal(|| ContactForm::with_reset_delay(crate::get_site_config().reset_delay));
    let reveal: Signal<RevealRegistry> = use_signal(|| {
        let mut registry = RevealRegistry::new();
        for id in SECTION_IDS {
            registry.register(*id);
        }
        registry
    });
    let hover: Signal<HoverTracker> = use_signal(HoverTracker::new);

    // Provide page state to all child components
    use_context_provider(|| theme);
    use_context_provider(|| form);
    use_context_provider(|| reveal);
    use_context_provider(|| hover);
    use_context_provider(|| Collaborators::from_config(&crate::get_site_config()));

    let root_class = theme.read().root_classes("page");

    rsx! {
        style { "{palette}" {GLOBAL_STYLES} }
        div { class: "{root_class}",
            Router::<Route> {}
        }
    }
}
