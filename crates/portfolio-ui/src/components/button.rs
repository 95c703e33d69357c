//! Button Components
//!
//! Pill-shaped buttons and links:
//! - Primary: dark solid call to action
//! - Accent: mint accent fill
//! - Gradient: accent-to-teal fill, used by the contact form submit
//! - Ghost: translucent round button for the theme toggle

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Dark solid button with shadow
    #[default]
    Primary,
    /// Accent background, dark text
    Accent,
    /// Full-width gradient, for form submit
    Gradient,
    /// Translucent, no border
    Ghost,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Accent => "btn-accent",
            ButtonVariant::Gradient => "btn-gradient",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Primary,
///         onclick: move |_| download_resume(),
///         "Download Resume"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Anchor styled like a [`Button`]
#[derive(Clone, PartialEq, Props)]
pub struct LinkButtonProps {
    pub href: String,
    #[props(default)]
    pub variant: ButtonVariant,
    /// Open in a new tab with `noopener noreferrer`
    #[props(default = false)]
    pub external: bool,
    pub children: Element,
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn LinkButton(props: LinkButtonProps) -> Element {
    let full_class = join_classes(props.variant.class(), props.class.as_deref());

    rsx! {
        if props.external {
            a {
                class: "{full_class}",
                href: "{props.href}",
                target: "_blank",
                rel: "noopener noreferrer",
                {props.children}
            }
        } else {
            a { class: "{full_class}", href: "{props.href}", {props.children} }
        }
    }
}

/// Icon button for compact actions (theme toggle)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// The icon content (character or element)
    pub children: Element,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let full_class = join_classes("icon-btn", props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn-primary");
        assert_eq!(ButtonVariant::Accent.class(), "btn-accent");
        assert_eq!(ButtonVariant::Gradient.class(), "btn-gradient");
        assert_eq!(ButtonVariant::Ghost.class(), "btn-ghost");
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }

    #[test]
    fn extra_classes_are_appended() {
        assert_eq!(join_classes("btn-primary", None), "btn-primary");
        assert_eq!(join_classes("btn-primary", Some("")), "btn-primary");
        assert_eq!(join_classes("btn-primary", Some("wide")), "btn-primary wide");
    }
}
