//! Input Field Components
//!
//! Text inputs and textareas for the contact form.
//! Features:
//! - Rounded, 2px border that turns accent on focus
//! - Placeholder-only, no visible label
//! - Invalid state with a danger border and `aria-invalid`

use dioxus::prelude::*;

fn field_class(base: &str, invalid: bool) -> String {
    if invalid {
        format!("{} invalid", base)
    } else {
        base.to_string()
    }
}

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// `name` attribute; also used to derive the element id
    pub name: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    /// Highlight the field as failing validation
    #[props(default = false)]
    pub invalid: bool,
}

/// Single-line contact form input
///
/// # Example
///
/// ```rust,ignore
/// let mut email = use_signal(String::new);
///
/// rsx! {
///     Input {
///         name: "email".to_string(),
///         input_type: "email".to_string(),
///         value: email(),
///         oninput: move |s| email.set(s),
///         placeholder: "Your Email".to_string(),
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let class = field_class("input-field", props.invalid);

    rsx! {
        div { class: "form-field",
            input {
                id: "contact-{props.name}",
                name: "{props.name}",
                class: "{class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                "aria-invalid": "{props.invalid}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    pub name: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Number of visible rows
    #[props(default = 4)]
    pub rows: u32,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub invalid: bool,
}

/// Multi-line contact form input, not resizable
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = field_class("input-field textarea", props.invalid);

    rsx! {
        div { class: "form-field",
            textarea {
                id: "contact-{props.name}",
                name: "{props.name}",
                class: "{class}",
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                "aria-invalid": "{props.invalid}",
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_fields_get_marker_class() {
        assert_eq!(field_class("input-field", false), "input-field");
        assert_eq!(field_class("input-field", true), "input-field invalid");
    }
}
