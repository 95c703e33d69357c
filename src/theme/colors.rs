//! Color palette.
//!
//! Source of the palette CSS custom properties. Light values live on
//! `.page`, dark overrides on `.page.dark`.

// === BRAND ===
pub const PRIMARY: &str = "#1A1A1A";
pub const ACCENT: &str = "#B6EDE5";
pub const TEAL: &str = "#2dd4bf";

// === LIGHT SURFACES ===
pub const LIGHT_BG: &str = "#ffffff";
pub const LIGHT_SURFACE: &str = "rgba(255, 255, 255, 0.5)";
pub const LIGHT_BORDER: &str = "rgba(229, 231, 235, 0.5)";
pub const LIGHT_TEXT_BODY: &str = "#374151";

// === DARK SURFACES ===
pub const DARK_BG: &str = "#111827";
pub const DARK_SURFACE: &str = "rgba(31, 41, 55, 0.5)";
pub const DARK_BORDER: &str = "rgba(55, 65, 81, 0.5)";
pub const DARK_TEXT_BODY: &str = "#d1d5db";

// === SEMANTIC ===
pub const SUCCESS: &str = "#16a34a";
pub const DANGER: &str = "#dc2626";

/// Palette variables for both themes, prepended to the global stylesheet.
pub fn palette_css() -> String {
    format!(
        r#"
.page {{
  --primary: {PRIMARY};
  --accent: {ACCENT};
  --teal: {TEAL};
  --bg: {LIGHT_BG};
  --surface: {LIGHT_SURFACE};
  --border: {LIGHT_BORDER};
  --text-body: {LIGHT_TEXT_BODY};
  --success: {SUCCESS};
  --danger: {DANGER};
}}

.page.dark {{
  --bg: {DARK_BG};
  --surface: {DARK_SURFACE};
  --border: {DARK_BORDER};
  --text-body: {DARK_TEXT_BODY};
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_defines_light_and_dark_values() {
        let css = palette_css();
        assert!(css.contains("--primary: #1A1A1A;"));
        assert!(css.contains("--accent: #B6EDE5;"));
        assert!(css.contains("--danger: #dc2626;"));

        let dark = &css[css.find(".page.dark").unwrap()..];
        assert!(dark.contains("--bg: #111827;"));
        assert!(dark.contains("--text-body: #d1d5db;"));
        assert!(!dark.contains("--primary"));
    }

    #[test]
    fn stylesheet_uses_palette_variables_only() {
        let css = super::super::GLOBAL_STYLES;
        for var in ["--primary:", "--accent:", "--bg:", "--danger:"] {
            assert!(!css.contains(var), "{} redefined in stylesheet", var);
        }
        assert!(css.contains("var(--danger)"));
    }
}
