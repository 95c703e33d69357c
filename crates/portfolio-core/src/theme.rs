//! Light/dark theme preference.
//!
//! The preference lives for the session only. It is applied by adding the
//! `dark` class to the page root, which switches the CSS custom properties.

/// Display mode chosen by the visitor
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The opposite preference
    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Class to put on the page root, if any
    pub fn root_class(self) -> Option<&'static str> {
        match self {
            ThemePreference::Light => None,
            ThemePreference::Dark => Some("dark"),
        }
    }

    /// Icon for the toggle button: shows the mode you would switch to
    pub fn toggle_icon(self) -> &'static str {
        match self {
            ThemePreference::Light => "\u{1F319}",
            ThemePreference::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

/// Holds the current [`ThemePreference`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ThemeController {
    preference: ThemePreference,
}

impl ThemeController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Flip between light and dark, returning the new preference.
    pub fn toggle(&mut self) -> ThemePreference {
        self.preference = self.preference.toggled();
        tracing::debug!(theme = ?self.preference, "Theme toggled");
        self.preference
    }

    /// Class list for the page root element.
    pub fn root_classes(&self, base: &str) -> String {
        match self.preference.root_class() {
            Some(class) => format!("{} {}", base, class),
            None => base.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_light() {
        let theme = ThemeController::new();
        assert_eq!(theme.preference(), ThemePreference::Light);
        assert_eq!(theme.root_classes("page"), "page");
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut theme = ThemeController::new();
        let original = theme.preference();

        assert_eq!(theme.toggle(), ThemePreference::Dark);
        assert_eq!(theme.root_classes("page"), "page dark");
        assert_eq!(theme.toggle(), original);
    }

    #[test]
    fn toggle_icon_points_at_other_mode() {
        assert_eq!(ThemePreference::Light.toggle_icon(), "\u{1F319}");
        assert_eq!(ThemePreference::Dark.toggle_icon(), "\u{2600}\u{FE0F}");
    }
}
