//! The single card under the pointer.

/// Tracks at most one hovered card, used to show its caption overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HoverTracker {
    active: Option<String>,
}

impl HoverTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Make `id` the hover target, replacing any previous one.
    pub fn set_hover(&mut self, id: impl Into<String>) {
        self.active = Some(id.into());
    }

    pub fn clear_hover(&mut self) {
        self.active = None;
    }

    /// Pointer left `id`. Only clears if `id` is still the target, so a
    /// late leave from the previous card does not hide the current caption.
    pub fn leave(&mut self, id: &str) {
        if self.is_active(id) {
            self.active = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_previous() {
        let mut hover = HoverTracker::new();
        hover.set_hover("Figma");
        hover.set_hover("Canva");

        assert_eq!(hover.active(), Some("Canva"));
        assert!(!hover.is_active("Figma"));
    }

    #[test]
    fn clear_removes_target() {
        let mut hover = HoverTracker::new();
        hover.set_hover("Figma");
        hover.clear_hover();
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn stale_leave_is_ignored() {
        let mut hover = HoverTracker::new();
        hover.set_hover("Figma");
        hover.set_hover("Blender");
        hover.leave("Figma");
        assert_eq!(hover.active(), Some("Blender"));

        hover.leave("Blender");
        assert_eq!(hover.active(), None);
    }
}
