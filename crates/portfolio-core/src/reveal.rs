//! One-shot viewport reveal latches.
//!
//! Every section or card that animates in registers under a stable key
//! (e.g. `"about"`, `"tools.3"`). It starts [`RevealLatch::NotRevealed`] and
//! is drawn in its entry pose. The first intersection with the viewport
//! moves it to [`RevealLatch::Revealed`], which is terminal: scrolling away
//! and back does not replay the animation.

use std::collections::HashMap;

/// Per-section reveal state
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum RevealLatch {
    #[default]
    NotRevealed,
    Revealed,
}

impl RevealLatch {
    pub fn is_revealed(self) -> bool {
        self == RevealLatch::Revealed
    }
}

/// Starting pose before a section is revealed
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum EntryPose {
    /// Offset below, transparent
    #[default]
    Rise,
    /// Offset to the left, transparent
    SlideLeft,
    /// Offset to the right, transparent
    SlideRight,
    /// Scaled down, transparent
    Grow,
    /// Transparent only
    Fade,
}

impl EntryPose {
    /// CSS class carrying the entry transform
    pub fn class(&self) -> &'static str {
        match self {
            EntryPose::Rise => "reveal-rise",
            EntryPose::SlideLeft => "reveal-slide-left",
            EntryPose::SlideRight => "reveal-slide-right",
            EntryPose::Grow => "reveal-grow",
            EntryPose::Fade => "reveal-fade",
        }
    }

    /// Alternate left/right slides, as the process timeline does
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            EntryPose::SlideLeft
        } else {
            EntryPose::SlideRight
        }
    }
}

/// Transition delay for the `index`-th card of a grid.
pub fn stagger_ms(index: usize, step_ms: u32) -> u32 {
    (index as u32).saturating_mul(step_ms)
}

/// Reveal latches for every registered section on the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealRegistry {
    latches: HashMap<String, RevealLatch>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a section. Does nothing if it is already known.
    pub fn register(&mut self, key: impl Into<String>) {
        self.latches.entry(key.into()).or_default();
    }

    /// Current latch; unknown keys read as not revealed.
    pub fn latch(&self, key: &str) -> RevealLatch {
        self.latches.get(key).copied().unwrap_or_default()
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.latch(key).is_revealed()
    }

    /// Feed a viewport intersection signal for `key`.
    ///
    /// Returns `true` only for the one call that flips the latch.
    pub fn observe(&mut self, key: &str, intersecting: bool) -> bool {
        if !intersecting {
            return false;
        }

        let latch = self.latches.entry(key.to_string()).or_default();
        if latch.is_revealed() {
            return false;
        }

        *latch = RevealLatch::Revealed;
        tracing::trace!(section = key, "Section revealed");
        true
    }

    pub fn registered(&self) -> usize {
        self.latches.len()
    }

    pub fn revealed(&self) -> usize {
        self.latches.values().filter(|l| l.is_revealed()).count()
    }
}
