//! The terminal as viewport and layout engine.
//!
//! Everything the CLI prints is on screen at once, so every observed card is
//! reported fully in view. Detail regions are measured in printed lines.

use super::render::detail_lines;
use std::collections::BTreeSet;
use vitrine::ui::{CardHandle, CardSlot, IntersectionEntry, IntersectionHost, LayoutProbe};

#[derive(Debug, Default)]
pub struct TerminalHost {
    watching: BTreeSet<CardHandle>,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// One full-visibility notification per observed card, in display order.
    pub fn in_view(&self) -> Vec<IntersectionEntry> {
        self.watching
            .iter()
            .map(|card| IntersectionEntry::visible(*card, 1.0))
            .collect()
    }
}

impl IntersectionHost for TerminalHost {
    fn observe(&mut self, card: CardHandle, threshold: f64) {
        // Cards of an older render are gone from the screen.
        self.watching
            .retain(|watched| watched.generation() >= card.generation());
        tracing::trace!(card = ?card, threshold, "observing card");
        self.watching.insert(card);
    }

    fn unobserve(&mut self, card: CardHandle) {
        self.watching.remove(&card);
    }
}

impl LayoutProbe for TerminalHost {
    fn natural_height(&self, card: &CardSlot) -> f64 {
        detail_lines(&card.fragment.item).len() as f64
    }
}
