//! One-shot reveal of cards as they scroll into view.
//!
//! Each card handle is watched from a fresh `Pending` state. The first
//! qualifying intersection marks the card visible and unsubscribes it; any
//! later notification for that handle, including ones the host had already
//! queued before the unsubscription landed, is a no-op.

use super::{CardHandle, Surface};
use std::collections::HashMap;

/// The host's viewport-intersection mechanism.
pub trait IntersectionHost {
    fn observe(&mut self, card: CardHandle, threshold: f64);
    fn unobserve(&mut self, card: CardHandle);
}

/// One notification from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub card: CardHandle,
    pub is_intersecting: bool,
    /// Visible fraction of the card, 0.0 to 1.0.
    pub ratio: f64,
}

impl IntersectionEntry {
    pub fn visible(card: CardHandle, ratio: f64) -> Self {
        Self {
            card,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reveal {
    Pending,
    Seen,
}

#[derive(Debug)]
pub struct VisibilityAnimator {
    threshold: f64,
    watched: HashMap<CardHandle, Reveal>,
}

impl VisibilityAnimator {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            watched: HashMap::new(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Starts watching freshly rendered cards. Bookkeeping for cards of
    /// earlier renders is discarded along with those cards.
    pub fn observe<H: IntersectionHost + ?Sized>(&mut self, cards: &[CardHandle], host: &mut H) {
        if let Some(generation) = cards.iter().map(|c| c.generation()).max() {
            self.retire_before(generation);
        }
        for card in cards {
            self.watched.insert(*card, Reveal::Pending);
            host.observe(*card, self.threshold);
        }
    }

    /// Forgets every card rendered before `generation`.
    pub fn retire_before(&mut self, generation: u64) {
        self.watched.retain(|card, _| card.generation() >= generation);
    }

    /// Feeds host notifications through. Returns the cards revealed by this call.
    pub fn on_intersections<H: IntersectionHost + ?Sized>(
        &mut self,
        entries: &[IntersectionEntry],
        surface: &mut Surface,
        host: &mut H,
    ) -> Vec<CardHandle> {
        let threshold = self.threshold;
        entries
            .iter()
            .filter(|entry| entry.is_intersecting && entry.ratio >= threshold)
            .filter_map(|entry| self.mark_seen(entry.card, surface, host).then_some(entry.card))
            .collect()
    }

    /// Marks a card visible and stops observing it. Returns `false` if the card
    /// was already seen or is not being watched.
    pub fn mark_seen<H: IntersectionHost + ?Sized>(
        &mut self,
        card: CardHandle,
        surface: &mut Surface,
        host: &mut H,
    ) -> bool {
        match self.watched.get_mut(&card) {
            Some(state) if *state == Reveal::Pending => *state = Reveal::Seen,
            _ => return false,
        }
        host.unobserve(card);
        if let Some(slot) = surface.card_mut(card) {
            slot.visible = true;
        }
        tracing::trace!(card = ?card, "card revealed");
        true
    }

    pub fn is_pending(&self, card: CardHandle) -> bool {
        self.watched.get(&card) == Some(&Reveal::Pending)
    }

    pub fn pending_count(&self) -> usize {
        self.watched
            .values()
            .filter(|state| **state == Reveal::Pending)
            .count()
    }
}
