//! Per-card expand/collapse.
//!
//! Activating a card's title flips that card, and only that card, between
//! collapsed and expanded. Several cards may be expanded at once.
//!
//! Expanding pins the detail region to its natural content height, measured by
//! the host at that moment, so the stylesheet can animate towards it.
//! Collapsing drops the explicit height again.

use super::router::{Capability, Delegate, Interaction};
use super::{CardHandle, CardSlot, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionState {
    #[default]
    Collapsed,
    Expanded,
}

/// Host-side measurement of rendered content.
pub trait LayoutProbe {
    /// Intrinsic height of the card's detail region, including content that is
    /// currently clipped.
    fn natural_height(&self, card: &CardSlot) -> f64;
}

#[derive(Debug, Default)]
pub struct AccordionController;

impl AccordionController {
    pub fn new() -> Self {
        Self
    }

    /// Flips one card and returns its new state.
    pub fn toggle(&self, slot: &mut CardSlot, layout: &dyn LayoutProbe) -> AccordionState {
        match slot.accordion {
            AccordionState::Collapsed => {
                let height = layout.natural_height(slot);
                slot.accordion = AccordionState::Expanded;
                slot.detail_height = Some(height);
            }
            AccordionState::Expanded => {
                slot.accordion = AccordionState::Collapsed;
                slot.detail_height = None;
            }
        }
        tracing::trace!(card = ?slot.handle, state = ?slot.accordion, "accordion toggled");
        slot.accordion
    }
}

impl Delegate for AccordionController {
    fn capability(&self) -> Capability {
        Capability::AccordionTitle
    }

    fn dispatch(
        &mut self,
        card: CardHandle,
        surface: &mut Surface,
        layout: &dyn LayoutProbe,
    ) -> Option<Interaction> {
        let slot = surface.card_mut(card)?;
        let state = self.toggle(slot, layout);
        Some(Interaction::Toggled { card, state })
    }
}
