//! Delegated event dispatch.
//!
//! The container gets exactly one click handler, registered once. Cards come
//! and go with every render, so instead of wiring each card the router looks
//! at what was clicked, resolves the nearest region that has a capability, and
//! hands the event to whichever [`Delegate`] serves that capability.

use super::accordion::{AccordionState, LayoutProbe};
use super::{CardHandle, Surface};
use std::collections::HashMap;

/// Part of a card (or the container itself) that received a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Cover,
    Badge,
    Title,
    Body,
    Detail,
    ActionButton,
    PlayButton,
    Container,
}

/// Something a region can do when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    AccordionTitle,
    Action,
    Play,
}

impl Region {
    pub fn capability(&self) -> Option<Capability> {
        match self {
            Region::Title => Some(Capability::AccordionTitle),
            Region::ActionButton => Some(Capability::Action),
            Region::PlayButton => Some(Capability::Play),
            Region::Cover | Region::Badge | Region::Body | Region::Detail | Region::Container => {
                None
            }
        }
    }
}

/// A click somewhere inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickEvent {
    /// The card enclosing the target, if any.
    pub card: Option<CardHandle>,
    pub region: Region,
}

impl ClickEvent {
    pub fn on_card(card: CardHandle, region: Region) -> Self {
        Self {
            card: Some(card),
            region,
        }
    }
}

/// Observable effect of a dispatched event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    Toggled {
        card: CardHandle,
        state: AccordionState,
    },
    ActionRequested {
        card: CardHandle,
    },
    PlayRequested {
        card: CardHandle,
    },
}

pub trait Delegate {
    fn capability(&self) -> Capability;

    /// Handle an activation on a live card.
    fn dispatch(
        &mut self,
        card: CardHandle,
        surface: &mut Surface,
        layout: &dyn LayoutProbe,
    ) -> Option<Interaction>;
}

#[derive(Default)]
pub struct EventRouter {
    delegates: HashMap<Capability, Box<dyn Delegate>>,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a delegate for its capability, replacing any previous one.
    pub fn register(&mut self, delegate: Box<dyn Delegate>) -> &mut Self {
        self.delegates.insert(delegate.capability(), delegate);
        self
    }

    pub fn handles(&self, capability: Capability) -> bool {
        self.delegates.contains_key(&capability)
    }

    /// Routes a click. Returns `None` when the target has no capability, no
    /// delegate serves it, or the card no longer exists.
    pub fn dispatch(
        &mut self,
        event: ClickEvent,
        surface: &mut Surface,
        layout: &dyn LayoutProbe,
    ) -> Option<Interaction> {
        let capability = event.region.capability()?;
        let card = event.card?;
        surface.card(card)?;
        let delegate = self.delegates.get_mut(&capability)?;
        delegate.dispatch(card, surface, layout)
    }
}

/// Reports footer button activations without acting on them; buying and
/// playing happen outside the catalog.
#[derive(Debug)]
pub struct FooterButtons {
    capability: Capability,
}

impl FooterButtons {
    pub fn action() -> Self {
        Self {
            capability: Capability::Action,
        }
    }

    pub fn play() -> Self {
        Self {
            capability: Capability::Play,
        }
    }
}

impl Delegate for FooterButtons {
    fn capability(&self) -> Capability {
        self.capability
    }

    fn dispatch(
        &mut self,
        card: CardHandle,
        surface: &mut Surface,
        _layout: &dyn LayoutProbe,
    ) -> Option<Interaction> {
        let slot = surface.card(card)?;
        match self.capability {
            Capability::Action => Some(Interaction::ActionRequested { card }),
            Capability::Play if slot.fragment.show_play => Some(Interaction::PlayRequested { card }),
            _ => None,
        }
    }
}
