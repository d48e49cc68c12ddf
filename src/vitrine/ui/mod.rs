//! # Interaction Layer
//!
//! State that lives on rendered output rather than on the catalog.
//!
//! [`Surface`] is the single container region the storefront draws into. Every
//! render replaces it wholesale: a new generation begins, fresh [`CardHandle`]s
//! are issued and everything attached to the old cards (accordion state,
//! reveal state) is dropped with them. A handle from an older generation
//! resolves to nothing.
//!
//! On top of the surface:
//! - [`router::EventRouter`]: one delegated click handler for the whole container
//! - [`accordion::AccordionController`]: per-card expand/collapse
//! - [`visibility::VisibilityAnimator`]: one-shot reveal on first visibility

use crate::render::{CardFragment, Rendered};

pub mod accordion;
pub mod router;
pub mod visibility;

pub use accordion::{AccordionController, AccordionState, LayoutProbe};
pub use router::{Capability, ClickEvent, Delegate, EventRouter, Interaction, Region};
pub use visibility::{IntersectionEntry, IntersectionHost, VisibilityAnimator};

/// Identifies one card of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardHandle {
    generation: u64,
    position: usize,
}

impl CardHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

/// A rendered card together with the UI state attached to it.
#[derive(Debug, Clone)]
pub struct CardSlot {
    pub handle: CardHandle,
    pub fragment: CardFragment,
    pub accordion: AccordionState,
    /// Explicit height of the detail region. `None` means the resting (closed)
    /// height from the stylesheet.
    pub detail_height: Option<f64>,
    pub visible: bool,
}

impl CardSlot {
    fn new(handle: CardHandle, fragment: CardFragment) -> Self {
        Self {
            handle,
            fragment,
            accordion: AccordionState::Collapsed,
            detail_height: None,
            visible: false,
        }
    }

    /// CSS classes the host should put on the card element.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["card"];
        if self.accordion == AccordionState::Expanded {
            classes.push("active");
        }
        if self.visible {
            classes.push("is-visible");
        }
        classes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// Before the catalog arrives.
    Loading,
    /// The catalog could not be retrieved; the fallback message is shown.
    LoadFailed,
    /// Filtering matched nothing.
    Empty,
    Cards,
}

#[derive(Debug, Clone)]
pub struct Surface {
    generation: u64,
    state: SurfaceState,
    /// Message markup; cards carry their own.
    markup: String,
    cards: Vec<CardSlot>,
}

impl Surface {
    /// A surface showing the loading message.
    pub fn loading(markup: String) -> Self {
        Self {
            generation: 0,
            state: SurfaceState::Loading,
            markup,
            cards: Vec::new(),
        }
    }

    /// Replaces the whole region with the load failure message.
    pub fn show_load_failure(&mut self, markup: String) {
        self.generation += 1;
        self.state = SurfaceState::LoadFailed;
        self.markup = markup;
        self.cards.clear();
    }

    /// Replaces the whole region with a render pass and returns the handles of
    /// the new cards, in display order.
    pub fn replace(&mut self, rendered: Rendered) -> Vec<CardHandle> {
        self.generation += 1;
        self.markup.clear();
        self.cards.clear();

        match rendered {
            Rendered::NoResults { markup } => {
                self.state = SurfaceState::Empty;
                self.markup = markup;
                Vec::new()
            }
            Rendered::Cards(fragments) => {
                self.state = SurfaceState::Cards;
                let generation = self.generation;
                self.cards = fragments
                    .into_iter()
                    .enumerate()
                    .map(|(position, fragment)| {
                        CardSlot::new(
                            CardHandle {
                                generation,
                                position,
                            },
                            fragment,
                        )
                    })
                    .collect();
                self.cards.iter().map(|slot| slot.handle).collect()
            }
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The container markup as it stands, card state included.
    pub fn markup(&self) -> String {
        match self.state {
            SurfaceState::Cards => self
                .cards
                .iter()
                .map(|slot| slot.fragment.markup.as_str())
                .collect(),
            _ => self.markup.clone(),
        }
    }

    pub fn cards(&self) -> &[CardSlot] {
        &self.cards
    }

    /// Handle of the card currently at `position`, if any.
    pub fn handle_at(&self, position: usize) -> Option<CardHandle> {
        self.cards.get(position).map(|slot| slot.handle)
    }

    pub fn card(&self, handle: CardHandle) -> Option<&CardSlot> {
        if handle.generation != self.generation {
            return None;
        }
        self.cards.get(handle.position)
    }

    pub fn card_mut(&mut self, handle: CardHandle) -> Option<&mut CardSlot> {
        if handle.generation != self.generation {
            return None;
        }
        self.cards.get_mut(handle.position)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::catalog::memory::fixtures::sample_items;
    use crate::config::Labels;
    use crate::model::Item;
    use crate::render::CardRenderer;

    /// A surface holding the first `count` sample cards.
    pub fn surface_with_cards(count: usize) -> (Surface, Vec<CardHandle>) {
        let items = sample_items();
        let refs: Vec<&Item> = items.iter().take(count).collect();
        let renderer = CardRenderer::new(Labels::default(), false).unwrap();
        let mut surface = Surface::loading(String::new());
        let handles = surface.replace(renderer.render(&refs).unwrap());
        (surface, handles)
    }

    pub struct FixedLayout(pub f64);

    impl LayoutProbe for FixedLayout {
        fn natural_height(&self, _card: &CardSlot) -> f64 {
            self.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::surface_with_cards;
    use super::*;
    use crate::config::Labels;
    use crate::render::CardRenderer;

    #[test]
    fn starts_in_loading_state() {
        let surface = Surface::loading("<p class=\"loading\">...</p>".into());
        assert_eq!(surface.state(), SurfaceState::Loading);
        assert!(surface.cards().is_empty());
    }

    #[test]
    fn replace_issues_fresh_handles() {
        let (mut surface, first) = surface_with_cards(3);
        assert_eq!(first.len(), 3);
        assert_eq!(surface.state(), SurfaceState::Cards);

        let renderer = CardRenderer::new(Labels::default(), false).unwrap();
        let second = surface.replace(renderer.render(&[]).unwrap());
        assert!(second.is_empty());
        assert_eq!(surface.state(), SurfaceState::Empty);
        assert!(surface.card(first[0]).is_none());
    }

    #[test]
    fn stale_handles_do_not_resolve() {
        let (mut surface, first) = surface_with_cards(2);
        let renderer = CardRenderer::new(Labels::default(), false).unwrap();
        let items = crate::catalog::memory::fixtures::sample_items();
        let refs: Vec<_> = items.iter().take(2).collect();
        let second = surface.replace(renderer.render(&refs).unwrap());

        assert_eq!(first[0].position(), second[0].position());
        assert_ne!(first[0], second[0]);
        assert!(surface.card(first[0]).is_none());
        assert!(surface.card(second[0]).is_some());
    }

    #[test]
    fn load_failure_clears_cards() {
        let (mut surface, handles) = surface_with_cards(2);
        surface.show_load_failure("<p class=\"error-message\">x</p>".into());
        assert_eq!(surface.state(), SurfaceState::LoadFailed);
        assert!(surface.card(handles[0]).is_none());
        assert!(surface.markup().contains("error-message"));
    }

    #[test]
    fn classes_reflect_card_state() {
        let (mut surface, handles) = surface_with_cards(1);
        assert_eq!(surface.card(handles[0]).unwrap().classes(), vec!["card"]);

        let slot = surface.card_mut(handles[0]).unwrap();
        slot.accordion = AccordionState::Expanded;
        slot.visible = true;
        assert_eq!(slot.classes(), vec!["card", "active", "is-visible"]);
    }
}
