//! # Storefront Facade
//!
//! [`Storefront`] is the application context: created once at startup, it
//! owns everything that used to be ambient state (the loaded catalog, the page
//! identity, the visitor's selection) and wires the components together.
//!
//! ## Lifecycle
//!
//! 1. [`Storefront::new`]: the container shows the loading message.
//! 2. [`Storefront::load`]: the catalog is fetched once. On success the facet
//!    options are indexed and the first render happens. On failure the
//!    container shows the fallback message and nothing else is initialized.
//! 3. Event entry points (`on_*`): every search keystroke and facet change
//!    recomputes the visible list and replaces the container. Clicks go
//!    through the delegated router; intersection notifications go to the
//!    visibility animator.
//!
//! ## Host Environment
//!
//! The storefront never touches a real screen. Whatever hosts it supplies an
//! [`IntersectionHost`] (viewport notifications) and a [`LayoutProbe`] (content
//! measurement) on the calls that need them.

use crate::catalog::{Catalog, CatalogSource};
use crate::commands::facets::FacetOptions;
use crate::commands::filter::{compute_visible, FilterSelection};
use crate::commands::{CmdMessage, CmdResult};
use crate::config::VitrineConfig;
use crate::error::{Result, VitrineError};
use crate::model::{FacetKey, Item};
use crate::page::{Page, PageContext};
use crate::render::CardRenderer;
use crate::ui::router::FooterButtons;
use crate::ui::{
    AccordionController, CardHandle, ClickEvent, EventRouter, Interaction, IntersectionEntry,
    IntersectionHost, LayoutProbe, Surface, SurfaceState, VisibilityAnimator,
};

pub struct Storefront {
    config: VitrineConfig,
    page: Page,
    context: PageContext,
    catalog: Option<Catalog>,
    load_error: Option<VitrineError>,
    facets: FacetOptions,
    selection: FilterSelection,
    renderer: CardRenderer,
    surface: Surface,
    router: EventRouter,
    animator: VisibilityAnimator,
}

impl Storefront {
    pub fn new(config: VitrineConfig, page: Page) -> Result<Self> {
        config.validate()?;
        let renderer = CardRenderer::new(config.labels.clone(), page.shows_play())?;
        let surface = Surface::loading(renderer.render_loading()?);

        let mut router = EventRouter::new();
        router
            .register(Box::new(AccordionController::new()))
            .register(Box::new(FooterButtons::action()))
            .register(Box::new(FooterButtons::play()));

        let animator = VisibilityAnimator::new(config.reveal_threshold);

        Ok(Self {
            context: page.context(),
            page,
            config,
            catalog: None,
            load_error: None,
            facets: FacetOptions::default(),
            selection: FilterSelection::new(),
            renderer,
            surface,
            router,
            animator,
        })
    }

    /// Creates the storefront and loads its catalog.
    pub fn boot<S: CatalogSource + ?Sized>(
        config: VitrineConfig,
        page: Page,
        source: &S,
        host: &mut dyn IntersectionHost,
    ) -> Result<Self> {
        let mut storefront = Self::new(config, page)?;
        storefront.load(source, host)?;
        Ok(storefront)
    }

    /// Fetches the catalog. Returns whether the catalog is available.
    ///
    /// Load failures are not returned as errors: they are recorded (see
    /// [`Storefront::load_error`]) and shown as the fallback message. Only one
    /// attempt is ever made.
    pub fn load<S: CatalogSource + ?Sized>(
        &mut self,
        source: &S,
        host: &mut dyn IntersectionHost,
    ) -> Result<bool> {
        if self.surface.state() != SurfaceState::Loading {
            return Ok(self.catalog.is_some());
        }

        match Catalog::load(source) {
            Ok(catalog) => {
                self.facets = FacetOptions::index(catalog.items());
                self.catalog = Some(catalog);
                self.recompute(host)?;
                Ok(true)
            }
            Err(e) if e.is_load_failure() => {
                self.surface
                    .show_load_failure(self.renderer.render_load_failure()?);
                self.load_error = Some(e);
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    pub fn on_search_input(&mut self, text: &str, host: &mut dyn IntersectionHost) -> Result<()> {
        if self.catalog.is_none() {
            return Ok(());
        }
        self.selection.search = text.to_string();
        self.recompute(host)
    }

    pub fn on_facet_change(
        &mut self,
        key: FacetKey,
        value: &str,
        host: &mut dyn IntersectionHost,
    ) -> Result<()> {
        if self.catalog.is_none() {
            return Ok(());
        }
        self.selection.set(key, value);
        self.recompute(host)
    }

    /// Replaces the whole selection at once and recomputes a single time.
    pub fn apply_selection(
        &mut self,
        selection: FilterSelection,
        host: &mut dyn IntersectionHost,
    ) -> Result<()> {
        if self.catalog.is_none() {
            return Ok(());
        }
        self.selection = selection;
        self.recompute(host)
    }

    pub fn on_click(
        &mut self,
        event: ClickEvent,
        layout: &dyn LayoutProbe,
    ) -> Result<Option<Interaction>> {
        let interaction = self.router.dispatch(event, &mut self.surface, layout);
        if let Some(Interaction::Toggled { card, .. }) = interaction {
            self.restyle(card)?;
        }
        Ok(interaction)
    }

    pub fn on_intersections(
        &mut self,
        entries: &[IntersectionEntry],
        host: &mut dyn IntersectionHost,
    ) -> Result<Vec<CardHandle>> {
        let revealed = self
            .animator
            .on_intersections(entries, &mut self.surface, host);
        for card in &revealed {
            self.restyle(*card)?;
        }
        Ok(revealed)
    }

    /// Re-renders one card so its markup carries its accordion and reveal state.
    fn restyle(&mut self, card: CardHandle) -> Result<()> {
        let Some(slot) = self.surface.card_mut(card) else {
            return Ok(());
        };
        slot.fragment.markup =
            self.renderer
                .render_card_state(&slot.fragment, &slot.classes(), slot.detail_height)?;
        Ok(())
    }

    /// Filter, render, replace the container, watch the new cards.
    fn recompute(&mut self, host: &mut dyn IntersectionHost) -> Result<()> {
        let Some(catalog) = &self.catalog else {
            return Ok(());
        };

        let visible = compute_visible(
            catalog.items(),
            &self.context,
            &self.selection,
            self.config.home_latest_count,
        );
        tracing::debug!(
            page = %self.page,
            filtering = self.selection.is_filtering(),
            visible = visible.len(),
            "recomputed visible items"
        );

        let rendered = self.renderer.render(&visible)?;
        let handles = self.surface.replace(rendered);
        self.animator.retire_before(self.surface.generation());
        self.animator.observe(&handles, host);
        Ok(())
    }

    /// Items currently on screen, in display order.
    pub fn visible_items(&self) -> Vec<&Item> {
        self.surface
            .cards()
            .iter()
            .map(|slot| &slot.fragment.item)
            .collect()
    }

    /// Snapshot for UI clients: visible items, facet options and any message
    /// the container is showing instead of cards.
    pub fn listing(&self) -> CmdResult {
        let mut result = CmdResult::default()
            .with_listed_items(self.visible_items().into_iter().cloned().collect());
        if self.catalog.is_some() {
            result = result.with_facets(self.facets.clone());
        }

        let labels = self.renderer.labels();
        match self.surface.state() {
            SurfaceState::Loading => result.add_message(CmdMessage::info(labels.loading.clone())),
            SurfaceState::LoadFailed => {
                result.add_message(CmdMessage::error(labels.load_failure.clone()))
            }
            SurfaceState::Empty => result.add_message(CmdMessage::info(labels.no_results.clone())),
            SurfaceState::Cards => {}
        }
        result
    }

    pub fn load_error(&self) -> Option<&VitrineError> {
        self.load_error.as_ref()
    }

    /// Hands the recorded load failure to the caller. The fallback message
    /// stays on screen.
    pub fn take_load_error(&mut self) -> Option<VitrineError> {
        self.load_error.take()
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.is_some()
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn facets(&self) -> &FacetOptions {
        &self.facets
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn config(&self) -> &VitrineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::sample_items;
    use crate::catalog::memory::InMemorySource;
    use crate::commands::MessageLevel;
    use crate::ui::test_support::FixedLayout;
    use crate::ui::{AccordionState, Region};

    #[derive(Default)]
    struct RecordingHost {
        observed: Vec<CardHandle>,
        unobserved: Vec<CardHandle>,
    }

    impl IntersectionHost for RecordingHost {
        fn observe(&mut self, card: CardHandle, _threshold: f64) {
            self.observed.push(card);
        }

        fn unobserve(&mut self, card: CardHandle) {
            self.unobserved.push(card);
        }
    }

    fn boot(page: Page) -> (Storefront, RecordingHost) {
        let mut host = RecordingHost::default();
        let source = InMemorySource::new(sample_items());
        let storefront =
            Storefront::boot(VitrineConfig::default(), page, &source, &mut host).unwrap();
        (storefront, host)
    }

    fn visible_ids(storefront: &Storefront) -> Vec<u64> {
        storefront.visible_items().iter().map(|i| i.id).collect()
    }

    #[test]
    fn starts_with_loading_message() {
        let storefront = Storefront::new(VitrineConfig::default(), Page::Home).unwrap();
        assert_eq!(storefront.surface().state(), SurfaceState::Loading);
        assert!(storefront.surface().markup().contains("Carregando..."));
        assert!(!storefront.is_loaded());
    }

    #[test]
    fn home_boots_with_latest_items() {
        let (storefront, host) = boot(Page::Home);
        assert_eq!(visible_ids(&storefront), vec![4, 1, 5]);
        assert_eq!(host.observed.len(), 3);
        assert_eq!(storefront.facets().years, vec!["2023", "2022", "2021"]);
    }

    #[test]
    fn home_filtering_uses_full_catalog() {
        let (mut storefront, mut host) = boot(Page::Home);
        storefront
            .on_facet_change(FacetKey::Genre, "Lo-fi", &mut host)
            .unwrap();
        assert_eq!(visible_ids(&storefront), vec![2, 3, 6]);

        storefront
            .on_facet_change(FacetKey::Genre, "", &mut host)
            .unwrap();
        assert_eq!(visible_ids(&storefront), vec![4, 1, 5]);
    }

    #[test]
    fn every_keystroke_recomputes() {
        let (mut storefront, mut host) = boot(Page::Beats);
        assert_eq!(visible_ids(&storefront), vec![1, 2]);

        let before = storefront.surface().generation();
        storefront.on_search_input("t", &mut host).unwrap();
        storefront.on_search_input("tr", &mut host).unwrap();
        storefront.on_search_input("tra", &mut host).unwrap();
        assert_eq!(storefront.surface().generation(), before + 3);
        assert_eq!(visible_ids(&storefront), vec![1]);
        assert_eq!(storefront.selection().search, "tra");
    }

    #[test]
    fn beats_page_shows_play_buttons() {
        let (storefront, _) = boot(Page::Beats);
        assert!(storefront.surface().markup().contains("class=\"play\""));

        let (storefront, _) = boot(Page::Kits);
        assert!(!storefront.surface().markup().contains("class=\"play\""));
    }

    #[test]
    fn no_match_shows_no_results_state() {
        let (mut storefront, mut host) = boot(Page::Store);
        storefront.on_search_input("polka", &mut host).unwrap();

        assert_eq!(storefront.surface().state(), SurfaceState::Empty);
        assert!(storefront.surface().markup().contains("no-results"));
        let listing = storefront.listing();
        assert!(listing.listed_items.is_empty());
        assert_eq!(listing.messages[0].level, MessageLevel::Info);
    }

    #[test]
    fn load_failure_halts_initialization() {
        let mut host = RecordingHost::default();
        let source = InMemorySource::failing(500);
        let mut storefront =
            Storefront::boot(VitrineConfig::default(), Page::Home, &source, &mut host).unwrap();

        assert_eq!(storefront.surface().state(), SurfaceState::LoadFailed);
        assert!(storefront.surface().markup().contains("error-message"));
        assert!(storefront.facets().is_empty());
        assert!(matches!(
            storefront.load_error(),
            Some(VitrineError::Load { status: 500 })
        ));
        assert!(host.observed.is_empty());

        storefront.on_search_input("trap", &mut host).unwrap();
        assert_eq!(storefront.surface().state(), SurfaceState::LoadFailed);
        let listing = storefront.listing();
        assert_eq!(listing.messages[0].level, MessageLevel::Error);
        assert!(listing.facets.is_none());

        assert!(storefront.take_load_error().is_some());
        assert!(storefront.take_load_error().is_none());
        assert_eq!(storefront.surface().state(), SurfaceState::LoadFailed);
    }

    #[test]
    fn loads_only_once() {
        let (mut storefront, mut host) = boot(Page::Other);
        let again = InMemorySource::failing(500);
        assert!(storefront.load(&again, &mut host).unwrap());
        assert_eq!(storefront.surface().state(), SurfaceState::Cards);
    }

    #[test]
    fn title_click_expands_and_rerender_resets() {
        let (mut storefront, mut host) = boot(Page::Other);
        let card = storefront.surface().handle_at(0).unwrap();

        let result = storefront
            .on_click(ClickEvent::on_card(card, Region::Title), &FixedLayout(120.0))
            .unwrap();
        assert_eq!(
            result,
            Some(Interaction::Toggled {
                card,
                state: AccordionState::Expanded
            })
        );
        assert_eq!(
            storefront.surface().card(card).unwrap().detail_height,
            Some(120.0)
        );

        storefront.on_search_input("", &mut host).unwrap();
        assert!(!storefront.surface().markup().contains("active"));
        let fresh = storefront.surface().handle_at(0).unwrap();
        assert_eq!(
            storefront.surface().card(fresh).unwrap().accordion,
            AccordionState::Collapsed
        );
    }

    #[test]
    fn reveals_cards_once() {
        let (mut storefront, mut host) = boot(Page::Home);
        let card = storefront.surface().handle_at(1).unwrap();
        let entry = IntersectionEntry::visible(card, 0.3);

        assert_eq!(
            storefront.on_intersections(&[entry], &mut host).unwrap(),
            vec![card]
        );
        assert!(storefront
            .on_intersections(&[entry], &mut host)
            .unwrap()
            .is_empty());
        assert_eq!(host.unobserved, vec![card]);
        assert!(storefront.surface().card(card).unwrap().visible);
        assert_eq!(storefront.surface().markup().matches("is-visible").count(), 1);
    }

    #[test]
    fn markup_follows_accordion_state() {
        let (mut storefront, _) = boot(Page::Posts);
        let card = storefront.surface().handle_at(0).unwrap();
        let title = ClickEvent::on_card(card, Region::Title);

        storefront.on_click(title, &FixedLayout(96.0)).unwrap();
        let markup = storefront.surface().markup();
        assert!(markup.contains(r#"<div class="card active" data-id="5">"#));
        assert!(markup.contains(r#"style="max-height: 96px""#));

        storefront.on_click(title, &FixedLayout(96.0)).unwrap();
        let markup = storefront.surface().markup();
        assert!(markup.contains(r#"<div class="card" data-id="5">"#));
        assert!(!markup.contains("max-height"));
    }

    #[test]
    fn apply_selection_recomputes_once() {
        let (mut storefront, mut host) = boot(Page::Other);
        let before = storefront.surface().generation();
        let selection = FilterSelection::new()
            .with_facet(FacetKey::Genre, "Lo-fi")
            .with_facet(FacetKey::Type, "Drum Kit");
        storefront.apply_selection(selection, &mut host).unwrap();

        assert_eq!(storefront.surface().generation(), before + 1);
        assert_eq!(visible_ids(&storefront), vec![3]);
    }

    #[test]
    fn rejects_invalid_config() {
        let config = VitrineConfig {
            reveal_threshold: 0.0,
            ..VitrineConfig::default()
        };
        assert!(matches!(
            Storefront::new(config, Page::Home),
            Err(VitrineError::Config(_))
        ));
    }
}
