//! # Card Renderer
//!
//! Turns a list of visible items into display fragments for the card
//! container. The renderer is a pure function of the list it is given: it
//! never looks at the current filter selection.
//!
//! Per-card decisions live in Rust (badge class, action, price label, whether
//! the play button exists); the templates in [`templates`] only lay them out.
//!
//! The container has four mutually exclusive states, each with its own markup:
//! cards, no results ([`Rendered::NoResults`]), loading ([`CardRenderer::render_loading`])
//! and load failure ([`CardRenderer::render_load_failure`]).

use crate::config::Labels;
use crate::error::Result;
use crate::model::{format_amount, BadgeClass, Item, ItemAction};
use minijinja::Environment;
use serde::Serialize;

pub mod templates;

use templates::{
    CARD, CARD_TEMPLATE, LOADING, LOADING_TEMPLATE, LOAD_FAILURE, LOAD_FAILURE_TEMPLATE,
    NO_RESULTS, NO_RESULTS_TEMPLATE,
};

/// One rendered card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardFragment {
    pub item: Item,
    pub badge: BadgeClass,
    pub action: ItemAction,
    pub action_label: String,
    pub price_label: String,
    pub show_play: bool,
    pub markup: String,
}

/// Output of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Cards(Vec<CardFragment>),
    NoResults { markup: String },
}

impl Rendered {
    /// The replace-all markup for the container region.
    pub fn markup(&self) -> String {
        match self {
            Rendered::Cards(cards) => cards.iter().map(|c| c.markup.as_str()).collect(),
            Rendered::NoResults { markup } => markup.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Rendered::NoResults { .. })
    }
}

#[derive(Serialize)]
struct CardData<'a> {
    classes: String,
    id: u64,
    cover: &'a str,
    title: &'a str,
    badge: BadgeClass,
    category: &'a str,
    genre: &'a str,
    year: i32,
    description: &'a str,
    content: &'a str,
    kind: &'a str,
    type_caption: &'a str,
    price_caption: &'a str,
    price_label: &'a str,
    action_label: &'a str,
    play_label: Option<&'a str>,
    detail_height: Option<String>,
}

#[derive(Serialize)]
struct MessageData<'a> {
    message: &'a str,
}

pub struct CardRenderer {
    env: Environment<'static>,
    labels: Labels,
    show_play: bool,
}

impl CardRenderer {
    /// `show_play` comes from the page identity: only the beats listing gets a
    /// play button.
    pub fn new(labels: Labels, show_play: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(CARD, CARD_TEMPLATE)?;
        env.add_template(NO_RESULTS, NO_RESULTS_TEMPLATE)?;
        env.add_template(LOAD_FAILURE, LOAD_FAILURE_TEMPLATE)?;
        env.add_template(LOADING, LOADING_TEMPLATE)?;
        Ok(Self {
            env,
            labels,
            show_play,
        })
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn render(&self, items: &[&Item]) -> Result<Rendered> {
        if items.is_empty() {
            let markup = self.render_message(NO_RESULTS, &self.labels.no_results)?;
            return Ok(Rendered::NoResults { markup });
        }

        let cards = items
            .iter()
            .map(|item| self.render_card(item))
            .collect::<Result<Vec<_>>>()?;
        Ok(Rendered::Cards(cards))
    }

    pub fn render_loading(&self) -> Result<String> {
        self.render_message(LOADING, &self.labels.loading)
    }

    pub fn render_load_failure(&self) -> Result<String> {
        self.render_message(LOAD_FAILURE, &self.labels.load_failure)
    }

    /// "Grátis" for free items, currency prefix plus amount otherwise.
    pub fn price_label(&self, item: &Item) -> String {
        match item.action() {
            ItemAction::Download => self.labels.free.clone(),
            ItemAction::Purchase { price } => {
                format!("{}{}", self.labels.currency_prefix, format_amount(price))
            }
        }
    }

    pub fn action_label(&self, action: ItemAction) -> &str {
        match action {
            ItemAction::Download => &self.labels.download,
            ItemAction::Purchase { .. } => &self.labels.purchase,
        }
    }

    /// Markup for a card in a given UI state: `classes` go on the card
    /// element and `detail_height` pins the detail region's max-height.
    pub fn render_card_state(
        &self,
        fragment: &CardFragment,
        classes: &[&str],
        detail_height: Option<f64>,
    ) -> Result<String> {
        let item = &fragment.item;
        let data = CardData {
            classes: classes.join(" "),
            id: item.id,
            cover: &item.cover,
            title: &item.title,
            badge: fragment.badge,
            category: &item.category,
            genre: &item.genre,
            year: item.year,
            description: &item.description,
            content: &item.content,
            kind: &item.kind,
            type_caption: &self.labels.type_caption,
            price_caption: &self.labels.price_caption,
            price_label: &fragment.price_label,
            action_label: &fragment.action_label,
            play_label: fragment
                .show_play
                .then_some(self.labels.play.as_str()),
            detail_height: detail_height.map(format_amount),
        };
        Ok(self.env.get_template(CARD)?.render(&data)?)
    }

    fn render_card(&self, item: &Item) -> Result<CardFragment> {
        let action = item.action();
        let mut fragment = CardFragment {
            item: item.clone(),
            badge: item.badge_class(),
            action,
            action_label: self.action_label(action).to_string(),
            price_label: self.price_label(item),
            show_play: self.show_play,
            markup: String::new(),
        };
        fragment.markup = self.render_card_state(&fragment, &["card"], None)?;
        Ok(fragment)
    }

    fn render_message(&self, template: &str, message: &str) -> Result<String> {
        Ok(self
            .env
            .get_template(template)?
            .render(&MessageData { message })?)
    }
}
