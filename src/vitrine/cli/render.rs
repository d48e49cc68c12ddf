//! # Rendering Module
//!
//! Styled terminal output for storefront cards. Templates live in
//! `templates.rs` and are rendered through minijinja with a `style` filter
//! backed by [`VITRINE_THEME`].
//!
//! Widths, truncation and wrapping are computed here because they need
//! Unicode-aware measurement; templates only decide what goes where.

use super::styles::{names, VITRINE_THEME};
use super::templates::{CARD_TEMPLATE, FACETS_TEMPLATE};
use colored::Colorize;
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use vitrine::commands::facets::FacetOptions;
use vitrine::commands::{CmdMessage, MessageLevel};
use vitrine::error::Result;
use vitrine::model::{BadgeClass, FacetKey, Item};
use vitrine::ui::{AccordionState, CardSlot};

pub const TITLE_WIDTH: usize = 60;
pub const DETAIL_WIDTH: usize = 76;
const META_SEPARATOR: &str = " · ";

#[derive(Serialize)]
struct CardData {
    position: String,
    title: String,
    badge: String,
    badge_style: &'static str,
    meta: String,
    description: Vec<String>,
    price: String,
    price_style: &'static str,
    action: String,
    play: Option<String>,
    detail: Vec<String>,
}

#[derive(Serialize)]
struct FacetLine {
    name: &'static str,
    values: String,
}

#[derive(Serialize)]
struct FacetsData {
    facets: Vec<FacetLine>,
}

pub struct TextRenderer {
    env: Environment<'static>,
}

impl TextRenderer {
    pub fn new(use_color: bool) -> Result<Self> {
        let mut env = Environment::new();
        env.add_filter("style", move |value: Value, name: String| -> String {
            VITRINE_THEME.apply(&name, &value.to_string(), use_color)
        });
        env.add_template("card", CARD_TEMPLATE)?;
        env.add_template("facets", FACETS_TEMPLATE)?;
        Ok(Self { env })
    }

    /// Renders cards in display order, separated by blank lines. Expanded
    /// cards show as many detail lines as their measured height allows.
    pub fn render_cards(&self, slots: &[CardSlot], play_label: &str) -> Result<String> {
        let template = self.env.get_template("card")?;
        let cards = slots
            .iter()
            .map(|slot| template.render(card_data(slot, play_label)))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(cards.join("\n"))
    }

    pub fn render_facets(&self, facets: &FacetOptions, keys: &[FacetKey]) -> Result<String> {
        let data = FacetsData {
            facets: keys
                .iter()
                .map(|key| {
                    let values = facets.get(*key);
                    FacetLine {
                        name: key.as_str(),
                        values: if values.is_empty() {
                            "-".to_string()
                        } else {
                            values.join(", ")
                        },
                    }
                })
                .collect(),
        };
        Ok(self.env.get_template("facets")?.render(&data)?)
    }
}

fn card_data(slot: &CardSlot, play_label: &str) -> CardData {
    let fragment = &slot.fragment;
    let item = &fragment.item;

    let detail = match (slot.accordion, slot.detail_height) {
        (AccordionState::Expanded, Some(height)) => {
            detail_lines(item).into_iter().take(height as usize).collect()
        }
        _ => Vec::new(),
    };

    CardData {
        position: format!("{:>2}.", slot.handle.position() + 1),
        title: truncate_to_width(&item.title, TITLE_WIDTH),
        badge: fragment.badge.as_str().to_string(),
        badge_style: match fragment.badge {
            BadgeClass::Beat => names::BADGE_BEAT,
            BadgeClass::Kit => names::BADGE_KIT,
            BadgeClass::Post => names::BADGE_POST,
        },
        meta: meta_line(item),
        description: wrap_to_width(&item.description, DETAIL_WIDTH),
        price: fragment.price_label.clone(),
        price_style: if item.is_free() {
            names::FREE
        } else {
            names::PRICE
        },
        action: fragment.action_label.clone(),
        play: fragment.show_play.then(|| play_label.to_string()),
        detail,
    }
}

/// Genre, year and type, skipping whichever is missing.
fn meta_line(item: &Item) -> String {
    let year = (item.year != 0).then(|| item.year.to_string());
    [
        Some(item.genre.as_str()),
        year.as_deref(),
        Some(item.kind.as_str()),
    ]
    .into_iter()
    .flatten()
    .filter(|part| !part.is_empty())
    .collect::<Vec<_>>()
    .join(META_SEPARATOR)
}

/// Lines of a card's detail region: the wrapped content. The description
/// sits on the collapsed card.
pub fn detail_lines(item: &Item) -> Vec<String> {
    wrap_to_width(&item.content, DETAIL_WIDTH)
}

fn wrap_to_width(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > max_width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w > max_width - 1 {
            break;
        }
        result.push(c);
        width += w;
    }
    result.push('…');
    result
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
