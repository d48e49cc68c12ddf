//! # Command Layer
//!
//! Pure catalog logic: no I/O, no rendering, no interaction state. Each
//! function takes the loaded items plus plain values and returns plain values.
//!
//! - [`facets`]: distinct values for the four selection controls
//! - [`filter`]: the visible subset for a page and a visitor selection

use crate::model::Item;
use facets::FacetOptions;

pub mod facets;
pub mod filter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a storefront query hands back to a UI client.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_items: Vec<Item>,
    pub facets: Option<FacetOptions>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_facets(mut self, facets: FacetOptions) -> Self {
        self.facets = Some(facets);
        self
    }
}
