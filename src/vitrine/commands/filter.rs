//! Filter Engine.
//!
//! Narrowing happens in two stages. The page's base constraint goes first
//! (category or priced-only), then the visitor's search text and facet
//! selections. All active constraints combine with AND; the search text is
//! itself an OR over title, description and extended content.
//!
//! The home page is special: while the visitor is not filtering it ignores all
//! of the above and shows the most recent items of the whole catalog.

use crate::model::{FacetKey, Item};
use crate::page::PageContext;
use std::cmp::Reverse;

/// Current values of the search box and the four selection controls.
/// An empty string means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub search: String,
    pub genre: String,
    pub category: String,
    pub year: String,
    pub kind: String,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_facet(mut self, key: FacetKey, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: FacetKey, value: impl Into<String>) {
        let value = value.into();
        match key {
            FacetKey::Genre => self.genre = value,
            FacetKey::Category => self.category = value,
            FacetKey::Year => self.year = value,
            FacetKey::Type => self.kind = value,
        }
    }

    pub fn get(&self, key: FacetKey) -> &str {
        match key {
            FacetKey::Genre => &self.genre,
            FacetKey::Category => &self.category,
            FacetKey::Year => &self.year,
            FacetKey::Type => &self.kind,
        }
    }

    /// True when the visitor has typed anything or picked any facet value.
    pub fn is_filtering(&self) -> bool {
        !self.search.is_empty() || FacetKey::ALL.iter().any(|key| !self.get(*key).is_empty())
    }

    fn matches(&self, item: &Item, term: &str) -> bool {
        let matches_search = term.is_empty()
            || item.title.to_lowercase().contains(term)
            || item.description.to_lowercase().contains(term)
            || item.content.to_lowercase().contains(term);

        matches_search
            && (self.genre.is_empty() || item.genre == self.genre)
            && (self.category.is_empty() || item.category == self.category)
            && (self.year.is_empty() || item.year.to_string() == self.year)
            && (self.kind.is_empty() || item.kind == self.kind)
    }
}

/// The items to show for `context` and `selection`, in catalog order.
///
/// On the home page with nothing selected this returns the `latest_count`
/// most recent items of the whole catalog instead, ordered by year then id,
/// both descending.
pub fn compute_visible<'a>(
    items: &'a [Item],
    context: &PageContext,
    selection: &FilterSelection,
    latest_count: usize,
) -> Vec<&'a Item> {
    if *context == PageContext::Home && !selection.is_filtering() {
        return latest(items, latest_count);
    }

    let term = selection.search.to_lowercase();
    items
        .iter()
        .filter(|item| in_base_set(item, context))
        .filter(|item| selection.matches(item, &term))
        .collect()
}

fn in_base_set(item: &Item, context: &PageContext) -> bool {
    match context {
        PageContext::Category(category) => item.category == *category,
        PageContext::PricedOnly => item.price > 0.0,
        PageContext::Home | PageContext::Unconstrained => true,
    }
}

fn latest(items: &[Item], count: usize) -> Vec<&Item> {
    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by_key(|item| (Reverse(item.year), Reverse(item.id)));
    sorted.truncate(count);
    sorted
}
