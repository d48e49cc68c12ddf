//! Page identity.
//!
//! The host decides which page is on screen; the engine only needs to know
//! which of the storefront pages that is, and what base constraint the page
//! imposes on the catalog.

use serde::Serialize;
use std::fmt;

pub const BEATS_CATEGORY: &str = "Beats";
pub const KITS_CATEGORY: &str = "Kits & Plugins";
pub const POSTS_CATEGORY: &str = "Posts";

/// The storefront page currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Beats,
    Kits,
    Store,
    Posts,
    Home,
    Other,
}

/// Base constraint a page applies before any visitor filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContext {
    /// Only items whose category matches exactly.
    Category(String),
    /// Only items with a price above zero.
    PricedOnly,
    /// No base constraint; shows the latest items until the visitor filters.
    Home,
    /// No base constraint at all.
    Unconstrained,
}

impl Page {
    /// Resolves a page from the host's address. First match wins.
    pub fn from_path(path: &str) -> Self {
        if path.contains("beats.html") {
            Page::Beats
        } else if path.contains("kits.html") {
            Page::Kits
        } else if path.contains("loja.html") {
            Page::Store
        } else if path.contains("posts.html") {
            Page::Posts
        } else if path.contains("index.html") || path.ends_with('/') {
            Page::Home
        } else {
            Page::Other
        }
    }

    pub fn context(&self) -> PageContext {
        match self {
            Page::Beats => PageContext::Category(BEATS_CATEGORY.to_string()),
            Page::Kits => PageContext::Category(KITS_CATEGORY.to_string()),
            Page::Store => PageContext::PricedOnly,
            Page::Posts => PageContext::Category(POSTS_CATEGORY.to_string()),
            Page::Home => PageContext::Home,
            Page::Other => PageContext::Unconstrained,
        }
    }

    /// Cards get a play button only on the beats listing.
    pub fn shows_play(&self) -> bool {
        matches!(self, Page::Beats)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Page::Beats => "beats",
            Page::Kits => "kits",
            Page::Store => "store",
            Page::Posts => "posts",
            Page::Home => "home",
            Page::Other => "other",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_listing_pages() {
        assert_eq!(Page::from_path("/site/beats.html"), Page::Beats);
        assert_eq!(Page::from_path("/kits.html"), Page::Kits);
        assert_eq!(Page::from_path("/loja.html"), Page::Store);
        assert_eq!(Page::from_path("/posts.html"), Page::Posts);
    }

    #[test]
    fn resolves_home_from_index_or_trailing_slash() {
        assert_eq!(Page::from_path("/index.html"), Page::Home);
        assert_eq!(Page::from_path("/"), Page::Home);
        assert_eq!(Page::from_path("/site/"), Page::Home);
    }

    #[test]
    fn unknown_paths_are_unconstrained() {
        let page = Page::from_path("/about.html");
        assert_eq!(page, Page::Other);
        assert_eq!(page.context(), PageContext::Unconstrained);
    }

    #[test]
    fn contexts_match_pages() {
        assert_eq!(
            Page::Kits.context(),
            PageContext::Category("Kits & Plugins".to_string())
        );
        assert_eq!(Page::Store.context(), PageContext::PricedOnly);
        assert_eq!(Page::Home.context(), PageContext::Home);
    }

    #[test]
    fn only_beats_shows_play() {
        assert!(Page::Beats.shows_play());
        assert!(!Page::Kits.shows_play());
        assert!(!Page::Home.shows_play());
    }
}
