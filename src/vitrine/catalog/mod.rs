//! # Catalog Store
//!
//! The catalog is read once, at startup, from a [`CatalogSource`] and then held
//! unchanged for the rest of the session. Everything downstream (facets,
//! filtering, rendering) borrows from [`Catalog::items`].
//!
//! ## Implementations
//!
//! - [`fs::FileSource`]: a JSON array on disk
//! - [`http::HttpSource`]: a JSON array behind a single GET endpoint
//! - [`memory::InMemorySource`]: items handed over directly, for tests
//!
//! [`source_for`] picks the right implementation for a configured location.
//!
//! ## Failure
//!
//! Any error coming out of [`Catalog::load`] is a load failure: the caller shows
//! the fallback message and stops initializing. There is no retry.

use crate::error::Result;
use crate::model::Item;

pub mod fs;
pub mod http;
pub mod memory;

/// Where the item collection comes from.
pub trait CatalogSource {
    /// Retrieve the whole collection in one go.
    fn fetch(&self) -> Result<Vec<Item>>;

    /// Human-readable location, used in logs.
    fn describe(&self) -> String;
}

/// Builds the source for a configured location: URLs go over HTTP, anything
/// else is treated as a file path.
pub fn source_for(location: &str) -> Box<dyn CatalogSource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(http::HttpSource::new(location))
    } else {
        Box::new(fs::FileSource::new(location))
    }
}

/// The loaded item collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    pub fn load<S: CatalogSource + ?Sized>(source: &S) -> Result<Self> {
        match source.fetch() {
            Ok(items) => {
                tracing::info!(count = items.len(), source = %source.describe(), "catalog loaded");
                Ok(Self { items })
            }
            Err(e) => {
                tracing::warn!(source = %source.describe(), error = %e, "catalog load failed");
                Err(e)
            }
        }
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::memory::fixtures::sample_items;
    use super::memory::InMemorySource;
    use super::*;
    use crate::error::VitrineError;

    #[test]
    fn loads_items_in_source_order() {
        let source = InMemorySource::new(sample_items());
        let catalog = Catalog::load(&source).unwrap();
        assert_eq!(catalog.len(), 6);
        let ids: Vec<u64> = catalog.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn looks_up_items_by_id() {
        let catalog = Catalog::from_items(sample_items());
        assert_eq!(catalog.get(3).unwrap().title, "Dusty Drums");
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn propagates_source_failure() {
        let source = InMemorySource::failing(500);
        let err = Catalog::load(&source).unwrap_err();
        assert!(matches!(err, VitrineError::Load { status: 500 }));
    }

    #[test]
    fn picks_source_by_location() {
        assert!(source_for("https://example.com/items.json")
            .describe()
            .starts_with("GET "));
        assert!(source_for("data/conteudo.json")
            .describe()
            .starts_with("file "));
    }
}
