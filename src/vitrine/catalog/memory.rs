use super::CatalogSource;
use crate::error::{Result, VitrineError};
use crate::model::Item;

/// Hands out a fixed collection, or a fixed failure.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    items: Vec<Item>,
    failure_status: Option<u16>,
}

impl InMemorySource {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            failure_status: None,
        }
    }

    /// A source whose every fetch fails with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            items: Vec::new(),
            failure_status: Some(status),
        }
    }
}

impl CatalogSource for InMemorySource {
    fn fetch(&self) -> Result<Vec<Item>> {
        match self.failure_status {
            Some(status) => Err(VitrineError::Load { status }),
            None => Ok(self.items.clone()),
        }
    }

    fn describe(&self) -> String {
        format!("memory ({} items)", self.items.len())
    }
}

// --- Test Fixtures ---
