use super::CatalogSource;
use crate::error::Result;
use crate::model::Item;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads the collection from a JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn fetch(&self) -> Result<Vec<Item>> {
        let content = fs::read_to_string(&self.path)?;
        let items: Vec<Item> = serde_json::from_str(&content)?;
        Ok(items)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
