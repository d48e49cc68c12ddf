use thiserror::Error;

#[derive(Error, Debug)]
pub enum VitrineError {
    #[error("Catalog request failed with HTTP status {status}")]
    Load { status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Render error: {0}")]
    Render(#[from] minijinja::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown facet: {0}")]
    UnknownFacet(String),
}

impl VitrineError {
    /// True for the failures that can happen while retrieving the catalog.
    ///
    /// These are the only errors the storefront recovers from by showing the
    /// fallback message instead of content.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            VitrineError::Load { .. }
                | VitrineError::Io(_)
                | VitrineError::Serialization(_)
                | VitrineError::Http(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, VitrineError>;
