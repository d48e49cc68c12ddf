use crate::error::{Result, VitrineError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_SOURCE: &str = "data/conteudo.json";
const DEFAULT_HOME_LATEST_COUNT: usize = 3;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// Configuration for the storefront, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VitrineConfig {
    /// File path or http(s) URL of the item collection
    #[serde(default = "default_data_source")]
    pub data_source: String,

    /// How many items the home page shows while the visitor is not filtering
    #[serde(default = "default_home_latest_count")]
    pub home_latest_count: usize,

    /// Fraction of a card that must be visible before it is revealed
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,

    #[serde(default)]
    pub labels: Labels,
}

/// Every literal shown to visitors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Labels {
    pub free: String,
    pub currency_prefix: String,
    pub download: String,
    pub purchase: String,
    pub play: String,
    pub type_caption: String,
    pub price_caption: String,
    pub no_results: String,
    pub load_failure: String,
    pub loading: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            free: "Grátis".to_string(),
            currency_prefix: "R$ ".to_string(),
            download: "⬇ Baixar".to_string(),
            purchase: "🛒 Comprar".to_string(),
            play: "▶ Play".to_string(),
            type_caption: "Tipo:".to_string(),
            price_caption: "Preço:".to_string(),
            no_results: "Nenhum item encontrado.".to_string(),
            load_failure: "Não foi possível carregar o conteúdo. Tente novamente mais tarde."
                .to_string(),
            loading: "Carregando...".to_string(),
        }
    }
}

fn default_data_source() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

fn default_home_latest_count() -> usize {
    DEFAULT_HOME_LATEST_COUNT
}

fn default_reveal_threshold() -> f64 {
    DEFAULT_REVEAL_THRESHOLD
}

impl Default for VitrineConfig {
    fn default() -> Self {
        Self {
            data_source: default_data_source(),
            home_latest_count: DEFAULT_HOME_LATEST_COUNT,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            labels: Labels::default(),
        }
    }
}

impl VitrineConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: VitrineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        self.validate()?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(VitrineError::Config(format!(
                "reveal_threshold must be in (0, 1], got {}",
                self.reveal_threshold
            )));
        }
        if self.home_latest_count == 0 {
            return Err(VitrineError::Config(
                "home_latest_count must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn with_data_source(mut self, source: impl Into<String>) -> Self {
        self.data_source = source.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VitrineConfig::default();
        assert_eq!(config.data_source, "data/conteudo.json");
        assert_eq!(config.home_latest_count, 3);
        assert_eq!(config.reveal_threshold, 0.1);
        assert_eq!(config.labels.free, "Grátis");
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = VitrineConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, VitrineConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dir = temp_dir.path().join("nested");

        let mut config = VitrineConfig::default().with_data_source("https://cdn.example/items.json");
        config.home_latest_count = 5;
        config.labels.free = "Free".to_string();
        config.save(&dir).unwrap();

        let loaded = VitrineConfig::load(&dir).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "labels": { "free": "Free" } }"#,
        )
        .unwrap();

        let loaded = VitrineConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.labels.free, "Free");
        assert_eq!(loaded.labels.currency_prefix, "R$ ");
        assert_eq!(loaded.home_latest_count, 3);
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{ "reveal_threshold": 1.5 }"#,
        )
        .unwrap();

        let err = VitrineConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, VitrineError::Config(_)));
    }

    #[test]
    fn test_rejects_zero_latest_count() {
        let config = VitrineConfig {
            home_latest_count: 0,
            ..VitrineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
