//! Spider configuration.
//!
//! Every value has a default matching the live page, so the scraper runs with
//! no config file at all. A YAML file may override any subset:
//!
//! ```yaml
//! source_url: https://aclalibraries.org/who-we-are/
//! invalid_dates: skip
//! lac:
//!   title: LAC Executive Committee Meeting
//! ```

use serde::Deserialize;
use std::fs;
use tracing::{info, instrument};
use url::Url;

use crate::errors::{ConfigError, InvalidDatePolicy};
use crate::models::{Category, Classification, Location};

pub const SPIDER_NAME: &str = "alle_library_assoc";
pub const AGENCY: &str = "Allegheny County Library Association";
pub const DEFAULT_SOURCE_URL: &str = "https://aclalibraries.org/who-we-are/";

/// Record fields contributed by one meeting series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesConfig {
    pub title: String,
    pub id_prefix: String,
    pub classification: Classification,
}

impl SeriesConfig {
    fn new(title: &str, id_prefix: &str, classification: Classification) -> Self {
        Self {
            title: title.to_string(),
            id_prefix: id_prefix.to_string(),
            classification,
        }
    }
}

/// Per-series overrides; missing fields fall back to the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PartialSeries {
    title: Option<String>,
    id_prefix: Option<String>,
    classification: Option<Classification>,
}

impl PartialSeries {
    fn or(self, defaults: SeriesConfig) -> SeriesConfig {
        SeriesConfig {
            title: self.title.unwrap_or(defaults.title),
            id_prefix: self.id_prefix.unwrap_or(defaults.id_prefix),
            classification: self.classification.unwrap_or(defaults.classification),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    source_url: Option<String>,
    location: Option<Location>,
    invalid_dates: Option<InvalidDatePolicy>,
    board: PartialSeries,
    general: PartialSeries,
    advisory: PartialSeries,
    lac: PartialSeries,
}

/// Injected configuration for one scrape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpiderConfig {
    pub source_url: String,
    pub location: Location,
    pub invalid_dates: InvalidDatePolicy,
    pub board: SeriesConfig,
    pub general: SeriesConfig,
    pub advisory: SeriesConfig,
    pub lac: SeriesConfig,
}

impl Default for SpiderConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            location: Location::remote(),
            invalid_dates: InvalidDatePolicy::Abort,
            board: default_series(Category::Board),
            general: default_series(Category::General),
            advisory: default_series(Category::Advisory),
            lac: default_series(Category::Lac),
        }
    }
}

fn default_series(category: Category) -> SeriesConfig {
    match category {
        Category::Board => SeriesConfig::new(
            "Board Meeting",
            "alle_library_assoc_board_",
            Classification::Board,
        ),
        Category::General => SeriesConfig::new(
            "General Meeting",
            "alle_library_assoc_general_",
            Classification::Forum,
        ),
        Category::Advisory => SeriesConfig::new(
            "Advisory Council Meeting",
            "alle_library_assoc_advisory_",
            Classification::AdvisoryCommittee,
        ),
        Category::Lac => SeriesConfig::new(
            "LAC Executive Committee Meeting",
            "alle_library_assoc_lac_",
            Classification::Committee,
        ),
    }
}

impl SpiderConfig {
    pub fn series(&self, category: Category) -> &SeriesConfig {
        match category {
            Category::Board => &self.board,
            Category::General => &self.general,
            Category::Advisory => &self.advisory,
            Category::Lac => &self.lac,
        }
    }

    /// Parse YAML text, filling unspecified values with defaults.
    pub fn from_yaml(text: &str, path: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = serde_yaml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })?;

        let defaults = Self::default();
        let config = Self {
            source_url: file.source_url.unwrap_or(defaults.source_url),
            location: file.location.unwrap_or(defaults.location),
            invalid_dates: file.invalid_dates.unwrap_or(defaults.invalid_dates),
            board: file.board.or(defaults.board),
            general: file.general.or(defaults.general),
            advisory: file.advisory.or(defaults.advisory),
            lac: file.lac.or(defaults.lac),
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML config file.
    #[instrument(level = "info")]
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        let config = Self::from_yaml(&text, path)?;
        info!(source_url = %config.source_url, "Loaded spider configuration");
        Ok(config)
    }

    /// Replace the source URL, validating it.
    pub fn with_source_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.source_url = url.to_string();
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.source_url).map_err(|source| ConfigError::SourceUrl {
            url: self.source_url.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SpiderConfig::default();
        assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
        assert_eq!(config.location, Location::remote());
        assert_eq!(config.invalid_dates, InvalidDatePolicy::Abort);
        assert_eq!(config.series(Category::General).classification, Classification::Forum);
        assert_eq!(
            config.series(Category::Advisory).id_prefix,
            "alle_library_assoc_advisory_"
        );
    }

    #[test]
    fn test_prefixes_are_distinct() {
        let config = SpiderConfig::default();
        let mut prefixes: Vec<&str> = Category::ALL
            .iter()
            .map(|c| config.series(*c).id_prefix.as_str())
            .collect();
        prefixes.sort();
        prefixes.dedup();
        assert_eq!(prefixes.len(), 4);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = SpiderConfig::from_yaml("{}", "empty.yaml").unwrap();
        assert_eq!(config, SpiderConfig::default());
    }

    #[test]
    fn test_partial_yaml_overrides() {
        let yaml = r#"
invalid_dates: skip
location:
  name: Carnegie Library
  address: 4400 Forbes Ave
lac:
  title: LAC Meeting
"#;
        let config = SpiderConfig::from_yaml(yaml, "partial.yaml").unwrap();
        assert_eq!(config.invalid_dates, InvalidDatePolicy::Skip);
        assert_eq!(config.location.name, "Carnegie Library");
        assert_eq!(config.lac.title, "LAC Meeting");
        assert_eq!(config.lac.id_prefix, "alle_library_assoc_lac_");
        assert_eq!(config.lac.classification, Classification::Committee);
        assert_eq!(config.board, SpiderConfig::default().board);
    }

    #[test]
    fn test_classification_from_yaml() {
        let yaml = "general:\n  classification: Advisory Committee\n";
        let config = SpiderConfig::from_yaml(yaml, "c.yaml").unwrap();
        assert_eq!(config.general.classification, Classification::AdvisoryCommittee);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SpiderConfig::from_yaml("sorce_url: x\n", "typo.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_invalid_source_url() {
        let err = SpiderConfig::from_yaml("source_url: not a url\n", "bad.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::SourceUrl { .. }));

        assert!(SpiderConfig::default().with_source_url("::").is_err());
        let config = SpiderConfig::default()
            .with_source_url("http://localhost:8000/who-we-are/")
            .unwrap();
        assert_eq!(config.source_url, "http://localhost:8000/who-we-are/");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SpiderConfig::load("/nonexistent/acla.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
