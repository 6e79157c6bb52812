//! Application configuration.
//!
//! Loaded from YAML at:
//! 1. `$XDG_CONFIG_HOME/wordgrid/config.yaml`
//! 2. `~/.config/wordgrid/config.yaml`
//!
//! Missing or unreadable files fall back to the built-in defaults.

use crate::recent::RecentSearches;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors raised while reading or writing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
    /// The YAML did not match the configuration schema.
    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Where to send one kind of query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Scheme and host, without a trailing slash
    pub base_url: String,
    /// Path appended after the base
    pub route: String,
    /// Text placed between the route and the encoded term
    pub separator: String,
}

impl EndpointConfig {
    /// Create an endpoint.
    pub fn new(
        base_url: impl Into<String>,
        route: impl Into<String>,
        separator: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            route: route.into(),
            separator: separator.into(),
        }
    }

    /// Free Dictionary API entries endpoint.
    pub fn dictionary() -> Self {
        Self::new("https://api.dictionaryapi.dev", "api/v2/entries/en", "/")
    }

    /// Datamuse synonyms endpoint.
    pub fn synonyms() -> Self {
        Self::new("https://api.datamuse.com", "words", "?rel_syn=")
    }

    /// Full URL for `term`; every non-alphanumeric byte is percent-encoded.
    ///
    /// # Examples
    ///
    /// ```
    /// use wordgrid_app::EndpointConfig;
    ///
    /// let url = EndpointConfig::dictionary().query_url("ice cream");
    /// assert_eq!(url, "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream");
    /// ```
    #[must_use]
    pub fn query_url(&self, term: &str) -> String {
        format!(
            "{}/{}{}{}",
            self.base_url,
            self.route,
            self.separator,
            utf8_percent_encode(term, NON_ALPHANUMERIC)
        )
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Word lookups
    pub dictionary: EndpointConfig,
    /// Synonym lookups
    pub synonyms: EndpointConfig,
    /// How many recent searches to keep
    pub recent_capacity: usize,
    /// File the recent searches are persisted to; in-memory when null
    pub storage_path: Option<PathBuf>,
    /// Synonyms shown on the detail screen
    pub max_synonyms: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dictionary: EndpointConfig::dictionary(),
            synonyms: EndpointConfig::synonyms(),
            recent_capacity: 5,
            storage_path: Self::default_storage_path(),
            max_synonyms: 5,
        }
    }
}

impl AppConfig {
    /// Get config file paths in priority order.
    pub fn config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            paths.push(PathBuf::from(xdg_config).join("wordgrid/config.yaml"));
        }

        if let Ok(home) = std::env::var("HOME") {
            paths.push(PathBuf::from(home).join(".config/wordgrid/config.yaml"));
        }

        paths
    }

    /// Default recent searches file.
    ///
    /// `$XDG_DATA_HOME/wordgrid/recent.json`, else
    /// `~/.local/share/wordgrid/recent.json`; `None` without either variable.
    pub fn default_storage_path() -> Option<PathBuf> {
        if let Ok(xdg_data) = std::env::var("XDG_DATA_HOME") {
            return Some(PathBuf::from(xdg_data).join("wordgrid/recent.json"));
        }
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".local/share/wordgrid/recent.json"))
    }

    /// Open the recent searches store at `storage_path`.
    ///
    /// An unreadable store is logged and replaced by an empty one that still
    /// saves to the same path.
    pub fn open_recent(&self) -> RecentSearches {
        let Some(path) = &self.storage_path else {
            return RecentSearches::in_memory(self.recent_capacity);
        };
        RecentSearches::open(path, self.recent_capacity).unwrap_or_else(|err| {
            warn!(path = %path.display(), error = %err, "starting with no recent searches");
            RecentSearches::empty_at(path, self.recent_capacity)
        })
    }

    /// Load configuration from the first readable file, falling back to
    /// defaults.
    pub fn load() -> Self {
        for path in Self::config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "loaded configuration");
                    return config;
                }
                Err(err) => warn!(path = %path.display(), error = %err, "ignoring configuration"),
            }
        }

        Self::default()
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML. Absent keys take their defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Serialize configuration to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }
}
