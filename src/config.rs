//! User configuration
//!
//! Stored as JSON in `~/.config/anagram/config.json` unless a path is given.
//! Every field is optional; command line flags take precedence.

use crate::search::SearchLimits;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default corpus file, relative to the working directory
pub const DEFAULT_CORPUS: &str = "words.json";

/// Default artifact file, relative to the working directory
pub const DEFAULT_ARTIFACT: &str = "words.db";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Word list consumed by `init`
    #[serde(default = "default_corpus")]
    pub corpus: PathBuf,
    /// Trie artifact written by `init` and read by every query
    #[serde(default = "default_artifact")]
    pub artifact: PathBuf,
    /// Node-visit ceiling for a single search
    #[serde(default)]
    pub max_visits: Option<u64>,
    /// Default cap on the number of words printed
    #[serde(default)]
    pub limit: Option<usize>,
}

fn default_corpus() -> PathBuf {
    PathBuf::from(DEFAULT_CORPUS)
}

fn default_artifact() -> PathBuf {
    PathBuf::from(DEFAULT_ARTIFACT)
}

impl Default for Config {
    fn default() -> Self {
        Config {
            corpus: default_corpus(),
            artifact: default_artifact(),
            max_visits: None,
            limit: None,
        }
    }
}

impl Config {
    /// `~/.config/anagram/config.json`, if a config directory exists
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("anagram").join("config.json"))
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", path.display(), e)))?;

        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load from an explicit path, or the default location
    ///
    /// An explicit path must exist; the default location is optional.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            Some(path) => Self::load(path),
            None => match Self::default_path() {
                Some(path) => Self::load(&path),
                None => Ok(Self::default()),
            },
        }
    }

    /// Save to `path`, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_visits: self.max_visits,
        }
    }
}
