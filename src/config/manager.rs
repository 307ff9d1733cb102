use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::pair::LanguagePair;
use crate::fs::atomic_write;

/// File name of the persisted record, relative to the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Errors raised while reading or writing the persisted record.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config file {} is missing '{key}'", .path.display())]
    Incomplete { path: PathBuf, key: &'static str },

    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to write config file {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

/// Key of the source language in `config.json`.
const SOURCE_KEY: &str = "sourceLang";

/// Key of the target language in `config.json`.
const TARGET_KEY: &str = "targetLang";

/// On-disk shape of the persisted language pair, as written by `save`.
///
/// Corresponds to `config.json`: `{"sourceLang": "..", "targetLang": ".."}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRecord<'a> {
    pub source_lang: &'a str,
    pub target_lang: &'a str,
}

impl<'a> From<&'a LanguagePair> for ConfigRecord<'a> {
    fn from(pair: &'a LanguagePair) -> Self {
        Self {
            source_lang: &pair.source,
            target_lang: &pair.target,
        }
    }
}

/// Manages loading and saving the default language pair.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a manager for `config.json` in the working directory.
    pub fn new() -> Self {
        Self::with_path(CONFIG_FILE)
    }

    /// Creates a manager for an explicit file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Loads the stored pair, substituting the default pair on any failure.
    ///
    /// A missing, unreadable, malformed or incomplete file never blocks
    /// startup; the caller always gets a complete pair.
    pub fn load(&self) -> LanguagePair {
        match self.try_load() {
            Ok(pair) => pair,
            Err(e) => {
                tracing::debug!("using default language pair: {e}");
                LanguagePair::default()
            }
        }
    }

    pub fn try_load(&self) -> Result<LanguagePair, ConfigError> {
        let contents = fs::read_to_string(&self.config_path).map_err(|source| ConfigError::Read {
            path: self.config_path.clone(),
            source,
        })?;

        // Only a flat object of strings is a record; arrays and nested values are rejected
        let mut record: HashMap<String, String> =
            serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: self.config_path.clone(),
                source,
            })?;

        let source = self.required(record.remove(SOURCE_KEY), SOURCE_KEY)?;
        let target = self.required(record.remove(TARGET_KEY), TARGET_KEY)?;

        Ok(LanguagePair { source, target })
    }

    /// Overwrites the file with the given pair.
    pub fn save(&self, pair: &LanguagePair) -> Result<(), ConfigError> {
        let mut contents =
            serde_json::to_string(&ConfigRecord::from(pair)).map_err(ConfigError::Serialize)?;
        contents.push('\n');

        atomic_write(&self.config_path, &contents).map_err(|source| ConfigError::Write {
            path: self.config_path.clone(),
            source,
        })?;

        tracing::debug!("saved default pair {pair} to {}", self.config_path.display());
        Ok(())
    }

    fn required(&self, value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
        value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| ConfigError::Incomplete {
                path: self.config_path.clone(),
                key,
            })
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves the effective pair from CLI overrides and the stored pair.
///
/// The store is only consulted when at least one side is missing. A supplied
/// override always wins for its own side.
pub fn resolve_pair(
    source: Option<&str>,
    target: Option<&str>,
    store: &ConfigManager,
) -> LanguagePair {
    if let (Some(source), Some(target)) = (source, target) {
        return LanguagePair::new(source, target);
    }

    let stored = store.load();
    LanguagePair {
        source: source.map_or(stored.source, str::to_string),
        target: target.map_or(stored.target, str::to_string),
    }
}
