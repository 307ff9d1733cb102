//! Persisted default language pair.

mod manager;
mod pair;

pub use manager::{CONFIG_FILE, ConfigError, ConfigManager, ConfigRecord, resolve_pair};
pub use pair::{DEFAULT_LANGUAGE, LanguagePair};
