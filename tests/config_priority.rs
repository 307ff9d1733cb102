#![allow(clippy::unwrap_used)]
//! Language pair priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. `-s` / `-t` flags, per side
//! 2. Stored pair in config.json
//! 3. Built-in default pair ("en", "en")
//!
//! Reverse mode swaps the resolved pair after all of the above.

use std::fs;

use gtx_cli::config::{ConfigManager, LanguagePair, resolve_pair};
use tempfile::TempDir;

fn store_with(temp_dir: &TempDir, pair: Option<LanguagePair>) -> ConfigManager {
    let manager = ConfigManager::with_path(temp_dir.path().join("config.json"));
    if let Some(pair) = pair {
        manager.save(&pair).unwrap();
    }
    manager
}

#[test]
fn test_saved_pair_is_loaded_without_flags() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some(LanguagePair::new("fr", "de")));

    assert_eq!(resolve_pair(None, None, &store), LanguagePair::new("fr", "de"));
}

#[test]
fn test_missing_config_uses_builtin_default() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, None);

    assert_eq!(resolve_pair(None, None, &store), LanguagePair::new("en", "en"));
}

#[test]
fn test_source_flag_overrides_stored_source_only() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some(LanguagePair::new("fr", "de")));

    assert_eq!(
        resolve_pair(Some("ja"), None, &store),
        LanguagePair::new("ja", "de")
    );
}

#[test]
fn test_target_flag_overrides_stored_target_only() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some(LanguagePair::new("fr", "de")));

    assert_eq!(
        resolve_pair(None, Some("es"), &store),
        LanguagePair::new("fr", "es")
    );
}

#[test]
fn test_both_flags_override_everything() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some(LanguagePair::new("fr", "de")));

    assert_eq!(
        resolve_pair(Some("ko"), Some("zh-TW"), &store),
        LanguagePair::new("ko", "zh-TW")
    );
}

#[test]
fn test_corrupt_config_falls_back_to_default_pair() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, None);
    fs::write(store.config_path(), "{\"sourceLang\": \"fr\",").unwrap();

    assert_eq!(
        resolve_pair(None, Some("it"), &store),
        LanguagePair::new("en", "it")
    );
}

#[test]
fn test_reverse_swaps_stored_pair() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some(LanguagePair::new("en", "fr")));

    let pair = resolve_pair(None, None, &store).reversed();

    assert_eq!(pair, LanguagePair::new("fr", "en"));
}

#[test]
fn test_reverse_applies_after_flag_override() {
    let temp_dir = TempDir::new().unwrap();
    let store = store_with(&temp_dir, Some(LanguagePair::new("en", "fr")));

    let pair = resolve_pair(None, Some("de"), &store).reversed();

    assert_eq!(pair, LanguagePair::new("de", "en"));
}
