use anyhow::{Result, ensure};
use std::io::{self, Write};
use std::path::PathBuf;

use crate::config::{ConfigManager, LanguagePair, resolve_pair};
use crate::translation::{TranslationClient, language_name};
use crate::ui::{Spinner, Style};
use crate::{status, warn};

/// Message shown when no text is given.
pub const NO_TEXT_PROMPT: &str = "Please provide text to translate.";

/// Prefix printed before every translated segment.
pub const SEGMENT_MARKER: &str = "- ";

#[derive(Debug, Default)]
pub struct TranslateOptions {
    pub text: Vec<String>,
    pub source: Option<String>,
    pub target: Option<String>,
    pub reverse: bool,
    pub set: bool,
    pub config: Option<PathBuf>,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let client = TranslationClient::new();
    run_translate_with(options, &client).await
}

/// Runs a translation with an explicit client.
pub async fn run_translate_with(options: TranslateOptions, client: &TranslationClient) -> Result<()> {
    let store = options
        .config
        .clone()
        .map_or_else(ConfigManager::new, ConfigManager::with_path);

    let pair = effective_pair(&options, &store);

    if options.text.is_empty() {
        println!("{NO_TEXT_PROMPT}");
        return Ok(());
    }

    let pair = if options.reverse { pair.reversed() } else { pair };
    ensure!(
        pair.is_complete(),
        "Both source and target languages must be set (got {pair})"
    );

    let text = options.text.join(" ");

    let spinner = Spinner::new(&format!("Translating {}...", describe_pair(&pair)));
    let result = client.translate(&text, &pair).await;
    spinner.stop();

    let segments = result?;
    write_segments(&mut io::stdout().lock(), &segments)?;

    Ok(())
}

/// Resolves the pair and persists it first when `--set` is given.
///
/// A failed save is reported and the run continues with the resolved pair.
fn effective_pair(options: &TranslateOptions, store: &ConfigManager) -> LanguagePair {
    let pair = resolve_pair(options.source.as_deref(), options.target.as_deref(), store);

    if options.set {
        match store.save(&pair) {
            Ok(()) => {
                status!("{} Default languages set to {pair}", Style::success("✓"));
            }
            Err(e) => {
                warn!("{} {e}", Style::warning("Warning:"));
            }
        }
    }

    pair
}

/// Writes each segment on its own line, prefixed with the segment marker.
pub fn write_segments<W: Write>(out: &mut W, segments: &[String]) -> io::Result<()> {
    for segment in segments {
        writeln!(out, "{SEGMENT_MARKER}{segment}")?;
    }
    out.flush()
}

fn describe_pair(pair: &LanguagePair) -> String {
    let name = |code: &str| language_name(code).map_or_else(|| code.to_string(), str::to_string);
    format!("{} → {}", name(&pair.source), name(&pair.target))
}
