//! # gtx - Google Translate from the terminal
//!
//! `gtx` sends text to the public Google Translate `gtx` endpoint and prints
//! each translated segment on its own line. A default language pair can be
//! stored in a local `config.json` so later calls need no `-s`/`-t` flags.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate with an explicit pair
//! gtx -s en -t fr Hello world
//!
//! # Store fr -> de as the default pair
//! gtx -s fr -t de --set
//!
//! # Use the stored pair, reversed (de -> fr)
//! gtx --reverse Guten Morgen
//! ```
//!
//! ## Configuration
//!
//! The default pair lives in `config.json` in the working directory:
//!
//! ```json
//! {"sourceLang":"fr","targetLang":"de"}
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Persisted default language pair.
pub mod config;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, stderr routing).
pub mod output;

/// Translation client for the Google Translate `gtx` endpoint.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
