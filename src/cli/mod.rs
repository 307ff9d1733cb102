//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Command implementations.
pub mod commands;

pub use args::{Args, normalize_legacy_flags};

use crate::translation::TranslationError;

/// Maps an error returned by a command to a process exit code.
///
/// Translation failures carry their own code; anything else is an internal
/// failure.
pub fn exit_code_for(error: &anyhow::Error) -> exitcode::ExitCode {
    error
        .downcast_ref::<TranslationError>()
        .map_or(exitcode::SOFTWARE, TranslationError::exit_code)
}
