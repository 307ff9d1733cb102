use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gtx")]
#[command(about = "Translate text with Google Translate from the terminal")]
#[command(version)]
pub struct Args {
    /// Text to translate (words are joined with single spaces)
    #[arg(trailing_var_arg = true)]
    pub text: Vec<String>,

    /// Source language code (e.g., en, ja, zh-CN)
    #[arg(short = 's', long = "source", value_name = "LANG", value_parser = NonEmptyStringValueParser::new())]
    pub source: Option<String>,

    /// Target language code (e.g., en, ja, zh-CN)
    #[arg(short = 't', long = "target", value_name = "LANG", value_parser = NonEmptyStringValueParser::new())]
    pub target: Option<String>,

    /// Swap source and target languages before translating
    #[arg(short = 'r', long)]
    pub reverse: bool,

    /// Save the source and target languages as the new defaults
    #[arg(long)]
    pub set: bool,

    /// Config file holding the default languages
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress the spinner and status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// List well-known language codes and exit
    #[arg(long)]
    pub languages: bool,
}

impl Args {
    /// Parses arguments after rewriting legacy single-dash flags.
    pub fn parse_normalized() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }
}

/// Flags whose next argument is their value.
const VALUE_FLAGS: &[&str] = &["-s", "-t", "--source", "--target", "--config"];

/// Single-dash long flags and their clap spelling.
const LEGACY_FLAGS: &[(&str, &str)] = &[("-reverse", "--reverse"), ("-set", "--set")];

/// Rewrites `-reverse` and `-set` to `--reverse` and `--set`.
///
/// Only the flag section is rewritten: scanning stops at `--` or at the first
/// positional argument, so the same words inside the text are left alone.
/// The first item is the program name and is passed through.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expecting_value = false;
    let mut in_flags = true;

    for arg in args {
        if !in_flags {
            normalized.push(arg);
            continue;
        }

        if expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(flag) = arg.to_str() else {
            in_flags = false;
            normalized.push(arg);
            continue;
        };

        if flag == "--" || !flag.starts_with('-') || flag == "-" {
            in_flags = false;
        } else if VALUE_FLAGS.contains(&flag) {
            expecting_value = true;
        } else if let Some((_, modern)) = LEGACY_FLAGS.iter().find(|(legacy, _)| *legacy == flag) {
            normalized.push(OsString::from(*modern));
            continue;
        }

        normalized.push(arg);
    }

    normalized
}
