mod client;
mod error;
mod language;
mod response;

pub use client::{DEFAULT_ENDPOINT, TranslationClient};
pub use error::TranslationError;
pub use language::{KNOWN_LANGUAGES, language_name, print_languages};
pub use response::{extract_segments, parse_response};
