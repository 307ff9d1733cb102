use std::fmt;

/// Language code used for both sides when nothing is stored.
pub const DEFAULT_LANGUAGE: &str = "en";

/// The (source, target) language codes of a translation request.
///
/// Codes are passed through to the endpoint as-is; they are never checked
/// against a list of known languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Returns the pair with source and target swapped.
    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// Returns `true` when both codes are non-empty.
    pub fn is_complete(&self) -> bool {
        !self.source.is_empty() && !self.target.is_empty()
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE, DEFAULT_LANGUAGE)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}
