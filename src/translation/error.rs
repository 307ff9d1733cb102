use thiserror::Error;

/// Failure modes of a single translation request.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Transport failure (DNS, connect, timeout) or an unreadable body.
    #[error("HTTP request error")]
    Network(#[from] reqwest::Error),

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(u16),

    /// The body is not JSON, or its outermost value is not an array.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A 200 response that contained no usable segment.
    #[error("translation not found")]
    NoTranslationFound,

    #[error("invalid endpoint URL '{0}'")]
    InvalidEndpoint(String),
}

impl TranslationError {
    /// Process exit code reported for this error.
    pub const fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Network(_) => exitcode::UNAVAILABLE,
            Self::UnexpectedStatus(_) => exitcode::PROTOCOL,
            Self::MalformedResponse(_) | Self::NoTranslationFound => exitcode::DATAERR,
            Self::InvalidEndpoint(_) => exitcode::CONFIG,
        }
    }
}
