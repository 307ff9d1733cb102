use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::{Client, StatusCode, Url};

use super::error::TranslationError;
use super::response::parse_response;
use crate::config::LanguagePair;

/// Public Google Translate endpoint, `gtx` client, translation text only.
pub const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com/translate_a/single?client=gtx&dt=t";

/// Bytes escaped in query values: everything except `A-Z a-z 0-9 - _ . ~`.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escapes a query value with `%XX` for reserved bytes and `+` for spaces.
fn query_escape(value: &str) -> String {
    // A literal '%' is itself escaped, so "%20" can only come from a space
    utf8_percent_encode(value, QUERY_VALUE)
        .to_string()
        .replace("%20", "+")
}

pub struct TranslationClient {
    client: Client,
    endpoint: String,
}

impl TranslationClient {
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Creates a client for another base URL with the same query contract.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    /// Creates a client around a preconfigured `reqwest::Client`.
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Builds the request URL: endpoint, then `sl`, `tl` and `q`, each
    /// query-escaped.
    pub fn build_url(&self, text: &str, pair: &LanguagePair) -> Result<Url, TranslationError> {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        let raw = format!(
            "{}{separator}sl={}&tl={}&q={}",
            self.endpoint,
            query_escape(&pair.source),
            query_escape(&pair.target),
            query_escape(text),
        );

        Url::parse(&raw).map_err(|_| TranslationError::InvalidEndpoint(self.endpoint.clone()))
    }

    /// Translates `text` with one GET request. No retry, no caching.
    pub async fn translate(
        &self,
        text: &str,
        pair: &LanguagePair,
    ) -> Result<Vec<String>, TranslationError> {
        let url = self.build_url(text, pair)?;
        tracing::debug!(%url, "sending translation request");

        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::debug!(%status, "translation request rejected");
            return Err(TranslationError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        let segments = parse_response(&body)?;

        tracing::debug!(count = segments.len(), "received translation segments");
        Ok(segments)
    }
}

impl Default for TranslationClient {
    fn default() -> Self {
        Self::new()
    }
}
