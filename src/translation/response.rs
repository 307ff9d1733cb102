//! Decoding of the `translate_a/single` response body.
//!
//! The endpoint answers with an unversioned, positional JSON array:
//!
//! ```text
//! [[["hola","hello",null,null], ["adios","bye",null,null]], null, "en", ...]
//!   ^ sentence entries; element 0 of each is the translated segment
//! ```
//!
//! Only element 0 of the outer array and element 0 of each sentence entry are
//! read. Entries of any other shape are skipped.

use serde_json::Value;

use super::error::TranslationError;

/// Parses a response body into translated segments.
///
/// # Errors
///
/// `MalformedResponse` when the body is not JSON or not an array,
/// `NoTranslationFound` when no segment could be extracted.
pub fn parse_response(body: &[u8]) -> Result<Vec<String>, TranslationError> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| TranslationError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let Value::Array(top) = value else {
        return Err(TranslationError::MalformedResponse(
            "top-level value is not an array".to_string(),
        ));
    };

    let segments = extract_segments(&top);
    if segments.is_empty() {
        return Err(TranslationError::NoTranslationFound);
    }

    Ok(segments)
}

/// Collects element 0 of every well-formed sentence entry, in order.
pub fn extract_segments(top: &[Value]) -> Vec<String> {
    let Some(Value::Array(sentences)) = top.first() else {
        return Vec::new();
    };

    sentences
        .iter()
        .filter_map(|sentence| match sentence {
            Value::Array(fields) => fields.first().and_then(Value::as_str),
            _ => None,
        })
        .map(str::to_string)
        .collect()
}
