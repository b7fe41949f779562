//! Normalizes raw model output into a well-formed JSON object.
//!
//! The generative model gives no structural guarantee: its output may wrap a
//! JSON object in prose, truncate it, or contain no JSON at all. Extraction
//! takes the window from the first `{` to the last `}` and parses it; when
//! that fails, a fixed endpoint-specific fallback object is synthesized. The
//! caller always gets an object, never an error.

mod types;

pub use types::{EvaluationResult, ProblemResult};

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

/// Which endpoint invoked the model, selecting the fallback shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Generate,
    Evaluate,
}

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("no JSON object found in model output")]
    NoJson,

    #[error("model output contained malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Attempts to extract the JSON object embedded in raw model output.
///
/// The parse candidate is the substring from the first `{` to the last `}`
/// inclusive. The parsed object is returned verbatim; no validation against
/// the endpoint's response schema is performed.
pub fn try_extract_json(text: &str) -> std::result::Result<Map<String, Value>, ExtractionError> {
    let start = text.find('{').ok_or(ExtractionError::NoJson)?;
    let end = text.rfind('}').ok_or(ExtractionError::NoJson)?;
    if end < start {
        return Err(ExtractionError::NoJson);
    }

    let candidate = &text[start..=end];
    Ok(serde_json::from_str(candidate)?)
}

/// Builds the fixed fallback object for the given endpoint kind.
pub fn synthesize_fallback(kind: EndpointKind, raw_text: &str) -> Value {
    let result = match kind {
        EndpointKind::Generate => serde_json::to_value(ProblemResult::fallback(raw_text)),
        EndpointKind::Evaluate => serde_json::to_value(EvaluationResult::fallback()),
    };
    // The fallback shapes are plain string/number fields; serializing them
    // cannot fail.
    result.unwrap_or(Value::Null)
}

/// Extraction with fallback: the full normalization contract. Raw text in,
/// JSON object out, never an error. Every fallback emits a warning record.
pub fn normalize(kind: EndpointKind, raw_text: &str) -> Value {
    match try_extract_json(raw_text) {
        Ok(object) => Value::Object(object),
        Err(e) => {
            warn!(
                "Failed to extract JSON from model output ({}), using fallback response",
                e
            );
            synthesize_fallback(kind, raw_text)
        }
    }
}
