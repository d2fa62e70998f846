//! Extraction failure taxonomy.

use thiserror::Error;

/// Result alias returned by every extraction entry point.
pub type ExtractionResult<T> = Result<T, ExtractError>;

/// Fatal extraction failures surfaced to callers.
///
/// Non-fatal conditions never appear here: unknown professions default to
/// `influencer`, out-of-range or wrong-typed scores clamp or zero, and
/// unmatched fallback patterns yield empty leaves. Those corrections are
/// silent; the caller cannot distinguish a defaulted field from a
/// model-provided one that happened to equal the default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    /// No JSON-like substring could be located in the normalized text.
    #[error("no JSON object found in AI response")]
    EmptyCandidate,

    /// A candidate was located but strict parsing failed even after repair.
    #[error("cannot parse AI response")]
    UnrecoverableSyntax,

    /// A required field was absent or empty.
    #[error("missing {field}")]
    MissingRequiredField { field: &'static str },
}

impl ExtractError {
    /// Creates a missing required field error.
    pub fn missing(field: &'static str) -> Self {
        ExtractError::MissingRequiredField { field }
    }
}
