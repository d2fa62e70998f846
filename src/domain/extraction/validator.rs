//! Strict parsing and per-shape field validation.
//!
//! One parse attempt, then typed probing of the untyped `Value`: required
//! fields fail the whole record, optional fields trim or default, scores
//! funnel through the shared clamping constructor.

use serde_json::Value;

use super::errors::{ExtractError, ExtractionResult};
use crate::domain::foundation::{InfluenceDimension, InfluenceScore, Profession};
use crate::domain::profile::{GeneratedInfluence, GeneratedProfile};

/// Performs the single strict parse attempt. Failure is final for the
/// profile modes; this path never cascades to the regex fallback.
pub(crate) fn parse_candidate(candidate: &str) -> ExtractionResult<Value> {
    serde_json::from_str(candidate).map_err(|_| ExtractError::UnrecoverableSyntax)
}

/// Validates the biography fields of a parsed object.
pub(crate) fn validate_profile(value: &Value) -> ExtractionResult<GeneratedProfile> {
    let bio = required_string(value, "bio")?;
    let profession = value
        .get("profession")
        .and_then(Value::as_str)
        .map(Profession::from_wire)
        .unwrap_or_default();

    Ok(GeneratedProfile {
        bio,
        profession,
        title: optional_string(value, "title"),
        nationality: optional_string(value, "nationality"),
        birth_date: optional_string(value, "birthDate"),
        death_date: optional_string(value, "deathDate"),
        quotes: optional_string(value, "quotes"),
        fullname: optional_string(value, "fullname"),
    })
}

/// Validates the `influence` sub-object of a parsed record. An absent or
/// non-object value fails the whole record; individual leaves never do.
pub(crate) fn validate_influence(value: &Value) -> ExtractionResult<GeneratedInfluence> {
    let influence = value
        .get("influence")
        .filter(|v| v.is_object())
        .ok_or(ExtractError::missing("influence"))?;

    let scores = InfluenceDimension::ALL
        .map(|dimension| InfluenceScore::from_value(dimension, influence.get(dimension.key())));
    Ok(GeneratedInfluence::from_scores(scores))
}

fn required_string(value: &Value, field: &'static str) -> ExtractionResult<String> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or(ExtractError::missing(field))
}

fn optional_string(value: &Value, field: &str) -> String {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::trim)
        .unwrap_or("")
        .to_string()
}
