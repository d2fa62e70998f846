//! Regex extraction of influence leaves from unparseable text.
//!
//! The influence payload has many numeric leaves and is the shape most
//! prone to truncation artifacts that defeat brace balancing, so the
//! score-only path never parses JSON. Each dimension is located by its
//! quoted field name and read with two independent searches, one for the
//! score and one for the explanation; a field the text physically lost
//! simply defaults instead of failing the record.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::{InfluenceDimension, InfluenceScore};

struct DimensionPatterns {
    score: Regex,
    exp: Regex,
}

/// Per-dimension search patterns, compiled once. Both are anchored on the
/// quoted field name and bounded by the next `}` so one dimension's block
/// cannot satisfy another's search.
static DIMENSION_PATTERNS: Lazy<HashMap<InfluenceDimension, DimensionPatterns>> =
    Lazy::new(|| {
        InfluenceDimension::ALL
            .iter()
            .map(|&dimension| {
                let key = dimension.key();
                let score = Regex::new(&format!(r#""{key}"[^}}]*?"score"\s*:\s*(-?\d+)"#))
                    .expect("valid score pattern");
                let exp = Regex::new(&format!(r#""{key}"[^}}]*?"exp"\s*:\s*"([^"}}]*)"#))
                    .expect("valid exp pattern");
                (dimension, DimensionPatterns { score, exp })
            })
            .collect()
    });

/// Pulls all seven dimension leaves out of whitespace-collapsed raw text.
///
/// Every leaf resolves independently: an unmatched score pattern defaults
/// to 0, an unmatched exp pattern to empty, and found scores clamp to the
/// dimension ceiling exactly as on the strict path.
pub(crate) fn extract_dimensions(collapsed: &str) -> [InfluenceScore; 7] {
    InfluenceDimension::ALL.map(|dimension| {
        let patterns = &DIMENSION_PATTERNS[&dimension];
        // f64, not i64: numerals past the integer range must still clamp
        // to the ceiling, matching the strict path's coercion.
        let score = patterns
            .score
            .captures(collapsed)
            .and_then(|caps| caps[1].parse::<f64>().ok());
        let exp = patterns
            .exp
            .captures(collapsed)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str());
        InfluenceScore::from_parts(dimension, score, exp)
    })
}
