//! Influence score leaf (clamped score + explanation text).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::InfluenceDimension;

/// A single dimension's score and explanation.
///
/// Invariant: `score` never exceeds the ceiling of the dimension it was
/// extracted for. Both extraction strategies build leaves through the
/// constructors here, so out-of-range and wrong-typed model output is
/// corrected in exactly one place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfluenceScore {
    pub score: u8,
    pub exp: String,
}

impl InfluenceScore {
    /// Builds a leaf from an untyped JSON value, typically
    /// `influence.<dimension>` out of a parsed model response.
    ///
    /// `score` accepts JSON numbers and numeric strings, defaulting to 0 on
    /// anything else, then clamps into `[0, ceiling]`. `exp` keeps string
    /// values only, defaulting to empty.
    pub fn from_value(dimension: InfluenceDimension, raw: Option<&Value>) -> Self {
        let score = raw
            .and_then(|v| v.get("score"))
            .and_then(coerce_number);
        let exp = raw
            .and_then(|v| v.get("exp"))
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();
        Self {
            score: clamp_score(dimension, score),
            exp,
        }
    }

    /// Builds a leaf from independently located parts, clamping the score
    /// the same way as [`InfluenceScore::from_value`]. A missing score
    /// defaults to 0, a missing explanation to empty.
    pub fn from_parts(
        dimension: InfluenceDimension,
        score: Option<f64>,
        exp: Option<&str>,
    ) -> Self {
        Self {
            score: clamp_score(dimension, score),
            exp: exp.unwrap_or("").to_string(),
        }
    }

}

/// Clamps a coerced score into `[0, ceiling]` for the dimension, truncating
/// fractional values toward zero. `None` (absent or wrong-typed) becomes 0.
fn clamp_score(dimension: InfluenceDimension, value: Option<f64>) -> u8 {
    let max = dimension.max_score();
    match value {
        Some(v) if v.is_finite() && v > 0.0 => {
            if v >= f64::from(max) {
                max
            } else {
                v as u8
            }
        }
        _ => 0,
    }
}

/// Coerces a JSON value to a number: numbers pass through, numeric strings
/// parse, everything else is rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_reads_score_and_exp() {
        let raw = json!({"score": 7, "exp": "shaped modern policy"});
        let leaf = InfluenceScore::from_value(InfluenceDimension::Political, Some(&raw));
        assert_eq!(leaf.score, 7);
        assert_eq!(leaf.exp, "shaped modern policy");
    }

    #[test]
    fn from_value_clamps_over_ceiling() {
        let raw = json!({"score": 55, "exp": "x"});
        let leaf = InfluenceScore::from_value(InfluenceDimension::Social, Some(&raw));
        assert_eq!(leaf.score, 10);

        let leaf = InfluenceScore::from_value(InfluenceDimension::Transhistoricity, Some(&raw));
        assert_eq!(leaf.score, 40);
    }

    #[test]
    fn from_value_zeroes_negative_scores() {
        let raw = json!({"score": -3, "exp": "x"});
        let leaf = InfluenceScore::from_value(InfluenceDimension::Economic, Some(&raw));
        assert_eq!(leaf.score, 0);
    }

    #[test]
    fn from_value_coerces_numeric_strings() {
        let raw = json!({"score": "8", "exp": "x"});
        let leaf = InfluenceScore::from_value(InfluenceDimension::Cultural, Some(&raw));
        assert_eq!(leaf.score, 8);
    }

    #[test]
    fn from_value_defaults_wrong_typed_score() {
        for raw in [
            json!({"score": true, "exp": "x"}),
            json!({"score": null, "exp": "x"}),
            json!({"score": [7], "exp": "x"}),
            json!({"score": "eight", "exp": "x"}),
        ] {
            let leaf = InfluenceScore::from_value(InfluenceDimension::Tech, Some(&raw));
            assert_eq!(leaf.score, 0);
        }
    }

    #[test]
    fn from_value_truncates_fractional_scores() {
        let raw = json!({"score": 6.9, "exp": "x"});
        let leaf = InfluenceScore::from_value(InfluenceDimension::Strategic, Some(&raw));
        assert_eq!(leaf.score, 6);
    }

    #[test]
    fn from_value_defaults_wrong_typed_exp() {
        let raw = json!({"score": 5, "exp": 12});
        let leaf = InfluenceScore::from_value(InfluenceDimension::Political, Some(&raw));
        assert_eq!(leaf.exp, "");
    }

    #[test]
    fn from_value_handles_absent_leaf() {
        let leaf = InfluenceScore::from_value(InfluenceDimension::Political, None);
        assert_eq!(leaf, InfluenceScore::default());
    }

    #[test]
    fn from_parts_defaults_missing_pieces() {
        let leaf = InfluenceScore::from_parts(InfluenceDimension::Tech, None, None);
        assert_eq!(leaf.score, 0);
        assert_eq!(leaf.exp, "");
    }

    #[test]
    fn from_parts_clamps_like_from_value() {
        let leaf = InfluenceScore::from_parts(InfluenceDimension::Tech, Some(99.0), Some("chips"));
        assert_eq!(leaf.score, 10);
        assert_eq!(leaf.exp, "chips");

        let leaf = InfluenceScore::from_parts(InfluenceDimension::Tech, Some(-4.0), None);
        assert_eq!(leaf.score, 0);
    }

    #[test]
    fn serializes_with_short_field_names() {
        let leaf = InfluenceScore {
            score: 9,
            exp: "wrote the standard texts".to_string(),
        };
        let json = serde_json::to_value(&leaf).unwrap();
        assert_eq!(json, json!({"score": 9, "exp": "wrote the standard texts"}));
    }
}
