//! Extraction entry points, one per payload shape.

use serde_json::Value;

use super::errors::ExtractionResult;
use super::fallback;
use super::normalizer::{self, Candidate};
use super::repair;
use super::validator;
use crate::domain::profile::{GeneratedInfluence, GeneratedProfile, ProfileWithInfluence};

/// Which result form the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    Profile,
    ProfileWithInfluence,
    InfluenceOnly,
}

/// Named recovery strategy for malformed model output.
///
/// The two strategies are deliberately kept apart: merging them would lose
/// either the regex path's tolerance of truncation or the strict path's
/// whole-object field defaulting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryStrategy {
    /// Normalize, balance quotes/braces, then one strict parse.
    StrictWithRepair,
    /// Locate each field by pattern; JSON syntax is never required.
    RegexOnly,
}

impl PayloadShape {
    /// Returns the strategy this shape extracts with. The mapping is
    /// static; nothing about the text itself changes it.
    pub fn strategy(&self) -> RecoveryStrategy {
        match self {
            PayloadShape::Profile | PayloadShape::ProfileWithInfluence => {
                RecoveryStrategy::StrictWithRepair
            }
            PayloadShape::InfluenceOnly => RecoveryStrategy::RegexOnly,
        }
    }
}

/// Extracts a biography profile from raw model output.
pub fn extract_profile(raw: &str) -> ExtractionResult<GeneratedProfile> {
    let value = strict_with_repair(raw)?;
    validator::validate_profile(&value)
}

/// Extracts a biography profile together with its influence scorecard.
/// The scorecard is required; a record without an `influence` object
/// fails as a whole.
pub fn extract_profile_with_influence(raw: &str) -> ExtractionResult<ProfileWithInfluence> {
    let value = strict_with_repair(raw)?;
    let profile = validator::validate_profile(&value)?;
    let influence = validator::validate_influence(&value)?;
    Ok(ProfileWithInfluence { profile, influence })
}

/// Extracts an influence scorecard alone, tolerating output the strict
/// parser could never recover. Every leaf defaults independently, so this
/// entry point cannot fail; the worst input yields an all-zero scorecard.
pub fn extract_influence(raw: &str) -> ExtractionResult<GeneratedInfluence> {
    let collapsed = normalizer::collapse_whitespace(raw);
    let scores = fallback::extract_dimensions(&collapsed);
    Ok(GeneratedInfluence::from_scores(scores))
}

/// The StrictWithRepair text stage: isolate the candidate, balance it if
/// it was cut off before a closing brace, parse once.
fn strict_with_repair(raw: &str) -> ExtractionResult<Value> {
    let candidate = match normalizer::isolate_candidate(raw)? {
        Candidate::Closed(text) => text,
        Candidate::Truncated(text) => repair::balance_candidate(&text),
    };
    validator::parse_candidate(&candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::extraction::ExtractError;
    use crate::domain::foundation::{Profession, Rank};

    const FULL_RESPONSE: &str = r#"Here is the profile:

```json
{
  "bio": "French military leader and emperor.",
  "profession": "commander",
  "title": "Emperor of the French",
  "nationality": "French",
  "birthDate": "1769-08-15",
  "deathDate": "1821-05-05",
  "quotes": "Impossible is a word to be found only in the dictionary of fools.",
  "fullname": "Napoleon Bonaparte",
  "influence": {
    "political": {"score": 10, "exp": "redrew the map of Europe"},
    "strategic": {"score": 10, "exp": "campaigns still taught"},
    "tech": {"score": 3, "exp": "modernized administration"},
    "social": {"score": 7, "exp": "Napoleonic Code"},
    "economic": {"score": 6, "exp": "Bank of France"},
    "cultural": {"score": 7, "exp": "enduring icon"},
    "transhistoricity": {"score": 35, "exp": "two centuries of study"}
  }
}
```

Hope this helps!"#;

    #[test]
    fn shape_strategy_mapping_is_static() {
        assert_eq!(
            PayloadShape::Profile.strategy(),
            RecoveryStrategy::StrictWithRepair
        );
        assert_eq!(
            PayloadShape::ProfileWithInfluence.strategy(),
            RecoveryStrategy::StrictWithRepair
        );
        assert_eq!(
            PayloadShape::InfluenceOnly.strategy(),
            RecoveryStrategy::RegexOnly
        );
    }

    #[test]
    fn extracts_profile_from_fenced_response_with_prose() {
        let profile = extract_profile(FULL_RESPONSE).unwrap();
        assert_eq!(profile.bio, "French military leader and emperor.");
        assert_eq!(profile.profession, Profession::Commander);
        assert_eq!(profile.fullname, "Napoleon Bonaparte");
    }

    #[test]
    fn extracts_combined_payload_with_rank() {
        let combined = extract_profile_with_influence(FULL_RESPONSE).unwrap();
        assert_eq!(combined.influence.total_score, 78);
        assert_eq!(combined.influence.rank, Rank::B);
        assert_eq!(combined.profile.profession, Profession::Commander);
    }

    #[test]
    fn repairs_dangling_string_profile() {
        let raw = "{\"bio\": \"Cut off mid-sentence";
        let profile = extract_profile(raw).unwrap();
        assert_eq!(profile.bio, "Cut off mid-sentence");
        assert_eq!(profile.profession, Profession::Influencer);
    }

    #[test]
    fn unparseable_profile_fails_with_fixed_message() {
        let result = extract_profile("{\"bio\": }");
        assert_eq!(result, Err(ExtractError::UnrecoverableSyntax));
        assert_eq!(
            result.unwrap_err().to_string(),
            "cannot parse AI response"
        );
    }

    #[test]
    fn braceless_response_fails_as_empty_candidate() {
        assert_eq!(
            extract_profile("I cannot help with that."),
            Err(ExtractError::EmptyCandidate)
        );
    }

    #[test]
    fn combined_payload_without_influence_fails() {
        let raw = "{\"bio\": \"Some life story\", \"profession\": \"artist\"}";
        assert_eq!(
            extract_profile_with_influence(raw),
            Err(ExtractError::missing("influence"))
        );
    }

    #[test]
    fn influence_only_survives_truncation() {
        let raw = r#"{"political": {"score": 8, "exp": "head of state"},
"strategic": {"score": 7, "exp": "long game"},
"tech": {"score": 1, "exp": "none"},
"social": {"score": 6, "exp": "crowds"},
"economic": {"score": 5, "exp": "trade"},
"cultural": {"score": 4, "exp": "portraits"},
"transhist"#;

        let influence = extract_influence(raw).unwrap();
        assert_eq!(influence.political.score, 8);
        assert_eq!(influence.transhistoricity.score, 0);
        assert_eq!(influence.transhistoricity.exp, "");
        assert_eq!(influence.total_score, 31);
        assert_eq!(influence.rank, Rank::D);
    }

    #[test]
    fn both_strategies_clamp_oversized_numerals_alike() {
        let raw = r#"{"bio": "b", "influence": {
            "political": {"score": 99999999999999999999, "exp": "x"},
            "transhistoricity": {"score": 99999999999999999999, "exp": "y"}
        }}"#;

        let strict = extract_profile_with_influence(raw).unwrap().influence;
        let fallback = extract_influence(raw).unwrap();

        assert_eq!(strict.political.score, 10);
        assert_eq!(fallback.political.score, 10);
        assert_eq!(strict.transhistoricity.score, 40);
        assert_eq!(fallback.transhistoricity.score, 40);
    }

    #[test]
    fn influence_only_never_fails() {
        let influence = extract_influence("no json here at all").unwrap();
        assert_eq!(influence.total_score, 0);
        assert_eq!(influence.rank, Rank::D);
    }

    #[test]
    fn strict_extraction_is_idempotent_on_its_own_output() {
        let first = extract_profile_with_influence(FULL_RESPONSE).unwrap();
        let reserialized = serde_json::to_string(&first).unwrap();
        let second = extract_profile_with_influence(&reserialized).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn influence_extraction_is_idempotent_on_its_own_output() {
        let first = extract_influence(FULL_RESPONSE).unwrap();
        let reserialized = serde_json::to_string(&first).unwrap();
        let second = extract_influence(&reserialized).unwrap();
        assert_eq!(first, second);
    }
}
