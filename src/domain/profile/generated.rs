//! Generated payload types and score aggregation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{InfluenceDimension, InfluenceScore, Profession, Rank};

/// Validated celebrity biography extracted from a model response.
///
/// `bio` is the only required field; the rest default to empty strings when
/// the model omits them or emits the wrong type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedProfile {
    pub bio: String,
    #[serde(default)]
    pub profession: Profession,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub nationality: String,
    #[serde(default)]
    pub birth_date: String,
    #[serde(default)]
    pub death_date: String,
    #[serde(default)]
    pub quotes: String,
    #[serde(default)]
    pub fullname: String,
}

/// Seven-dimension influence scorecard with derived total and rank.
///
/// Constructed only through [`GeneratedInfluence::from_scores`]; the total
/// and rank are never set independently of the leaves.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedInfluence {
    pub political: InfluenceScore,
    pub strategic: InfluenceScore,
    pub tech: InfluenceScore,
    pub social: InfluenceScore,
    pub economic: InfluenceScore,
    pub cultural: InfluenceScore,
    pub transhistoricity: InfluenceScore,
    pub total_score: u8,
    pub rank: Rank,
}

impl GeneratedInfluence {
    /// Aggregates seven leaves, ordered as [`InfluenceDimension::ALL`], into
    /// the full scorecard: clamps each score to its dimension ceiling, sums
    /// into the total, and maps the total to a rank tier.
    ///
    /// Both extraction strategies build their scorecards here, so the tier
    /// boundary semantics cannot drift between them.
    pub fn from_scores(scores: [InfluenceScore; 7]) -> Self {
        let mut leaves = scores;
        for (leaf, dimension) in leaves.iter_mut().zip(InfluenceDimension::ALL) {
            leaf.score = leaf.score.min(dimension.max_score());
        }
        // Ceilings sum to 100, so the total fits u8 after clamping.
        let total_score: u8 = leaves.iter().map(|leaf| leaf.score).sum();
        let rank = Rank::from_total(total_score);
        let [political, strategic, tech, social, economic, cultural, transhistoricity] = leaves;
        Self {
            political,
            strategic,
            tech,
            social,
            economic,
            cultural,
            transhistoricity,
            total_score,
            rank,
        }
    }
}

/// Combined payload for the profile+influence generation mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileWithInfluence {
    #[serde(flatten)]
    pub profile: GeneratedProfile,
    pub influence: GeneratedInfluence,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn leaf(score: u8) -> InfluenceScore {
        InfluenceScore {
            score,
            exp: String::new(),
        }
    }

    fn leaves(score: u8) -> [InfluenceScore; 7] {
        std::array::from_fn(|_| leaf(score))
    }

    #[test]
    fn from_scores_sums_and_ranks() {
        let influence = GeneratedInfluence::from_scores([
            leaf(10),
            leaf(10),
            leaf(10),
            leaf(10),
            leaf(10),
            leaf(10),
            leaf(40),
        ]);
        assert_eq!(influence.total_score, 100);
        assert_eq!(influence.rank, Rank::S);
    }

    #[test]
    fn from_scores_ranks_low_totals_d() {
        let influence = GeneratedInfluence::from_scores([
            leaf(3),
            leaf(0),
            leaf(1),
            leaf(0),
            leaf(0),
            leaf(2),
            leaf(5),
        ]);
        assert_eq!(influence.total_score, 11);
        assert_eq!(influence.rank, Rank::D);
    }

    #[test]
    fn from_scores_clamps_leaves_to_their_ceilings() {
        let influence = GeneratedInfluence::from_scores([
            leaf(200),
            leaf(0),
            leaf(0),
            leaf(0),
            leaf(0),
            leaf(0),
            leaf(200),
        ]);
        assert_eq!(influence.political.score, 10);
        assert_eq!(influence.transhistoricity.score, 40);
        assert_eq!(influence.total_score, 50);
    }

    #[test]
    fn from_scores_keeps_leaf_order() {
        let mut scores = [
            leaf(1),
            leaf(2),
            leaf(3),
            leaf(4),
            leaf(5),
            leaf(6),
            leaf(7),
        ];
        scores[0].exp = "political note".to_string();
        let influence = GeneratedInfluence::from_scores(scores);
        assert_eq!(influence.political.score, 1);
        assert_eq!(influence.political.exp, "political note");
        assert_eq!(influence.cultural.score, 6);
        assert_eq!(influence.transhistoricity.score, 7);
    }

    #[test]
    fn influence_serializes_with_camel_case_total() {
        let influence = GeneratedInfluence::from_scores(leaves(0));
        let value = serde_json::to_value(&influence).unwrap();
        assert_eq!(value["totalScore"], json!(0));
        assert_eq!(value["rank"], json!("D"));
        assert!(value.get("total_score").is_none());
    }

    #[test]
    fn profile_serializes_with_camel_case_dates() {
        let profile = GeneratedProfile {
            bio: "A short life".to_string(),
            birth_date: "1867-11-07".to_string(),
            ..GeneratedProfile::default()
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["birthDate"], json!("1867-11-07"));
        assert_eq!(value["profession"], json!("influencer"));
        assert!(value.get("birth_date").is_none());
    }

    #[test]
    fn combined_payload_flattens_profile_fields() {
        let combined = ProfileWithInfluence {
            profile: GeneratedProfile {
                bio: "bio text".to_string(),
                ..GeneratedProfile::default()
            },
            influence: GeneratedInfluence::from_scores(leaves(1)),
        };
        let value = serde_json::to_value(&combined).unwrap();
        assert_eq!(value["bio"], json!("bio text"));
        assert!(value["influence"]["political"].is_object());
        assert!(value.get("profile").is_none());
    }
}
