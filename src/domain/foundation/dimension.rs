//! Influence dimension catalog (seven scored axes).

use std::fmt;

/// One of the seven named axes contributing to a celebrity's overall rank.
///
/// Six axes score 0-10; `Transhistoricity` (lasting influence across eras)
/// carries extra weight and scores 0-40, so a full scorecard totals 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfluenceDimension {
    Political,
    Strategic,
    Tech,
    Social,
    Economic,
    Cultural,
    Transhistoricity,
}

impl InfluenceDimension {
    /// All dimensions in canonical payload order.
    pub const ALL: [InfluenceDimension; 7] = [
        InfluenceDimension::Political,
        InfluenceDimension::Strategic,
        InfluenceDimension::Tech,
        InfluenceDimension::Social,
        InfluenceDimension::Economic,
        InfluenceDimension::Cultural,
        InfluenceDimension::Transhistoricity,
    ];

    /// Returns the JSON field name for this dimension.
    pub fn key(&self) -> &'static str {
        match self {
            InfluenceDimension::Political => "political",
            InfluenceDimension::Strategic => "strategic",
            InfluenceDimension::Tech => "tech",
            InfluenceDimension::Social => "social",
            InfluenceDimension::Economic => "economic",
            InfluenceDimension::Cultural => "cultural",
            InfluenceDimension::Transhistoricity => "transhistoricity",
        }
    }

    /// Returns the score ceiling for this dimension.
    pub fn max_score(&self) -> u8 {
        match self {
            InfluenceDimension::Transhistoricity => 40,
            _ => 10,
        }
    }
}

impl fmt::Display for InfluenceDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
