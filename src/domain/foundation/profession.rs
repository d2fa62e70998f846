//! Profession classification (closed set).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of professions a generated profile may carry.
///
/// Model output frequently invents values outside this set ("doctor",
/// "philosopher"); those normalize to `Influencer` rather than failing
/// the record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profession {
    Leader,
    Politician,
    Commander,
    Entrepreneur,
    Investor,
    Scholar,
    Artist,
    Author,
    Actor,
    #[default]
    Influencer,
    Athlete,
}

impl Profession {
    /// Every member of the closed set.
    pub const ALL: [Profession; 11] = [
        Profession::Leader,
        Profession::Politician,
        Profession::Commander,
        Profession::Entrepreneur,
        Profession::Investor,
        Profession::Scholar,
        Profession::Artist,
        Profession::Author,
        Profession::Actor,
        Profession::Influencer,
        Profession::Athlete,
    ];

    /// Returns the wire value for this profession.
    pub fn key(&self) -> &'static str {
        match self {
            Profession::Leader => "leader",
            Profession::Politician => "politician",
            Profession::Commander => "commander",
            Profession::Entrepreneur => "entrepreneur",
            Profession::Investor => "investor",
            Profession::Scholar => "scholar",
            Profession::Artist => "artist",
            Profession::Author => "author",
            Profession::Actor => "actor",
            Profession::Influencer => "influencer",
            Profession::Athlete => "athlete",
        }
    }

    /// Parses a wire value, normalizing anything outside the set to the
    /// default `Influencer`. Membership is exact after trimming.
    pub fn from_wire(value: &str) -> Self {
        let trimmed = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.key() == trimmed)
            .unwrap_or_default()
    }
}

impl fmt::Display for Profession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
