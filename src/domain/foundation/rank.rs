//! Rank tier derived from a summed influence score.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter rank tier, S highest to D lowest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    S,
    A,
    B,
    C,
    #[default]
    D,
}

impl Rank {
    /// Minimum totals per tier, evaluated highest-first. Totals below every
    /// threshold fall through to `D`.
    const THRESHOLDS: [(u8, Rank); 4] = [
        (90, Rank::S),
        (80, Rank::A),
        (70, Rank::B),
        (60, Rank::C),
    ];

    /// Maps a total score (0-100) to its tier.
    pub fn from_total(total: u8) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(min, _)| total >= *min)
            .map(|(_, rank)| *rank)
            .unwrap_or(Rank::D)
    }

    /// Returns the tier letter.
    pub fn letter(&self) -> &'static str {
        match self {
            Rank::S => "S",
            Rank::A => "A",
            Rank::B => "B",
            Rank::C => "C",
            Rank::D => "D",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_boundaries_are_exact() {
        assert_eq!(Rank::from_total(90), Rank::S);
        assert_eq!(Rank::from_total(89), Rank::A);
        assert_eq!(Rank::from_total(80), Rank::A);
        assert_eq!(Rank::from_total(79), Rank::B);
        assert_eq!(Rank::from_total(70), Rank::B);
        assert_eq!(Rank::from_total(69), Rank::C);
        assert_eq!(Rank::from_total(60), Rank::C);
        assert_eq!(Rank::from_total(59), Rank::D);
    }

    #[test]
    fn rank_extremes_map_to_outer_tiers() {
        assert_eq!(Rank::from_total(100), Rank::S);
        assert_eq!(Rank::from_total(0), Rank::D);
    }

    #[test]
    fn rank_default_is_lowest_tier() {
        assert_eq!(Rank::default(), Rank::D);
    }

    #[test]
    fn rank_serializes_as_bare_letter() {
        assert_eq!(serde_json::to_string(&Rank::S).unwrap(), "\"S\"");
        assert_eq!(serde_json::to_string(&Rank::D).unwrap(), "\"D\"");
    }

    #[test]
    fn rank_deserializes_from_letter() {
        let rank: Rank = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(rank, Rank::A);
    }

    #[test]
    fn rank_displays_as_letter() {
        assert_eq!(format!("{}", Rank::B), "B");
    }
}
