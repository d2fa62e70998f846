//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects and enums that form the vocabulary of the
//! Limelight domain: influence dimensions, score leaves, rank tiers, and
//! the closed profession set.

mod dimension;
mod errors;
mod influence_score;
mod profession;
mod rank;

pub use dimension::InfluenceDimension;
pub use errors::ValidationError;
pub use influence_score::InfluenceScore;
pub use profession::Profession;
pub use rank::Rank;
