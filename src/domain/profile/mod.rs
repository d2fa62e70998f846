//! Profile module - Celebrity payload aggregates.
//!
//! The caller-facing input and the validated outputs of generation:
//! biography profiles, influence scorecards, and their combination.

mod generated;
mod input;

pub use generated::{GeneratedInfluence, GeneratedProfile, ProfileWithInfluence};
pub use input::ProfileInput;
