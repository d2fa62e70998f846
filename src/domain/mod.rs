//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, enums, errors)
//! - `profile` - Celebrity payload aggregates (input, biography, scorecard)
//! - `extraction` - Pure extraction pipeline from model output to payloads

pub mod extraction;
pub mod foundation;
pub mod profile;
