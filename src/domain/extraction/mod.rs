//! Extraction module - The response-to-domain pipeline.
//!
//! Turns free-form model output into validated payloads via two named
//! recovery strategies: strict parse with repair for the profile shapes,
//! regex field location for the influence-only shape. Pure and
//! synchronous; invocations share nothing but compiled pattern tables.

mod errors;
mod fallback;
mod normalizer;
mod pipeline;
mod repair;
mod validator;

pub use errors::{ExtractError, ExtractionResult};
pub use pipeline::{
    extract_influence, extract_profile, extract_profile_with_influence, PayloadShape,
    RecoveryStrategy,
};
