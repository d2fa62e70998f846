//! Application handlers.
//!
//! Command handlers that orchestrate gateway calls and extraction.

pub mod generate_profile;

pub use generate_profile::{
    // Handler
    ProfileGenerationHandler,
    GenerationConfig,
    // Errors and results
    GenerationError,
    GenerationOutcome,
};
