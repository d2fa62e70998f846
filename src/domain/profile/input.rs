//! Caller-supplied input for profile generation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Who to generate a profile for, plus any disambiguating context the
/// caller already has ("the physicist", "the 19th century painter").
///
/// Immutable once constructed; the name is required, the description may
/// be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    name: String,
    description: String,
}

impl ProfileInput {
    /// Creates a validated input, returning an error when the name is
    /// empty after trimming.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        Ok(Self {
            name,
            description: description.into().trim().to_string(),
        })
    }

    /// Returns the subject's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the disambiguating description, possibly empty.
    pub fn description(&self) -> &str {
        &self.description
    }
}
