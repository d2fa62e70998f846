//! GenerateProfile - Command handlers for AI-backed profile generation.
//!
//! Each command issues one gateway call and runs the extraction pipeline
//! over the reply text. A gateway failure short-circuits the command:
//! the error is surfaced as-is and extraction never runs.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::extraction::{
    extract_influence, extract_profile, extract_profile_with_influence, ExtractError, PayloadShape,
};
use crate::domain::foundation::{InfluenceDimension, Profession};
use crate::domain::profile::{
    GeneratedInfluence, GeneratedProfile, ProfileInput, ProfileWithInfluence,
};
use crate::ports::{GatewayError, GenerationReply, GenerationRequest, ModelGateway};

/// System prompt pinning the reply to a single JSON object.
const SYSTEM_PROMPT: &str = "You are a researcher for a celebrity influence index. \
    Reply with a single JSON object and no commentary.";

/// Errors that can occur during profile generation.
///
/// Gateway errors pass through with their message unchanged; callers
/// relaying them to a client should not re-wrap them.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The gateway call failed before any text arrived.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// Reply text arrived but no payload could be extracted from it.
    #[error(transparent)]
    Extraction(#[from] ExtractError),
}

/// Result of a successful generation command.
#[derive(Debug, Clone)]
pub struct GenerationOutcome<T> {
    /// The extracted payload.
    pub payload: T,
    /// Model that produced the reply.
    pub model: String,
    /// Trace ID correlating this outcome with gateway and handler logs.
    pub trace_id: String,
    /// When extraction completed.
    pub generated_at: DateTime<Utc>,
}

/// Tuning applied to every generation request.
#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Temperature for completions.
    pub temperature: f32,
    /// Max tokens per reply.
    pub max_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1500,
        }
    }
}

/// Handler for profile generation commands.
pub struct ProfileGenerationHandler {
    gateway: Arc<dyn ModelGateway>,
    config: GenerationConfig,
}

impl ProfileGenerationHandler {
    /// Creates a new handler with default tuning.
    pub fn new(gateway: Arc<dyn ModelGateway>) -> Self {
        Self {
            gateway,
            config: GenerationConfig::default(),
        }
    }

    /// Creates a handler with custom tuning.
    pub fn with_config(gateway: Arc<dyn ModelGateway>, config: GenerationConfig) -> Self {
        Self { gateway, config }
    }

    /// Generates a biography profile.
    pub async fn generate_profile(
        &self,
        input: &ProfileInput,
    ) -> Result<GenerationOutcome<GeneratedProfile>, GenerationError> {
        let (reply, trace_id) = self
            .request_reply(profile_prompt(input), PayloadShape::Profile)
            .await?;

        let payload = extract_profile(&reply.text).map_err(|err| {
            warn!(trace_id = %trace_id, error = %err, "Extraction failed");
            err
        })?;

        Ok(outcome(payload, reply, trace_id))
    }

    /// Generates a biography profile together with its influence scorecard.
    pub async fn generate_profile_with_influence(
        &self,
        input: &ProfileInput,
    ) -> Result<GenerationOutcome<ProfileWithInfluence>, GenerationError> {
        let (reply, trace_id) = self
            .request_reply(
                profile_with_influence_prompt(input),
                PayloadShape::ProfileWithInfluence,
            )
            .await?;

        let payload = extract_profile_with_influence(&reply.text).map_err(|err| {
            warn!(trace_id = %trace_id, error = %err, "Extraction failed");
            err
        })?;

        Ok(outcome(payload, reply, trace_id))
    }

    /// Generates an influence scorecard alone. Extraction on this path
    /// defaults missing dimensions instead of failing, so the only error
    /// source is the gateway itself.
    pub async fn generate_influence(
        &self,
        input: &ProfileInput,
    ) -> Result<GenerationOutcome<GeneratedInfluence>, GenerationError> {
        let (reply, trace_id) = self
            .request_reply(influence_prompt(input), PayloadShape::InfluenceOnly)
            .await?;

        let payload = extract_influence(&reply.text)?;

        Ok(outcome(payload, reply, trace_id))
    }

    /// Issues the gateway call and logs both edges of it.
    async fn request_reply(
        &self,
        prompt: String,
        shape: PayloadShape,
    ) -> Result<(GenerationReply, String), GatewayError> {
        let request = GenerationRequest::new(prompt)
            .with_system_prompt(SYSTEM_PROMPT)
            .with_max_tokens(self.config.max_tokens)
            .with_temperature(self.config.temperature);
        let trace_id = request.trace_id.clone();

        debug!(
            trace_id = %trace_id,
            shape = ?shape,
            strategy = ?shape.strategy(),
            "Requesting generation"
        );

        let reply = self.gateway.generate(request).await.map_err(|err| {
            warn!(trace_id = %trace_id, error = %err, "Gateway call failed");
            err
        })?;

        debug!(
            trace_id = %trace_id,
            model = %reply.model,
            reply_chars = reply.text.len(),
            "Received generation reply"
        );

        Ok((reply, trace_id))
    }
}

fn outcome<T>(payload: T, reply: GenerationReply, trace_id: String) -> GenerationOutcome<T> {
    GenerationOutcome {
        payload,
        model: reply.model,
        trace_id,
        generated_at: Utc::now(),
    }
}

// ----- Prompt construction -----

fn subject_header(input: &ProfileInput) -> String {
    let mut header = format!("Subject: {}\n", input.name());
    if !input.description().is_empty() {
        header.push_str(&format!("Notes: {}\n", input.description()));
    }
    header
}

fn profession_keys() -> String {
    Profession::ALL
        .iter()
        .map(|p| p.key())
        .collect::<Vec<_>>()
        .join(", ")
}

fn influence_schema() -> String {
    InfluenceDimension::ALL
        .iter()
        .map(|d| {
            format!(
                r#""{}": {{"score": 0-{}, "exp": "one-sentence justification"}}"#,
                d.key(),
                d.max_score()
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn profile_prompt(input: &ProfileInput) -> String {
    format!(
        "{header}\nDescribe the subject as a JSON object with fields: \
         \"bio\" (required), \"profession\" (one of: {professions}), \"title\", \
         \"nationality\", \"birthDate\", \"deathDate\", \"quotes\", \"fullname\".",
        header = subject_header(input),
        professions = profession_keys(),
    )
}

fn profile_with_influence_prompt(input: &ProfileInput) -> String {
    format!(
        "{base}\nAdd an \"influence\" field scoring the subject's reach: \
         {{{schema}}}.",
        base = profile_prompt(input),
        schema = influence_schema(),
    )
}

fn influence_prompt(input: &ProfileInput) -> String {
    format!(
        "{header}\nScore the subject's influence as a JSON object with \
         these fields: {{{schema}}}.",
        header = subject_header(input),
        schema = influence_schema(),
    )
}
