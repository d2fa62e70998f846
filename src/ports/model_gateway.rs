//! Model Gateway Port - Interface for the generative-AI collaborator.
//!
//! The gateway issues the outbound completion call and hands back raw
//! response text. It is the only suspension point around the extraction
//! core: the core itself is pure and synchronous, and when the gateway
//! fails the core is never invoked at all.
//!
//! # Design
//!
//! - Single-shot, non-streaming: one prompt in, one text reply out
//! - No retry policy here; the caller decides whether to regenerate
//! - Typed errors so callers can tell transient failures from fatal ones

use async_trait::async_trait;
use uuid::Uuid;

/// Port for generative-AI completion calls.
///
/// Implementations connect to an external model API (or a test double)
/// and translate between the provider wire format and the reply types
/// here.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    /// Issues one completion call and returns the raw response text.
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationReply, GatewayError>;
}

/// Request for one model completion.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    /// The user-turn prompt.
    pub prompt: String,
    /// System prompt to pin the response format.
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: Option<u32>,
    /// Temperature for response randomness.
    pub temperature: Option<f32>,
    /// Trace ID correlating the call with handler logs.
    pub trace_id: String,
}

impl GenerationRequest {
    /// Creates a request with a fresh trace ID.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            max_tokens: None,
            temperature: None,
            trace_id: format!("gen-{}", Uuid::new_v4()),
        }
    }

    /// Sets the system prompt.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    /// Overrides the generated trace ID.
    pub fn with_trace_id(mut self, trace_id: impl Into<String>) -> Self {
        self.trace_id = trace_id.into();
        self
    }
}

/// Raw reply from a completion call.
#[derive(Debug, Clone)]
pub struct GenerationReply {
    /// The free-form response text, untouched by any extraction.
    pub text: String,
    /// Model that produced the response.
    pub model: String,
}

/// Gateway failure modes.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Rate limited by the provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Network error during the request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u32,
    },

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider response could not be read.
    #[error("unreadable provider response: {0}")]
    Parse(String),

    /// Provider returned no completion text.
    #[error("empty reply from provider")]
    EmptyReply,
}

impl GatewayError {
    /// Creates a rate limited error.
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Returns true if a fresh call could plausibly succeed. Retrying is
    /// the caller's decision; this only classifies.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GatewayError::RateLimited { .. }
                | GatewayError::Unavailable { .. }
                | GatewayError::Network(_)
                | GatewayError::Timeout { .. }
        )
    }
}
