//! Mock Model Gateway for testing.
//!
//! Provides a configurable mock implementation of the ModelGateway port,
//! allowing tests to run without calling a real completion API.
//!
//! # Features
//!
//! - Pre-configured replies (consumed in order)
//! - Simulated delays for timeout testing
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let gateway = MockModelGateway::new()
//!     .with_reply(r#"{"bio": "Test subject", "profession": "scholar"}"#)
//!     .with_delay(Duration::from_millis(100));
//!
//! let reply = gateway.generate(request).await?;
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{GatewayError, GenerationReply, GenerationRequest, ModelGateway};

/// Mock model gateway for testing.
///
/// Configurable to return specific replies, simulate delays, or inject errors.
#[derive(Debug, Clone)]
pub struct MockModelGateway {
    /// Pre-configured replies (consumed in order).
    replies: Arc<Mutex<VecDeque<MockReply>>>,
    /// Model name reported in successful replies.
    model: String,
    /// Simulated latency per request.
    delay: Duration,
    /// Call history for verification.
    calls: Arc<Mutex<Vec<GenerationRequest>>>,
}

/// A configured mock reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return the text as a successful generation.
    Text(String),
    /// Return an error.
    Error(MockFailure),
}

/// Mock failure kinds for testing error handling.
#[derive(Debug, Clone)]
pub enum MockFailure {
    /// Simulate rate limiting.
    RateLimited { retry_after_secs: u32 },
    /// Simulate provider unavailable.
    Unavailable { message: String },
    /// Simulate authentication failure.
    AuthenticationFailed,
    /// Simulate network error.
    Network { message: String },
    /// Simulate timeout.
    Timeout { timeout_secs: u32 },
    /// Simulate a reply with no completion text.
    EmptyReply,
}

impl From<MockFailure> for GatewayError {
    fn from(failure: MockFailure) -> Self {
        match failure {
            MockFailure::RateLimited { retry_after_secs } => {
                GatewayError::rate_limited(retry_after_secs)
            }
            MockFailure::Unavailable { message } => GatewayError::unavailable(message),
            MockFailure::AuthenticationFailed => GatewayError::AuthenticationFailed,
            MockFailure::Network { message } => GatewayError::network(message),
            MockFailure::Timeout { timeout_secs } => GatewayError::Timeout { timeout_secs },
            MockFailure::EmptyReply => GatewayError::EmptyReply,
        }
    }
}

impl Default for MockModelGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockModelGateway {
    /// Creates a new mock gateway with default settings.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            model: "mock-model-1".to_string(),
            delay: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Adds a successful reply to the queue.
    pub fn with_reply(self, text: impl Into<String>) -> Self {
        let mut replies = self.replies.lock().unwrap();
        replies.push_back(MockReply::Text(text.into()));
        drop(replies);
        self
    }

    /// Adds an error to the queue.
    pub fn with_failure(self, failure: MockFailure) -> Self {
        let mut replies = self.replies.lock().unwrap();
        replies.push_back(MockReply::Error(failure));
        drop(replies);
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the model name reported in replies.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Returns the number of calls made to this gateway.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded requests.
    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Clears the call history.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Gets the next reply or a default.
    fn next_reply(&self) -> MockReply {
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| MockReply::Text("Mock reply".to_string()))
    }
}

#[async_trait]
impl ModelGateway for MockModelGateway {
    async fn generate(&self, request: GenerationRequest) -> Result<GenerationReply, GatewayError> {
        // Record the call
        self.calls.lock().unwrap().push(request);

        // Simulate delay
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        match self.next_reply() {
            MockReply::Text(text) => Ok(GenerationReply {
                text,
                model: self.model.clone(),
            }),
            MockReply::Error(failure) => Err(failure.into()),
        }
    }
}
