//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ModelGateway` - Port for the generative-AI completion collaborator

mod model_gateway;

pub use model_gateway::{GatewayError, GenerationReply, GenerationRequest, ModelGateway};
