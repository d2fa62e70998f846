//! Model Gateway Adapters.
//!
//! Implementations of the ModelGateway port.
//!
//! ## Available Adapters
//!
//! - `HttpModelGateway` - OpenAI-compatible chat completions over HTTP
//! - `MockModelGateway` - Configurable mock for testing

mod http;
mod mock;

pub use http::{HttpGatewayConfig, HttpModelGateway};
pub use mock::{MockFailure, MockModelGateway, MockReply};
