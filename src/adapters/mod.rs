//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `gateway` - Model gateway implementations (HTTP, mock)

pub mod gateway;

pub use gateway::{HttpGatewayConfig, HttpModelGateway, MockFailure, MockModelGateway};
