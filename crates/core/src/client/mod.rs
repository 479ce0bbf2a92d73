//! Browser client configuration.
//!
//! The front end only needs to know where the API lives and how to reach the
//! identity provider. This module models that record and validates it.

mod config;
mod error;

pub use config::{api_gateway_endpoint, AuthConfig, ClientConfig};
pub use error::{ClientConfigError, Result};
