//! Client configuration errors (pure - no I/O variants).

use thiserror::Error;

/// Errors that can occur when validating a client configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientConfigError {
    #[error("Invalid URL for {field}: {reason}")]
    InvalidUrl { field: &'static str, reason: String },

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Config serialization failed: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, ClientConfigError>;
