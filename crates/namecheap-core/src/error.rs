//! Error types for the Namecheap client
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for Namecheap client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the Namecheap client
#[derive(Error, Debug)]
pub enum Error {
    /// Domain could not be split into SLD and TLD
    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level failures (connection, timeout, TLS)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// Create an invalid domain error
    pub fn invalid_domain(msg: impl Into<String>) -> Self {
        Self::InvalidDomain(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}
