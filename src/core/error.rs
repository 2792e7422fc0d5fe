//! Error types and error handling for the IP lookup service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status
//! codes, MCP error results) is handled in the respective adapter
//! modules.

use thiserror::Error;

/// Result type alias for lookup operations
pub type Result<T> = std::result::Result<T, IpInfoError>;

/// Main error type for the lookup service
#[derive(Error, Debug)]
pub enum IpInfoError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream error: provider returned HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IpInfoError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Provider answered with a non-success status
    pub fn is_upstream(&self) -> bool {
        matches!(self, IpInfoError::Upstream { .. })
    }

    /// Provider could not be reached (network failure or timeout)
    pub fn is_transport(&self) -> bool {
        matches!(self, IpInfoError::Transport(_))
    }

    /// Check if the caller's request itself was at fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            IpInfoError::UnknownTool(_) | IpInfoError::InvalidArguments(_)
        )
    }
}
