//! Error types for pipewright operations.
//!
//! This module defines [`PipewrightError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `PipewrightError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `PipewrightError::Other`) for unexpected errors
//! - Remote and IO failures surface unchanged; there is no retry or translation layer

use thiserror::Error;

/// Core error type for pipewright operations.
#[derive(Debug, Error)]
pub enum PipewrightError {
    /// A required identifier was empty.
    #[error("Missing required argument: {name}")]
    MissingArgument { name: &'static str },

    /// The remote API has no resource with the given identifier.
    #[error("Resource not found: {resource_id}")]
    ResourceNotFound { resource_id: String },

    /// The remote API answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    RemoteStatus { status: u16, url: String },

    /// Transport-level failure from the HTTP client.
    #[error(transparent)]
    Remote(#[from] reqwest::Error),

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pipewright operations.
pub type Result<T> = std::result::Result<T, PipewrightError>;
