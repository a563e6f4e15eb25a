//! Error types for the company directory.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type
//! alias [`Result`] used throughout the crate. All errors are implemented with
//! the `thiserror` crate.
//!
//! Two failure families matter to the load lifecycle: the fetched document has
//! the wrong shape ([`DirectoryError::Format`]) or the document could not be
//! read or decoded at all (transport). Both end up as a displayed message with
//! a retry affordance.

use thiserror::Error;

/// The main error type for directory operations.
///
/// # Examples
///
/// ```
/// use company_directory::DirectoryError;
///
/// let err = DirectoryError::Format;
/// assert_eq!(err.to_string(), "Unexpected companies.json format");
/// assert!(err.is_format());
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The document is valid JSON but neither a bare array of companies nor an
    /// object with a `companies` array.
    #[error("Unexpected companies.json format")]
    Format,

    /// The static resource could not be read.
    #[error("Failed to read companies: {0}")]
    Transport(#[from] std::io::Error),

    /// The document is not JSON, or a company record inside it is malformed.
    #[error("Failed to parse companies: {0}")]
    Parse(#[from] serde_json::Error),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A sort token outside the supported set.
    #[error("Unknown sort option: {0:?}")]
    InvalidSort(String),

    /// Background load execution failed (no runtime, task panicked).
    #[error("Worker error: {0}")]
    Worker(String),
}

impl DirectoryError {
    /// Returns `true` for a document with an unsupported shape.
    #[must_use]
    pub const fn is_format(&self) -> bool {
        matches!(self, Self::Format)
    }

    /// Returns `true` for read and decode failures of the static resource.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Parse(_))
    }
}

/// A specialized `Result` type for directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
