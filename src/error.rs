//! Error types for Librarium
//!
//! Catalog operations never fail; they report informational outcomes instead.
//! This error type covers the edges around the catalog: operator input,
//! configuration, and I/O on the session streams.

use thiserror::Error;

/// Result type alias using LibraryError
pub type Result<T> = std::result::Result<T, LibraryError>;

/// Unified error type for Librarium
#[derive(Debug, Error)]
pub enum LibraryError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Operator Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    Input(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LibraryError {
    /// Whether the session can report this error and keep going
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LibraryError::Input(_))
    }
}
