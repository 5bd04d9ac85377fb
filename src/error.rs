//! Error handling types for deluge-ls
//!
//! Completion and hover lookups are total, so these errors only come from the
//! server plumbing around them: configuration, documents and I/O.

use thiserror::Error;

/// Comprehensive error type for LSP operations
#[derive(Debug, Error)]
pub enum LspError {
    /// Configuration error
    #[error("Invalid configuration: {message}")]
    Config { message: String },

    /// Document not found in store
    #[error("Document not found: {uri}")]
    DocumentNotFound { uri: String },

    /// Request URI could not be interpreted
    #[error("Invalid URI: {uri}")]
    InvalidUri { uri: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for LSP operations
pub type LspResult<T> = Result<T, LspError>;

/// Helper functions for common error patterns
impl LspError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        LspError::Config {
            message: message.into(),
        }
    }

    /// Create a document not found error
    pub fn document_not_found(uri: impl Into<String>) -> Self {
        LspError::DocumentNotFound { uri: uri.into() }
    }

    /// Create an invalid URI error
    pub fn invalid_uri(uri: impl Into<String>) -> Self {
        LspError::InvalidUri { uri: uri.into() }
    }
}
