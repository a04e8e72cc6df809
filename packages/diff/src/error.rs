//! Error types for the diff engine.
//!
//! The comparison pipeline is total over text input: malformed
//! numbering and empty documents degrade gracefully instead of
//! erroring. Only genuinely non-text input is rejected.

use thiserror::Error;

/// Main error type for the diff engine.
#[derive(Debug, Error)]
pub enum DiffError {
    /// Input contains non-text data (embedded NUL or other
    /// non-printing control characters), usually a sign that a binary
    /// file was passed instead of extracted document text.
    #[error("Input for {document} document contains non-text data at byte {position}")]
    InvalidInput {
        /// Which side of the comparison was rejected ("reference" or "client").
        document: String,
        /// Byte offset of the first offending character.
        position: usize,
    },

    /// IO error (reading document files in the CLI).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (CLI --json output).
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Result type alias for diff engine operations.
pub type Result<T> = std::result::Result<T, DiffError>;
