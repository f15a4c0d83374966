//! Error types for document generation.

use thiserror::Error;

/// Failures surfaced while composing or persisting a document.
///
/// Composition failures are recoverable: callers are expected to report them
/// to the user and keep the surrounding view alive.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("failed to produce PDF: {0}")]
    Pdf(String),

    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}
