//! Error types for the tender extraction library.
//!
//! Structural mismatches inside a page (too few lines, missing anchor,
//! unexpected date count) are not errors: the line transforms pass such
//! input through unchanged. The variants here cover the document boundary
//! and the presentation layer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for extraction operations.
pub type ExtractorResult<T> = Result<T, ExtractorError>;

/// Error type for all extraction and export operations.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// Error occurred while reading or writing files
    #[error("IO error for path '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The PDF backend could not decode the document.
    ///
    /// Extraction of the whole document is aborted; pages decoded before
    /// the failure are discarded.
    #[error("Failed to read document '{}' with {}: {}", .path.display(), .backend, .reason)]
    DocumentRead {
        path: PathBuf,
        backend: String,
        reason: String,
    },

    /// A single page could not be decoded
    #[error("Failed to read page {page} with {backend}: {reason}")]
    PageRead {
        page: u32,
        backend: String,
        reason: String,
    },

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },

    /// The system clipboard could not be opened or written
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// JSON rendering of the page collection failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ExtractorError {
    /// Builds the error reported when the selected file is not a PDF.
    pub fn not_a_pdf(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::InvalidInput {
            parameter: path.display().to_string(),
            reason: "Invalid file. Please upload a PDF.".to_string(),
        }
    }
}

impl From<io::Error> for ExtractorError {
    fn from(err: io::Error) -> Self {
        Self::Io {
            path: PathBuf::new(),
            source: err,
        }
    }
}

impl From<arboard::Error> for ExtractorError {
    fn from(err: arboard::Error) -> Self {
        Self::Clipboard(err.to_string())
    }
}
