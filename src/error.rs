//! Unified error types for chatlens.
//!
//! Per-record timestamp failures are deliberately not errors: a segment
//! that matches neither date format is kept with `timestamp = None` and
//! degrades gracefully. Everything here is a genuine caller-facing
//! failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for chatlens operations.
pub type Result<T> = std::result::Result<T, ChatlensError>;

/// The error type for all chatlens operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatlensError {
    /// An I/O error occurred while loading the transcript or writing a
    /// report.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The stopword list is missing or unreadable.
    ///
    /// Fatal configuration error: the word-frequency operations have no
    /// meaningful default without it.
    #[error("cannot read stopword list {}: {source}", path.display())]
    Stopwords {
        /// Path that was attempted.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ChatlensError {
    /// Creates a stopword configuration error.
    pub fn stopwords(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ChatlensError::Stopwords {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatlensError::Io(_))
    }

    /// Returns `true` if this is the fatal stopword configuration error.
    pub fn is_stopwords(&self) -> bool {
        matches!(self, ChatlensError::Stopwords { .. })
    }
}
