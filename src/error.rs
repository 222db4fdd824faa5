//! Error types for the neck motion tracker.
//!
//! Gesture failures are not errors: the tracker models them as phase
//! transitions. These variants cover the I/O around it.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A recorded frame could not be parsed
    #[error("Replay error at line {line}: {message}")]
    Replay {
        /// 1-based line number in the recording
        line: usize,
        /// Parser message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic I/O error with description
    #[error("I/O error: {0}")]
    IoError(String),

    /// The session owning the tracker is no longer running
    #[error("Session closed")]
    SessionClosed,
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
