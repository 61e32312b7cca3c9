//! Error handling for the decision engine.

pub mod util;

use std::io;
use std::path::PathBuf;

/// Specialized error type for the decision engine
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Malformed input that cannot be scored
    #[error("Validation error: {0}")]
    Validation(String),

    /// An auxiliary computation was asked for without the history it needs
    #[error("Missing prerequisite: {0}")]
    Prerequisite(String),

    /// Classifier training or artifact loading failed; the engine cannot start
    #[error("Model bootstrap failed: {0}")]
    Bootstrap(String),

    /// Unknown patient id
    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    /// Error opening, reading or writing a file
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Error encoding or decoding JSON documents
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error building the training thread pool
    #[error("Thread pool error: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl EngineError {
    /// Wrap an IO error together with the path it happened on
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error aborts engine initialization
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Bootstrap(_) | Self::ThreadPool(_))
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
