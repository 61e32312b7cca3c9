//! Utility functions for error handling
//!
//! This module provides helpers to attach file context to IO failures.

use std::io;
use std::path::Path;

use crate::error::{EngineError, Result};

/// Extension trait for `io::Result` to attach the path being operated on
pub trait IoResultExt<T> {
    /// Convert the IO error into an [`EngineError::Io`] carrying `path`
    fn at_path(self, path: &Path) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T> {
        self.map_err(|e| EngineError::io(path, e))
    }
}

/// Turn any error raised while bringing the classifier up into a bootstrap failure
///
/// # Arguments
/// * `stage` - Which bootstrap step failed (for error context)
/// * `error` - The underlying error
#[must_use]
pub fn bootstrap_error(stage: &str, error: impl std::fmt::Display) -> EngineError {
    EngineError::Bootstrap(format!("{stage}: {error}"))
}
