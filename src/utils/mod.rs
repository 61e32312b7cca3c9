//! Utility functions shared across the engine

pub mod logging;

use std::path::Path;

use crate::error::Result;
use crate::error::util::IoResultExt;

/// Round to one decimal place, half away from zero
///
/// # Arguments
/// * `value` - The value to round
///
/// # Returns
/// `value` rounded to the nearest tenth
#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Create the parent directory of `path` if it is missing
///
/// # Arguments
/// * `path` - The file whose parent directory must exist
///
/// # Errors
/// Returns an error if the directory cannot be created
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.at_path(parent)?;
    }
    Ok(())
}

/// Write `contents` to `path` through a sibling temporary file and a rename
///
/// Readers never observe a half-written file.
///
/// # Arguments
/// * `path` - Destination file
/// * `contents` - Bytes to write
///
/// # Errors
/// Returns an error if the temporary file cannot be written or renamed
pub async fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
    ensure_parent_dir(path).await?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = std::path::PathBuf::from(tmp);

    tokio::fs::write(&tmp, contents).await.at_path(&tmp)?;
    tokio::fs::rename(&tmp, path).await.at_path(path)?;
    Ok(())
}
