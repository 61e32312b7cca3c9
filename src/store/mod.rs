//! Flat JSON document store for patients, daily logs and alerts
//!
//! The whole document is read and rewritten on every change. Callers that modify it
//! concurrently must serialize their read-modify-write cycles.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::fs;

use crate::error::Result;
use crate::error::util::IoResultExt;
use crate::models::{Alert, LogEntry, Patient};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};
use crate::utils::write_atomic;

/// Everything the store persists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreDocument {
    #[serde(default)]
    pub patients: FxHashMap<String, Patient>,
    /// Append-only log history per patient id, oldest first
    #[serde(default)]
    pub logs: FxHashMap<String, Vec<LogEntry>>,
    /// Append-only alert log across all patients
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

impl StoreDocument {
    /// Log history for a patient; empty when none was recorded
    #[must_use]
    pub fn logs_for(&self, patient_id: &str) -> &[LogEntry] {
        self.logs.get(patient_id).map_or(&[], Vec::as_slice)
    }

    /// Number of log entries across all patients
    #[must_use]
    pub fn total_logs(&self) -> usize {
        self.logs.values().map(Vec::len).sum()
    }
}

/// JSON file holding a [`StoreDocument`]
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document, or an empty one when the file does not exist yet
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed
    pub async fn load(&self) -> Result<StoreDocument> {
        let exists = fs::try_exists(&self.path).await.at_path(&self.path)?;
        if !exists {
            log_warning("Store file not found, starting empty", Some(&self.path));
            return Ok(StoreDocument::default());
        }

        let start = Instant::now();
        let bytes = fs::read(&self.path).await.at_path(&self.path)?;
        let document: StoreDocument = serde_json::from_slice(&bytes)?;
        log::debug!(
            "Loaded {} patients and {} logs from {} in {:?}",
            document.patients.len(),
            document.total_logs(),
            self.path.display(),
            start.elapsed()
        );
        Ok(document)
    }

    /// Write the document, creating parent directories as needed
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails
    pub async fn save(&self, document: &StoreDocument) -> Result<()> {
        log_operation_start("Writing store to", &self.path);
        let json = serde_json::to_vec_pretty(document)?;
        write_atomic(&self.path, &json).await?;
        log_operation_complete("wrote", &self.path, document.total_logs(), None);
        Ok(())
    }
}
