//! Logging utilities
//!
//! Standardized log lines for engine operations, assessments and alerts.

use std::path::Path;

use crate::models::{Alert, RiskAssessment};

/// Log an operation start with consistent format
///
/// # Arguments
/// * `operation` - Description of the operation
/// * `path` - File the operation works on
pub fn log_operation_start(operation: &str, path: &Path) {
    log::info!("{} {}", operation, path.display());
}

/// Log an operation completion with consistent format
///
/// # Arguments
/// * `operation` - Past-tense description of the operation
/// * `path` - File the operation worked on
/// * `items` - Number of records involved
/// * `elapsed` - Optional elapsed time
pub fn log_operation_complete(
    operation: &str,
    path: &Path,
    items: usize,
    elapsed: Option<std::time::Duration>,
) {
    match elapsed {
        Some(duration) => log::info!(
            "Successfully {} {} records at {} in {:?}",
            operation,
            items,
            path.display(),
            duration
        ),
        None => log::info!(
            "Successfully {} {} records at {}",
            operation,
            items,
            path.display()
        ),
    }
}

/// Log a warning, optionally tied to a file
pub fn log_warning(message: &str, path: Option<&Path>) {
    if let Some(path) = path {
        log::warn!("{}: {}", message, path.display());
    } else {
        log::warn!("{message}");
    }
}

/// Log a classifier verdict for one patient at debug level
pub fn log_assessment(patient_id: &str, assessment: &RiskAssessment) {
    log::debug!(
        "Patient {}: risk {} ({:.1}% confidence)",
        patient_id,
        assessment.risk_level,
        assessment.confidence
    );
}

/// Log a raised alert
pub fn log_alert(alert: &Alert) {
    log::warn!(
        "[{}] {} (patient {})",
        alert.alert_type,
        alert.message,
        alert.patient_id
    );
}
