//! Alert records raised by the alert engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which rule raised the alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    /// Classifier put the report in the Critical tier
    Critical,
    /// Pain rose on three consecutive reports
    Escalation,
    /// Fever together with moderate or severe swelling
    FeverSwelling,
}

impl AlertType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Escalation => "ESCALATION",
            Self::FeverSwelling => "FEVER_SWELLING",
        }
    }
}

impl fmt::Display for AlertType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raised alert; append-only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub alert_type: AlertType,
    pub message: String,
    /// Patient display name
    pub patient: String,
    #[serde(default)]
    pub patient_id: String,
    pub timestamp: DateTime<Utc>,
}
