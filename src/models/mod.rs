//! Domain models for the recovery monitoring engine
//!
//! Plain serde records exchanged between the decision engine, the document store
//! and whatever API layer sits on top.

pub mod alert;
pub mod patient;
pub mod report;
pub mod risk;

// Re-export commonly used types
pub use alert::{Alert, AlertType};
pub use patient::{CarePathway, NewPatient, Patient};
pub use report::{DailyReport, LogEntry, PainTrend, Swelling, WoundStatus};
pub use risk::{ClassProbabilities, N_RISK_LEVELS, RiskAssessment, RiskLevel};
