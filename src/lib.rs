//! Clinical decision engine for post-discharge recovery monitoring.
//!
//! Scores daily symptom reports with a random forest risk classifier and derives
//! rehab plans, alerts, recovery scores and auxiliary analyses from a patient's
//! report history.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod utils;

// Re-export the most common types for easier use
pub use config::{EngineConfig, ModelConfig};
pub use error::{EngineError, Result};
pub use models::{
    Alert, AlertType, CarePathway, DailyReport, LogEntry, NewPatient, Patient, PainTrend,
    RiskAssessment, RiskLevel, Swelling, WoundStatus,
};
pub use service::{Clock, DailyLogOutcome, FullAnalysis, RecoveryService};
pub use store::JsonStore;

// Decision engine entry points
pub use algorithm::{
    RiskModel, analyze_pain_pattern, complication_probability, daily_tip, encode,
    evaluate_alerts, predict_recovery_days, recovery_score, rehab_plan, shared_model,
};
