//! Clinical decision engine
//!
//! The risk classifier plus the deterministic rule engines that consume its output.
//! Everything here is a pure function of its inputs except model bootstrap, which
//! trains and persists the classifier once.

pub mod alerts;
pub mod classifier;
pub mod complication;
pub mod daily_tip;
pub mod features;
pub mod pain_pattern;
pub mod recovery_days;
pub mod recovery_score;
pub mod rehab;
pub mod thresholds;

pub use alerts::evaluate_alerts;
pub use classifier::{RiskModel, shared_model};
pub use complication::{ComplicationResult, complication_probability};
pub use daily_tip::{DailyTipResult, daily_tip};
pub use features::{FeatureVector, encode};
pub use pain_pattern::{PainPatternResult, analyze_pain_pattern};
pub use recovery_days::{RecoveryDaysResult, predict_recovery_days};
pub use recovery_score::recovery_score;
pub use rehab::{RehabPlan, rehab_plan};
