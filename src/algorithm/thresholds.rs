//! Clinical thresholds shared by the rule engines and the training-label cascade
//!
//! The synthetic labels the classifier learns from and the explicit rule engines
//! (alerts, complication scoring, recovery score) read the same cut-offs from here.
//! The rules themselves still differ slightly: the label cascade treats moderate
//! swelling alone as Moderate risk, while the fever-swelling alert needs both signs.

/// Fever at or above this is a Critical training label (°F)
pub const FEVER_CRITICAL_F: f64 = 101.5;

/// Fever at or above this counts as clinically elevated (°F)
pub const FEVER_ELEVATED_F: f64 = 100.4;

/// Fever steps used by complication scoring, highest first: (threshold °F, points)
pub const FEVER_COMPLICATION_STEPS: [(f64, f64); 4] = [
    (103.0, 25.0),
    (FEVER_CRITICAL_F, 20.0),
    (FEVER_ELEVATED_F, 12.0),
    (99.5, 5.0),
];

/// Normal body temperature, used when no reading is available (°F)
pub const FEVER_NORMAL_F: f64 = 98.6;

/// Pain at or above this is a High training label
pub const PAIN_HIGH: i32 = 8;

/// Pain at or above this is a Moderate training label
pub const PAIN_MODERATE: i32 = 6;

/// Worsening pain at or above this is a Moderate training label
pub const PAIN_WORSENING_MODERATE: i32 = 5;

/// Mobility at or below this is considered severely limited
pub const MOBILITY_LIMITED: i32 = 2;

/// Limited mobility beyond this many days post-intervention is a High training label
pub const LATE_IMMOBILITY_DAYS: i64 = 14;

/// Number of rising pain reports that trigger an escalation alert
pub const ESCALATION_WINDOW: usize = 3;

/// Number of most recent reports the pain pattern analyzer looks at
pub const PAIN_PATTERN_WINDOW: usize = 7;
