//! Feature encoding for the risk classifier
//!
//! Maps a daily report plus the patient's care pathway and days since the
//! intervention onto the fixed nine-field vector the forest is trained on.

use serde::{Deserialize, Serialize};

use crate::models::{CarePathway, DailyReport};

/// Number of features in a [`FeatureVector`]
pub const N_FEATURES: usize = 9;

/// Feature names in vector order
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "pain_score",
    "swelling",
    "fever",
    "mobility",
    "wound_status",
    "medication_adherence",
    "days_post_intervention",
    "care_pathway",
    "pain_trend",
];

/// Numeric encoding of one daily report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub pain_score: i32,
    pub swelling_code: i32,
    pub fever: f64,
    pub mobility: i32,
    pub wound_code: i32,
    pub medication_adherence: i32,
    pub days_post_intervention: i64,
    pub care_pathway_code: i32,
    pub pain_trend_code: i32,
}

impl FeatureVector {
    /// Flatten into the column order used for training
    #[must_use]
    pub fn to_array(&self) -> [f64; N_FEATURES] {
        [
            f64::from(self.pain_score),
            f64::from(self.swelling_code),
            self.fever,
            f64::from(self.mobility),
            f64::from(self.wound_code),
            f64::from(self.medication_adherence),
            self.days_post_intervention as f64,
            f64::from(self.care_pathway_code),
            f64::from(self.pain_trend_code),
        ]
    }
}

/// Encode a report into a feature vector
///
/// Never fails: categorical fields were already resolved to their neutral defaults
/// when the report was parsed, and an unknown care pathway encodes as General
/// Discharge. Numeric fields are passed through unchanged, and a negative
/// `days_post_intervention` is the caller's problem, not the encoder's.
#[must_use]
pub fn encode(report: &DailyReport, care_pathway: &str, days_post_intervention: i64) -> FeatureVector {
    FeatureVector {
        pain_score: report.pain_score,
        swelling_code: report.swelling.code(),
        fever: report.fever,
        mobility: report.mobility,
        wound_code: report.wound_status.code(),
        medication_adherence: report.medication_adherence,
        days_post_intervention,
        care_pathway_code: CarePathway::resolve(care_pathway).code(),
        pain_trend_code: report.pain_trend.code(),
    }
}
