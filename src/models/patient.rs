//! Patient and care pathway models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the patient is being monitored
///
/// Patients store their pathway as free text; each component resolves it through
/// [`CarePathway::from_label`] and applies its own fallback when it is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarePathway {
    MinorSurgery = 0,
    OrthopedicSurgery = 1,
    GeneralDischarge = 2,
    InjuryRecovery = 3,
    NeuroRehabilitation = 4,
}

impl CarePathway {
    /// All pathways in feature-code order
    pub const ALL: [Self; 5] = [
        Self::MinorSurgery,
        Self::OrthopedicSurgery,
        Self::GeneralDischarge,
        Self::InjuryRecovery,
        Self::NeuroRehabilitation,
    ];

    /// Pathway used when the stored label is not recognised
    pub const DEFAULT: Self = Self::GeneralDischarge;

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "minor surgery" => Some(Self::MinorSurgery),
            "orthopedic surgery" | "orthopaedic surgery" => Some(Self::OrthopedicSurgery),
            "general discharge" => Some(Self::GeneralDischarge),
            "injury recovery" => Some(Self::InjuryRecovery),
            "stroke rehab" | "neuro rehabilitation" | "neuro-rehabilitation" => {
                Some(Self::NeuroRehabilitation)
            }
            _ => None,
        }
    }

    /// Resolve a label, falling back to General Discharge
    #[must_use]
    pub fn resolve(label: &str) -> Self {
        Self::from_label(label).unwrap_or(Self::DEFAULT)
    }

    /// Categorical feature code (0-4)
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Position in per-pathway lookup tables
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MinorSurgery => "Minor Surgery",
            Self::OrthopedicSurgery => "Orthopedic Surgery",
            Self::GeneralDischarge => "General Discharge",
            Self::InjuryRecovery => "Injury Recovery",
            Self::NeuroRehabilitation => "Stroke Rehab",
        }
    }
}

impl fmt::Display for CarePathway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn default_weight_kg() -> f64 {
    70.0
}

fn default_height_cm() -> f64 {
    170.0
}

/// Registration request for a new patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    #[serde(alias = "surgery_type")]
    pub care_pathway: String,
    /// Day of the triggering clinical event
    #[serde(alias = "surgery_date")]
    pub start_date: NaiveDate,
    pub doctor_name: String,
    #[serde(default)]
    pub doctor_email: String,
    #[serde(default = "default_weight_kg")]
    pub weight_kg: f64,
    #[serde(default = "default_height_cm")]
    pub height_cm: f64,
}

/// A registered patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    #[serde(flatten)]
    pub details: NewPatient,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    #[must_use]
    pub fn new(id: String, details: NewPatient, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            details,
            created_at,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.details.name
    }

    #[must_use]
    pub fn care_pathway(&self) -> &str {
        &self.details.care_pathway
    }

    /// Whole days elapsed between the start date and `today`
    ///
    /// Negative when the start date lies in the future; callers decide what to do with that.
    #[must_use]
    pub fn days_post_intervention(&self, today: NaiveDate) -> i64 {
        (today - self.details.start_date).num_days()
    }
}
