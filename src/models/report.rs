//! Daily symptom report model
//!
//! A `DailyReport` is what the patient submits once per day. Categorical fields are
//! parsed leniently: an unrecognised label resolves to the neutral default for that
//! field instead of failing, and numeric fields are carried through unchanged even
//! when outside their declared range.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::algorithm::thresholds::FEVER_NORMAL_F;
use crate::models::risk::RiskLevel;

/// Glue a categorical enum to serde through its display label
macro_rules! label_serde {
    ($ty:ident) => {
        impl From<String> for $ty {
            fn from(label: String) -> Self {
                Self::parse_lenient(&label)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.label().to_string()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

/// Normalise a free-text label for matching
fn normalise(label: &str) -> String {
    label.trim().to_ascii_lowercase()
}

/// Reported swelling around the intervention site
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Swelling {
    #[default]
    None = 0,
    Mild = 1,
    Moderate = 2,
    Severe = 3,
}

impl Swelling {
    /// Parse a label, returning `None` when it is not recognised
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalise(label).as_str() {
            "none" | "no" | "no swelling" => Some(Self::None),
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }

    /// Parse a label, falling back to `None` swelling
    #[must_use]
    pub fn parse_lenient(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    /// Ordinal feature code (0-3)
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Convert a numeric code back to a level, defaulting to `None`
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Mild,
            2 => Self::Moderate,
            3 => Self::Severe,
            _ => Self::None,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Mild => "Mild",
            Self::Moderate => "Moderate",
            Self::Severe => "Severe",
        }
    }

    /// Moderate or severe swelling
    #[must_use]
    pub const fn is_significant(self) -> bool {
        matches!(self, Self::Moderate | Self::Severe)
    }
}

label_serde!(Swelling);

/// Condition of the wound or incision
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WoundStatus {
    #[default]
    CleanHealing = 0,
    Redness = 1,
    DischargeOpen = 2,
}

impl WoundStatus {
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalise(label).as_str() {
            "clean/healing" | "clean" | "healing" => Some(Self::CleanHealing),
            "redness" | "red" => Some(Self::Redness),
            "discharge/open" | "discharge" | "open" => Some(Self::DischargeOpen),
            _ => None,
        }
    }

    /// Parse a label, falling back to `Clean/Healing`
    #[must_use]
    pub fn parse_lenient(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            1 => Self::Redness,
            2 => Self::DischargeOpen,
            _ => Self::CleanHealing,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CleanHealing => "Clean/Healing",
            Self::Redness => "Redness",
            Self::DischargeOpen => "Discharge/Open",
        }
    }
}

label_serde!(WoundStatus);

/// Patient-reported direction of pain since the previous day
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PainTrend {
    Improving,
    #[default]
    Stable,
    Worsening,
}

impl PainTrend {
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match normalise(label).as_str() {
            "improving" | "better" => Some(Self::Improving),
            "stable" | "same" => Some(Self::Stable),
            "worsening" | "worse" => Some(Self::Worsening),
            _ => None,
        }
    }

    /// Parse a label, falling back to `Stable`
    #[must_use]
    pub fn parse_lenient(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    /// Signed feature code: -1 improving, 0 stable, 1 worsening
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Improving => -1,
            Self::Stable => 0,
            Self::Worsening => 1,
        }
    }

    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        match code {
            c if c < 0 => Self::Improving,
            0 => Self::Stable,
            _ => Self::Worsening,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Improving => "Improving",
            Self::Stable => "Stable",
            Self::Worsening => "Worsening",
        }
    }
}

label_serde!(PainTrend);

/// One day's symptom report as submitted by the patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyReport {
    /// Pain on a 0-10 scale
    pub pain_score: i32,
    pub swelling: Swelling,
    /// Body temperature in degrees Fahrenheit
    pub fever: f64,
    /// Mobility on a 0-10 scale (0 bedridden, 10 full)
    pub mobility: i32,
    pub wound_status: WoundStatus,
    /// Medication adherence on a 0-10 scale
    pub medication_adherence: i32,
    pub pain_trend: PainTrend,
    /// Free text; never read by the decision logic
    #[serde(default)]
    pub notes: String,
}

impl Default for DailyReport {
    fn default() -> Self {
        Self {
            pain_score: 0,
            swelling: Swelling::None,
            fever: FEVER_NORMAL_F,
            mobility: 5,
            wound_status: WoundStatus::CleanHealing,
            medication_adherence: 10,
            pain_trend: PainTrend::Stable,
            notes: String::new(),
        }
    }
}

impl AsRef<DailyReport> for DailyReport {
    fn as_ref(&self) -> &DailyReport {
        self
    }
}

/// A submitted report together with what the engine derived from it
///
/// Log entries are appended to a patient's timeline and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(flatten)]
    pub report: DailyReport,
    /// Calendar day the report was submitted
    pub date: NaiveDate,
    #[serde(alias = "days_post_surgery")]
    pub days_post_intervention: i64,
    pub risk_level: RiskLevel,
    pub risk_index: u8,
    pub timestamp: DateTime<Utc>,
}

impl AsRef<DailyReport> for LogEntry {
    fn as_ref(&self) -> &DailyReport {
        &self.report
    }
}
