//! Ordinal risk tiers and the classifier's assessment record

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of ordinal risk tiers
pub const N_RISK_LEVELS: usize = 4;

/// Risk tiers, ordered Low < Moderate < High < Critical
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RiskLevel {
    #[default]
    Low = 0,
    Moderate = 1,
    High = 2,
    Critical = 3,
}

impl RiskLevel {
    /// All tiers in ascending order
    pub const ALL: [Self; N_RISK_LEVELS] = [Self::Low, Self::Moderate, Self::High, Self::Critical];

    /// Convert a class index (0-3) to a tier
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Low),
            1 => Some(Self::Moderate),
            2 => Some(Self::High),
            3 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Parse a tier label, returning `None` when not recognised
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "moderate" => Some(Self::Moderate),
            "high" => Some(Self::High),
            "critical" => Some(Self::Critical),
            _ => None,
        }
    }

    /// Parse a tier label, falling back to `Low`
    #[must_use]
    pub fn parse_or_low(label: &str) -> Self {
        Self::from_label(label).unwrap_or_default()
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }

    /// Display color used by dashboards
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#22c55e",
            Self::Moderate => "#f59e0b",
            Self::High => "#f97316",
            Self::Critical => "#ef4444",
        }
    }

    /// High or Critical
    #[must_use]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl From<String> for RiskLevel {
    fn from(label: String) -> Self {
        Self::parse_or_low(&label)
    }
}

impl From<RiskLevel> for String {
    fn from(level: RiskLevel) -> Self {
        level.label().to_string()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-tier probability distribution in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassProbabilities {
    #[serde(rename = "Low")]
    pub low: f64,
    #[serde(rename = "Moderate")]
    pub moderate: f64,
    #[serde(rename = "High")]
    pub high: f64,
    #[serde(rename = "Critical")]
    pub critical: f64,
}

impl ClassProbabilities {
    #[must_use]
    pub const fn from_array(values: [f64; N_RISK_LEVELS]) -> Self {
        Self {
            low: values[0],
            moderate: values[1],
            high: values[2],
            critical: values[3],
        }
    }

    #[must_use]
    pub const fn as_array(&self) -> [f64; N_RISK_LEVELS] {
        [self.low, self.moderate, self.high, self.critical]
    }

    /// Probability assigned to one tier
    #[must_use]
    pub const fn get(&self, level: RiskLevel) -> f64 {
        self.as_array()[level.index()]
    }

    /// Sum of all tiers (100 up to rounding)
    #[must_use]
    pub fn total(&self) -> f64 {
        self.as_array().iter().sum()
    }
}

/// The classifier's verdict for one daily report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub risk_level: RiskLevel,
    pub risk_index: u8,
    /// Probability of the predicted tier, percent with one decimal
    pub confidence: f64,
    pub color: String,
    pub probabilities: ClassProbabilities,
}

impl RiskAssessment {
    /// Build an assessment for `level` with the given distribution
    #[must_use]
    pub fn new(level: RiskLevel, confidence: f64, probabilities: ClassProbabilities) -> Self {
        Self {
            risk_level: level,
            risk_index: level.index() as u8,
            confidence,
            color: level.color().to_string(),
            probabilities,
        }
    }
}
