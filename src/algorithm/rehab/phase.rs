//! Recovery phases derived from days since the intervention

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse time bucket used to tailor guidance
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecoveryPhase {
    Acute,
    SubAcute,
    FunctionalRecovery,
    ReturnToActivity,
}

impl RecoveryPhase {
    /// Bucket `days_post`; breakpoints at 7, 21 and 42 days inclusive
    ///
    /// Negative values land in the acute phase.
    #[must_use]
    pub const fn from_days(days_post: i64) -> Self {
        if days_post <= 7 {
            Self::Acute
        } else if days_post <= 21 {
            Self::SubAcute
        } else if days_post <= 42 {
            Self::FunctionalRecovery
        } else {
            Self::ReturnToActivity
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Acute => "Acute Phase (Days 1–7)",
            Self::SubAcute => "Sub-Acute Phase (Days 8–21)",
            Self::FunctionalRecovery => "Functional Recovery (Days 22–42)",
            Self::ReturnToActivity => "Return to Activity (Day 42+)",
        }
    }

    #[must_use]
    pub const fn note(self) -> &'static str {
        match self {
            Self::Acute => "Focus on rest, pain management, and basic mobility.",
            Self::SubAcute => "Begin progressive strengthening. Gentle exercises allowed.",
            Self::FunctionalRecovery => "Increase activity gradually. Focus on functional tasks.",
            Self::ReturnToActivity => "Progressive loading. Prepare for full daily activities.",
        }
    }

    #[must_use]
    pub const fn diet(self) -> &'static [&'static str] {
        match self {
            Self::Acute => &[
                "Small, frequent meals that are easy to digest",
                "At least 8 glasses of water daily",
                "Protein with every meal to support tissue repair",
            ],
            Self::SubAcute => &[
                "Protein-rich foods such as eggs, dal, fish and chicken",
                "Fruit and vegetables rich in vitamin C and zinc",
                "Limit salt to help control swelling",
            ],
            Self::FunctionalRecovery => &[
                "Balanced meals with whole grains for steady energy",
                "Calcium and vitamin D sources for bone strength",
                "Keep hydrated around exercise sessions",
            ],
            Self::ReturnToActivity => &[
                "Return to a regular balanced diet",
                "Match calorie intake to your growing activity level",
                "Avoid alcohol while still on medication",
            ],
        }
    }

    #[must_use]
    pub const fn lifestyle(self) -> &'static [&'static str] {
        match self {
            Self::Acute => &[
                "Sleep 7-9 hours and rest during the day",
                "Keep essentials within easy reach to avoid falls",
                "No driving while on strong pain medication",
            ],
            Self::SubAcute => &[
                "Add short walks to your daily routine",
                "Avoid lifting, pushing or pulling heavy objects",
                "Keep a regular sleep schedule",
            ],
            Self::FunctionalRecovery => &[
                "Resume light household tasks",
                "Build activity up in small weekly steps",
                "Stop any activity that causes sharp pain",
            ],
            Self::ReturnToActivity => &[
                "Plan your return to work with your doctor",
                "Reintroduce sport gradually",
                "Keep your home exercise program going",
            ],
        }
    }
}

impl fmt::Display for RecoveryPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
