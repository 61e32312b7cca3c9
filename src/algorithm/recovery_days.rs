//! Remaining recovery time estimate

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{CarePathway, RiskLevel};
use crate::utils::round1;

/// Baseline used when the care pathway is not recognised
pub const UNKNOWN_PATHWAY_BASELINE_DAYS: u32 = 30;

/// Estimated recovery timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecoveryDaysResult {
    pub estimated_total_days: i64,
    pub days_completed: i64,
    pub days_remaining: i64,
    pub progress_pct: f64,
    pub milestone: String,
    /// e.g. "March 04, 2026"
    pub expected_recovery_date: String,
}

/// Typical full recovery time for a pathway, in days
#[must_use]
pub const fn baseline_days(pathway: CarePathway) -> u32 {
    match pathway {
        CarePathway::MinorSurgery => 14,
        CarePathway::OrthopedicSurgery => 60,
        CarePathway::GeneralDischarge => 21,
        CarePathway::InjuryRecovery => 30,
        CarePathway::NeuroRehabilitation => 90,
    }
}

#[must_use]
pub const fn risk_multiplier(level: RiskLevel) -> f64 {
    match level {
        RiskLevel::Low => 1.0,
        RiskLevel::Moderate => 1.3,
        RiskLevel::High => 1.6,
        RiskLevel::Critical => 2.0,
    }
}

/// Milestone message for a progress percentage
#[must_use]
pub fn milestone(progress_pct: f64) -> &'static str {
    if progress_pct >= 90.0 {
        "🎉 Almost fully recovered!"
    } else if progress_pct >= 70.0 {
        "💪 Great progress — final stretch!"
    } else if progress_pct >= 50.0 {
        "📈 Halfway there — keep going!"
    } else if progress_pct >= 25.0 {
        "🌱 Early recovery — stay consistent!"
    } else {
        "🏥 Just started — follow your plan carefully."
    }
}

/// Estimate total and remaining recovery days
///
/// High pain lengthens the estimate by up to 50% and good mobility shortens it by up
/// to 30%. Out-of-range scores are not clamped.
#[must_use]
pub fn predict_recovery_days(
    care_pathway: &str,
    risk_level: RiskLevel,
    days_post: i64,
    pain_score: i32,
    mobility: i32,
    today: NaiveDate,
) -> RecoveryDaysResult {
    let base = CarePathway::from_label(care_pathway)
        .map_or(UNKNOWN_PATHWAY_BASELINE_DAYS, baseline_days);

    let pain_factor = 1.0 + (f64::from(pain_score) / 10.0) * 0.5;
    let mobility_factor = 1.0 - (f64::from(mobility) / 10.0) * 0.3;
    let estimated_total =
        (f64::from(base) * risk_multiplier(risk_level) * pain_factor * mobility_factor) as i64;

    let remaining = (estimated_total - days_post).max(0);
    let progress_pct = if estimated_total > 0 {
        round1((days_post as f64 / estimated_total as f64) * 100.0).min(100.0)
    } else {
        100.0
    };

    let expected = u64::try_from(remaining)
        .ok()
        .and_then(|d| today.checked_add_days(Days::new(d)))
        .unwrap_or(today);

    RecoveryDaysResult {
        estimated_total_days: estimated_total,
        days_completed: days_post,
        days_remaining: remaining,
        progress_pct,
        milestone: milestone(progress_pct).to_string(),
        expected_recovery_date: expected.format("%B %d, %Y").to_string(),
    }
}
