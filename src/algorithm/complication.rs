//! Complication probability for the next 48 hours
//!
//! Additive points from a single report, clamped to 0-100 and mapped onto five
//! categories.

use serde::{Deserialize, Serialize};

use crate::algorithm::thresholds::{FEVER_COMPLICATION_STEPS, MOBILITY_LIMITED};
use crate::models::{DailyReport, PainTrend, Swelling, WoundStatus};
use crate::utils::round1;

/// Scored complication risk with display hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplicationResult {
    pub probability: f64,
    pub category: String,
    pub color: String,
    pub advice: String,
    pub next_48hr_risk: String,
}

impl ComplicationResult {
    /// Neutral result for a patient with no reports
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            probability: 0.0,
            category: "Unknown".to_string(),
            color: "#8BAFC8".to_string(),
            advice: "Submit a daily log to calculate complication risk.".to_string(),
            next_48hr_risk: String::new(),
        }
    }
}

/// Upper bound (exclusive), category, color, advice; the last row catches the rest
const CATEGORIES: [(f64, &str, &str, &str); 5] = [
    (
        20.0,
        "Very Low",
        "#22c55e",
        "Your recovery is on track. Maintain your current routine.",
    ),
    (
        40.0,
        "Low",
        "#86efac",
        "Minor concerns detected. Follow your rehab plan carefully.",
    ),
    (
        60.0,
        "Moderate",
        "#f59e0b",
        "Some risk factors present. Contact your doctor if symptoms worsen.",
    ),
    (
        80.0,
        "High",
        "#f97316",
        "Multiple risk factors detected. Schedule a doctor visit today.",
    ),
    (
        f64::INFINITY,
        "Critical",
        "#ef4444",
        "URGENT: High complication risk. Contact doctor immediately.",
    ),
];

fn fever_points(fever: f64) -> f64 {
    FEVER_COMPLICATION_STEPS
        .iter()
        .find(|(threshold, _)| fever >= *threshold)
        .map_or(0.0, |(_, points)| *points)
}

const fn swelling_points(swelling: Swelling) -> f64 {
    match swelling {
        Swelling::None => 0.0,
        Swelling::Mild => 5.0,
        Swelling::Moderate => 10.0,
        Swelling::Severe => 15.0,
    }
}

const fn wound_points(wound: WoundStatus) -> f64 {
    match wound {
        WoundStatus::CleanHealing => 0.0,
        WoundStatus::Redness => 8.0,
        WoundStatus::DischargeOpen => 15.0,
    }
}

const fn trend_points(trend: PainTrend) -> f64 {
    match trend {
        PainTrend::Worsening => 10.0,
        PainTrend::Stable => 2.0,
        PainTrend::Improving => 0.0,
    }
}

/// Raw additive score before category mapping
#[must_use]
pub fn complication_score(report: &DailyReport) -> f64 {
    let mut score = f64::from(report.pain_score) / 10.0 * 25.0;
    score += fever_points(report.fever);
    score += swelling_points(report.swelling);
    score += wound_points(report.wound_status);
    score += trend_points(report.pain_trend);
    if report.mobility <= MOBILITY_LIMITED {
        score += 5.0;
    }
    score -= f64::from(report.medication_adherence) / 10.0 * 8.0;

    round1(score).clamp(0.0, 100.0)
}

/// Score a report and attach its category
#[must_use]
pub fn complication_probability(report: &DailyReport) -> ComplicationResult {
    let probability = complication_score(report);
    let (_, category, color, advice) = CATEGORIES
        .iter()
        .find(|(upper, ..)| probability < *upper)
        .copied()
        .unwrap_or(CATEGORIES[CATEGORIES.len() - 1]);

    ComplicationResult {
        probability,
        category: category.to_string(),
        color: color.to_string(),
        advice: advice.to_string(),
        next_48hr_risk: format!("{probability:.1}% chance of complication in next 48 hours"),
    }
}
