//! Pain pattern detection over the most recent reports

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::algorithm::thresholds::PAIN_PATTERN_WINDOW;
use crate::models::DailyReport;
use crate::utils::round1;

/// Detected pattern with display hints and summary statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PainPatternResult {
    pub pattern: String,
    /// improving, worsening, stable, fluctuating, early or unknown
    pub trend: String,
    pub icon: String,
    pub color: String,
    pub description: String,
    pub recommendation: String,
    pub scores: Vec<i32>,
    pub average: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_score: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_score: Option<i32>,
    /// 1-based position of the highest score in `scores`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_day: Option<usize>,
    /// 1-based position of the lowest score in `scores`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_day: Option<usize>,
    pub trend_change: f64,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct StepCounts {
    increasing: usize,
    decreasing: usize,
    stable: usize,
}

fn step_counts(scores: &[i32]) -> StepCounts {
    scores
        .iter()
        .tuple_windows()
        .fold(StepCounts::default(), |mut acc, (a, b)| {
            match b.cmp(a) {
                Ordering::Greater => acc.increasing += 1,
                Ordering::Less => acc.decreasing += 1,
                Ordering::Equal => acc.stable += 1,
            }
            acc
        })
}

fn mean(values: &[i32]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

/// Recent-minus-early change in pain
fn trend_diff(scores: &[i32]) -> f64 {
    match scores {
        [] | [_] => 0.0,
        s if s.len() >= 3 => mean(&s[s.len() - 3..]) - mean(&s[..3]),
        [first, .., last] => f64::from(*last) - f64::from(*first),
    }
}

/// 1-based position of the first occurrence of `target`
fn first_position(scores: &[i32], target: Option<i32>) -> Option<usize> {
    let target = target?;
    scores.iter().position(|&s| s == target).map(|i| i + 1)
}

fn insufficient_data(scores: Vec<i32>) -> PainPatternResult {
    PainPatternResult {
        pattern: "Insufficient Data".to_string(),
        trend: "unknown".to_string(),
        icon: "📊".to_string(),
        color: "#8BAFC8".to_string(),
        description: "Log at least 2 days of data to see pain pattern analysis.".to_string(),
        recommendation: "Continue logging daily symptoms.".to_string(),
        average: round1(mean(&scores)),
        peak_score: None,
        best_score: None,
        peak_day: None,
        best_day: None,
        scores,
        trend_change: 0.0,
    }
}

/// Classify the pain scores of the last reports in `history`
#[must_use]
pub fn analyze_pain_pattern<R: AsRef<DailyReport>>(history: &[R]) -> PainPatternResult {
    let start = history.len().saturating_sub(PAIN_PATTERN_WINDOW);
    let scores: Vec<i32> = history[start..]
        .iter()
        .map(|r| r.as_ref().pain_score)
        .collect();

    if scores.len() < 2 {
        return insufficient_data(scores);
    }

    let diff = trend_diff(&scores);
    let steps = step_counts(&scores);

    let (pattern, trend, icon, color, description, recommendation) =
        if diff <= -2.0 && steps.decreasing >= steps.increasing {
            (
                "Steady Improvement",
                "improving",
                "📉",
                "#22c55e",
                format!(
                    "Your pain has decreased by {:.1} points. Excellent recovery progress!",
                    round1(diff.abs())
                ),
                "Continue your current rehab plan. You're on the right track.",
            )
        } else if diff >= 2.0 && steps.increasing >= steps.decreasing {
            (
                "Worsening Trend",
                "worsening",
                "📈",
                "#ef4444",
                format!(
                    "Pain has increased by {:.1} points over recent days. This needs attention.",
                    round1(diff)
                ),
                "Contact your doctor. Reduce activity intensity immediately.",
            )
        } else if diff.abs() <= 1.0 && steps.stable >= 2 {
            (
                "Plateau",
                "stable",
                "➡️",
                "#f59e0b",
                "Pain score has been stable. Recovery may have reached a plateau.".to_string(),
                "Discuss with your physiotherapist about progressing your exercises.",
            )
        } else if steps.increasing > 0 && steps.decreasing > 0 {
            (
                "Fluctuating",
                "fluctuating",
                "〰️",
                "#f97316",
                "Pain is going up and down inconsistently. Possible over-exertion.".to_string(),
                "Rest more between exercise sessions. Avoid pushing through pain.",
            )
        } else {
            (
                "Early Recovery",
                "early",
                "🌱",
                "#00b4ff",
                "Not enough data yet for full pattern analysis.".to_string(),
                "Keep logging daily. Pattern will emerge in 3-5 days.",
            )
        };

    let peak_score = scores.iter().copied().max();
    let best_score = scores.iter().copied().min();

    PainPatternResult {
        pattern: pattern.to_string(),
        trend: trend.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
        description,
        recommendation: recommendation.to_string(),
        average: round1(mean(&scores)),
        peak_score,
        best_score,
        peak_day: first_position(&scores, peak_score),
        best_day: first_position(&scores, best_score),
        trend_change: round1(diff),
        scores,
    }
}
