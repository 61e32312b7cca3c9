//! Recovery progress score (0-100)
//!
//! With two or more reports the score compares the first report against the latest
//! one; reports in between do not contribute.

use crate::algorithm::thresholds::FEVER_ELEVATED_F;
use crate::models::DailyReport;
use crate::utils::round1;

const SINGLE_BASELINE: f64 = 50.0;
const TREND_BASELINE: f64 = 40.0;

/// Score a patient's ordered report history
#[must_use]
pub fn recovery_score<R: AsRef<DailyReport>>(history: &[R]) -> f64 {
    let (Some(first), Some(latest)) = (history.first(), history.last()) else {
        return 0.0;
    };
    let (first, latest) = (first.as_ref(), latest.as_ref());

    let score = if history.len() == 1 {
        SINGLE_BASELINE
            + (10.0 - f64::from(latest.pain_score)) * 3.0
            + f64::from(latest.mobility) * 2.0
    } else {
        // Scores are not range checked; widen before subtracting
        let pain_improvement = f64::from(first.pain_score) - f64::from(latest.pain_score);
        let mobility_improvement = f64::from(latest.mobility) - f64::from(first.mobility);

        let mut score = TREND_BASELINE + pain_improvement * 5.0 + mobility_improvement * 3.0;
        if latest.fever >= FEVER_ELEVATED_F {
            score -= 15.0;
        }
        if latest.swelling.is_significant() {
            score -= 10.0;
        }
        score
    };

    round1(score).clamp(0.0, 100.0)
}
