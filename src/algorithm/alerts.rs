//! Alert rules evaluated after every submitted report
//!
//! Three independent rules; each one that matches produces one alert. Alerts are not
//! deduplicated, so a condition that persists raises a new alert every day.

use chrono::{DateTime, Utc};

use crate::algorithm::thresholds::{ESCALATION_WINDOW, FEVER_ELEVATED_F};
use crate::models::{Alert, AlertType, DailyReport, RiskAssessment, RiskLevel};

/// Pain rose strictly on each of the last [`ESCALATION_WINDOW`] reports
#[must_use]
pub fn pain_escalating<R: AsRef<DailyReport>>(history: &[R]) -> bool {
    if history.len() < ESCALATION_WINDOW {
        return false;
    }
    history[history.len() - ESCALATION_WINDOW..]
        .windows(2)
        .all(|w| w[0].as_ref().pain_score < w[1].as_ref().pain_score)
}

/// Elevated fever together with moderate or severe swelling
#[must_use]
pub fn fever_with_swelling(report: &DailyReport) -> bool {
    report.fever >= FEVER_ELEVATED_F && report.swelling.is_significant()
}

/// Evaluate every alert rule against a patient's history
///
/// `history` must already include the report that `assessment` was computed for.
#[must_use]
pub fn evaluate_alerts<R: AsRef<DailyReport>>(
    history: &[R],
    patient_name: &str,
    patient_id: &str,
    assessment: &RiskAssessment,
    now: DateTime<Utc>,
) -> Vec<Alert> {
    let alert = |alert_type: AlertType, message: String| Alert {
        alert_type,
        message,
        patient: patient_name.to_string(),
        patient_id: patient_id.to_string(),
        timestamp: now,
    };

    let mut alerts = Vec::new();

    if usize::from(assessment.risk_index) >= RiskLevel::Critical.index() {
        alerts.push(alert(
            AlertType::Critical,
            format!(
                "CRITICAL risk detected for patient {patient_name}. Immediate medical attention required."
            ),
        ));
    }

    if pain_escalating(history) {
        alerts.push(alert(
            AlertType::Escalation,
            format!(
                "Pain has increased for {ESCALATION_WINDOW} consecutive days for {patient_name}. Doctor review needed."
            ),
        ));
    }

    if history.last().is_some_and(|r| fever_with_swelling(r.as_ref())) {
        alerts.push(alert(
            AlertType::FeverSwelling,
            format!(
                "Fever + Swelling combination detected for {patient_name}. Possible infection, contact doctor."
            ),
        ));
    }

    alerts
}
