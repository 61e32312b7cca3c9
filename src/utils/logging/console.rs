//! Console output utilities
//!
//! Human-readable summaries printed by the command line front end.

use crate::algorithm::classifier::ValidationReport;
use crate::service::{DailyLogOutcome, FullAnalysis};

/// Print the hold-out scores of a freshly trained model
pub fn print_validation_summary(report: &ValidationReport, elapsed: std::time::Duration) {
    println!("Trained risk model in {elapsed:?}");
    println!("Validation accuracy: {:.3}", report.accuracy);
    print!("{report}");
}

/// Print the outcome of one submitted report
pub fn print_log_outcome(day: usize, outcome: &DailyLogOutcome) {
    println!(
        "Day {day}: {} risk ({:.1}% confidence), recovery score {:.1}",
        outcome.risk.risk_level, outcome.risk.confidence, outcome.recovery_score
    );
    for alert in &outcome.alerts_triggered {
        println!("  [{}] {}", alert.alert_type, alert.message);
    }
}

/// Print the combined analyses for a patient
pub fn print_analysis_summary(analysis: &FullAnalysis) {
    let recovery = &analysis.recovery_prediction;
    println!("Recovery:");
    println!(
        "  {} of ~{} days ({:.1}%), {} remaining",
        recovery.days_completed,
        recovery.estimated_total_days,
        recovery.progress_pct,
        recovery.days_remaining
    );
    println!("  Expected recovery: {}", recovery.expected_recovery_date);
    println!("  {}", recovery.milestone);

    let complication = &analysis.complication_risk;
    println!(
        "Complication risk: {:.1}% ({})",
        complication.probability, complication.category
    );
    println!("  {}", complication.advice);

    let pattern = &analysis.pain_pattern;
    println!("Pain pattern: {} ({})", pattern.pattern, pattern.trend);
    println!("  {}", pattern.description);

    let tip = &analysis.daily_tip;
    println!("Tip of the day: {} {}", tip.icon, tip.title);
    println!("  {}", tip.content);
    if !tip.urgency_note.is_empty() {
        println!("  {}", tip.urgency_note);
    }
}
