#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rehab_engine::algorithm::recovery_days::{UNKNOWN_PATHWAY_BASELINE_DAYS, baseline_days};
    use rehab_engine::{CarePathway, RiskLevel, predict_recovery_days};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    #[test]
    fn test_halfway_orthopedic() {
        let result =
            predict_recovery_days("Orthopedic Surgery", RiskLevel::Low, 21, 0, 10, today());

        assert_eq!(result.estimated_total_days, 42);
        assert_eq!(result.days_completed, 21);
        assert_eq!(result.days_remaining, 21);
        assert_eq!(result.progress_pct, 50.0);
        assert_eq!(result.milestone, "📈 Halfway there — keep going!");
        assert_eq!(result.expected_recovery_date, "January 22, 2026");
    }

    #[test]
    fn test_unknown_pathway_uses_thirty_days() {
        assert_eq!(UNKNOWN_PATHWAY_BASELINE_DAYS, 30);
        assert_ne!(
            baseline_days(CarePathway::GeneralDischarge),
            UNKNOWN_PATHWAY_BASELINE_DAYS
        );

        let result = predict_recovery_days("Dental Implant", RiskLevel::Low, 3, 0, 0, today());
        assert_eq!(result.estimated_total_days, 30);
        assert_eq!(result.progress_pct, 10.0);
        assert_eq!(result.milestone, "🏥 Just started — follow your plan carefully.");
    }

    #[test]
    fn test_risk_and_pain_lengthen_recovery() {
        let result =
            predict_recovery_days("General Discharge", RiskLevel::Critical, 0, 10, 10, today());
        // 21 × 2.0 × 1.5 × 0.7 = 44.1
        assert_eq!(result.estimated_total_days, 44);
    }

    #[test]
    fn test_progress_is_capped_and_remaining_never_negative() {
        let result =
            predict_recovery_days("Orthopedic Surgery", RiskLevel::Low, 100, 0, 10, today());
        assert_eq!(result.days_remaining, 0);
        assert_eq!(result.progress_pct, 100.0);
        assert_eq!(result.milestone, "🎉 Almost fully recovered!");
        assert_eq!(result.expected_recovery_date, "January 01, 2026");
    }

    #[test]
    fn test_zero_estimate_counts_as_complete() {
        // Out-of-range mobility drives the estimate to zero
        let result = predict_recovery_days("Minor Surgery", RiskLevel::Low, 5, 0, 34, today());
        assert_eq!(result.estimated_total_days, 0);
        assert_eq!(result.progress_pct, 100.0);
        assert_eq!(result.days_remaining, 0);
    }
}
