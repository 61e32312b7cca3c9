#[cfg(test)]
mod tests {
    use crate::utils::report_with_pain;
    use rehab_engine::{DailyReport, Swelling, recovery_score};

    fn report(pain_score: i32, mobility: i32) -> DailyReport {
        DailyReport {
            mobility,
            ..report_with_pain(pain_score)
        }
    }

    #[test]
    fn test_empty_history_scores_zero() {
        let history: Vec<DailyReport> = Vec::new();
        assert_eq!(recovery_score(&history), 0.0);
    }

    #[test]
    fn test_single_report() {
        assert_eq!(recovery_score(&[report(2, 6)]), 86.0);
        assert_eq!(recovery_score(&[report(0, 10)]), 100.0);
        assert_eq!(recovery_score(&[report(10, 0)]), 50.0);
    }

    #[test]
    fn test_first_against_latest() {
        let history = vec![report(8, 2), report(9, 0), report(4, 5)];
        // 40 + 4 × 5 + 3 × 3
        assert_eq!(recovery_score(&history), 69.0);
    }

    #[test]
    fn test_fever_and_swelling_penalties() {
        let mut latest = report(4, 5);
        latest.fever = 100.4;
        latest.swelling = Swelling::Moderate;
        assert_eq!(recovery_score(&[report(8, 2), latest]), 44.0);
    }

    #[test]
    fn test_score_always_within_bounds() {
        for first_pain in 0..=10 {
            for latest_pain in 0..=10 {
                for mobility in [0, 5, 10] {
                    let mut latest = report(latest_pain, 10 - mobility);
                    latest.fever = 103.0;
                    latest.swelling = Swelling::Severe;
                    let history = [report(first_pain, mobility), latest];
                    let score = recovery_score(&history);
                    assert!((0.0..=100.0).contains(&score));
                    assert_eq!(score, recovery_score(&history));
                }
            }
        }
        // Out-of-range inputs are clamped on the way out
        assert_eq!(recovery_score(&[report(-20, 30)]), 100.0);
        assert_eq!(recovery_score(&[report(0, 0), report(40, 0)]), 0.0);
    }

    #[test]
    fn test_extreme_scores_do_not_overflow() {
        assert_eq!(recovery_score(&[report(i32::MIN, 5)]), 100.0);
        assert_eq!(recovery_score(&[report(i32::MAX, 5)]), 0.0);
        assert_eq!(recovery_score(&[report(-10, 5), report(i32::MAX, 5)]), 0.0);
        assert_eq!(recovery_score(&[report(i32::MAX, 5), report(i32::MIN, 5)]), 100.0);
        assert_eq!(recovery_score(&[report(5, i32::MIN), report(5, i32::MAX)]), 100.0);
    }
}
