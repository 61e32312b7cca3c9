#[cfg(test)]
mod tests {
    use rehab_engine::algorithm::rehab::{RecoveryPhase, rehab_plan_for_label};
    use rehab_engine::{RiskLevel, rehab_plan};

    #[test]
    fn test_lookup_by_pathway_and_tier() {
        let plan = rehab_plan("Orthopedic Surgery", RiskLevel::Low, 3);
        assert_eq!(plan.exercises.len(), 5);
        assert_eq!(plan.goals, "Restore joint range of motion and strength");

        let plan = rehab_plan("Stroke Rehab", RiskLevel::Critical, 3);
        assert!(plan.exercises[0].contains("secondary stroke"));
        assert!(plan.restrictions[0].starts_with("FAST protocol"));
    }

    #[test]
    fn test_unknown_pathway_uses_general_discharge() {
        let fallback = rehab_plan("Cataract Surgery", RiskLevel::Moderate, 10);
        let general = rehab_plan("General Discharge", RiskLevel::Moderate, 10);
        assert_eq!(fallback, general);
        assert_eq!(fallback.goals, "Stabilize and monitor closely");
    }

    #[test]
    fn test_unknown_tier_label_uses_low() {
        let plan = rehab_plan_for_label("Minor Surgery", "Elevated", 2);
        assert_eq!(plan, rehab_plan("Minor Surgery", RiskLevel::Low, 2));
    }

    #[test]
    fn test_phase_breakpoints() {
        let cases = [
            (0, RecoveryPhase::Acute),
            (7, RecoveryPhase::Acute),
            (8, RecoveryPhase::SubAcute),
            (21, RecoveryPhase::SubAcute),
            (22, RecoveryPhase::FunctionalRecovery),
            (42, RecoveryPhase::FunctionalRecovery),
            (43, RecoveryPhase::ReturnToActivity),
        ];
        for (days, phase) in cases {
            assert_eq!(RecoveryPhase::from_days(days), phase, "day {days}");
        }

        let plan = rehab_plan("Injury Recovery", RiskLevel::Low, 30);
        assert_eq!(plan.recovery_phase, "Functional Recovery (Days 22–42)");
        assert_eq!(
            plan.phase_note,
            "Increase activity gradually. Focus on functional tasks."
        );
        assert!(!plan.diet.is_empty());
        assert!(!plan.lifestyle.is_empty());
        assert!(!plan.monitoring.is_empty());
    }

    #[test]
    fn test_plan_is_pure() {
        for level in RiskLevel::ALL {
            for days in [-3, 0, 14, 60] {
                assert_eq!(
                    rehab_plan("Minor Surgery", level, days),
                    rehab_plan("Minor Surgery", level, days)
                );
            }
        }
    }
}
