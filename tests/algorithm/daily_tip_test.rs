#[cfg(test)]
mod tests {
    use rehab_engine::{RiskLevel, daily_tip};

    #[test]
    fn test_tips_rotate_weekly() {
        let day_3 = daily_tip("Orthopedic Surgery", 3, RiskLevel::Low);
        let day_10 = daily_tip("Orthopedic Surgery", 10, RiskLevel::Low);

        assert_eq!(day_3.title, "Weight Bearing");
        assert_eq!(day_3.title, day_10.title);
        assert_eq!(day_10.day_number, 10);
        assert_eq!(day_10.tip_category, "Orthopedic Surgery");
        assert!(day_10.urgency_note.is_empty());
    }

    #[test]
    fn test_unknown_pathway_uses_general_tips() {
        let tip = daily_tip("Something Else", 0, RiskLevel::Low);
        assert_eq!(tip.title, "Follow-up");
        assert_eq!(tip.tip_category, "Something Else");
    }

    #[test]
    fn test_negative_days_wrap() {
        let tip = daily_tip("Minor Surgery", -1, RiskLevel::Low);
        assert_eq!(tip.title, "Sleep");
    }

    #[test]
    fn test_urgency_note_for_elevated_risk() {
        assert!(
            daily_tip("Stroke Rehab", 1, RiskLevel::Critical)
                .urgency_note
                .contains("critical status")
        );
        assert!(
            daily_tip("Stroke Rehab", 1, RiskLevel::High)
                .urgency_note
                .contains("high risk status")
        );
        assert!(daily_tip("Stroke Rehab", 1, RiskLevel::Moderate).urgency_note.is_empty());
        assert!(daily_tip("Stroke Rehab", 1, RiskLevel::Low).urgency_note.is_empty());

        for level in RiskLevel::ALL {
            let note = daily_tip("Minor Surgery", 2, level).urgency_note;
            assert_eq!(level.is_elevated(), note.starts_with("⚠️ "));
        }
    }
}
