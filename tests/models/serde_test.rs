#[cfg(test)]
mod tests {
    use rehab_engine::algorithm::thresholds::FEVER_NORMAL_F;
    use rehab_engine::{
        CarePathway, DailyReport, LogEntry, NewPatient, PainTrend, RiskLevel, Swelling,
        WoundStatus,
    };

    #[test]
    fn test_report_uses_display_labels() {
        let json = r#"{
            "pain_score": 4,
            "swelling": "Moderate",
            "fever": 99.1,
            "mobility": 6,
            "wound_status": "Discharge/Open",
            "medication_adherence": 9,
            "pain_trend": "Worsening"
        }"#;

        let report: DailyReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.swelling, Swelling::Moderate);
        assert_eq!(report.wound_status, WoundStatus::DischargeOpen);
        assert_eq!(report.pain_trend, PainTrend::Worsening);
        assert!(report.notes.is_empty());

        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["wound_status"], "Discharge/Open");
        assert_eq!(value["swelling"], "Moderate");
    }

    #[test]
    fn test_unknown_labels_fall_back_to_neutral_defaults() {
        let json = r#"{
            "pain_score": 4,
            "swelling": "Puffy",
            "fever": 99.1,
            "mobility": 6,
            "wound_status": "Itchy",
            "medication_adherence": 9,
            "pain_trend": "Sideways"
        }"#;

        let report: DailyReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.swelling, Swelling::None);
        assert_eq!(report.wound_status, WoundStatus::CleanHealing);
        assert_eq!(report.pain_trend, PainTrend::Stable);
    }

    #[test]
    fn test_log_entry_flattens_report_and_accepts_legacy_names() {
        let json = r#"{
            "pain_score": 7,
            "swelling": "Severe",
            "fever": 101.2,
            "mobility": 2,
            "wound_status": "Redness",
            "medication_adherence": 5,
            "pain_trend": "Stable",
            "notes": "",
            "date": "2026-03-01",
            "days_post_surgery": 9,
            "risk_level": "Critical",
            "risk_index": 3,
            "timestamp": "2026-03-01T08:30:00Z"
        }"#;

        let entry: LogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.report.pain_score, 7);
        assert_eq!(entry.days_post_intervention, 9);
        assert_eq!(entry.risk_level, RiskLevel::Critical);
    }

    #[test]
    fn test_patient_accepts_surgery_field_names() {
        let json = r#"{
            "name": "Lee",
            "age": 44,
            "surgery_type": "Injury Recovery",
            "surgery_date": "2026-02-01",
            "doctor_name": "Dr. Park"
        }"#;

        let patient: NewPatient = serde_json::from_str(json).unwrap();
        assert_eq!(
            CarePathway::from_label(&patient.care_pathway),
            Some(CarePathway::InjuryRecovery)
        );
        assert_eq!(patient.weight_kg, 70.0);
        assert_eq!(patient.height_cm, 170.0);
        assert!(patient.doctor_email.is_empty());
    }

    #[test]
    fn test_default_report_is_afebrile() {
        let report = DailyReport::default();
        assert_eq!(report.fever, FEVER_NORMAL_F);
        assert!(!report.swelling.is_significant());
        assert_eq!(report.pain_trend, PainTrend::Stable);
    }

    #[test]
    fn test_elevated_tiers() {
        let elevated: Vec<RiskLevel> = RiskLevel::ALL
            .into_iter()
            .filter(|l| l.is_elevated())
            .collect();
        assert_eq!(elevated, vec![RiskLevel::High, RiskLevel::Critical]);
    }

    #[test]
    fn test_unknown_risk_label_reads_as_low() {
        let level: RiskLevel = serde_json::from_str("\"Severe\"").unwrap();
        assert_eq!(level, RiskLevel::Low);
    }
}
