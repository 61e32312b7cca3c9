#[cfg(test)]
mod tests {
    use crate::utils::report_with_pain;
    use rehab_engine::algorithm::classifier::label_risk;
    use rehab_engine::algorithm::features::{FeatureVector, N_FEATURES};
    use rehab_engine::{DailyReport, PainTrend, Swelling, WoundStatus, encode};

    #[test]
    fn test_encoding_order() {
        let report = DailyReport {
            pain_score: 6,
            swelling: Swelling::Moderate,
            fever: 99.9,
            mobility: 4,
            wound_status: WoundStatus::Redness,
            medication_adherence: 7,
            pain_trend: PainTrend::Worsening,
            notes: "stairs were hard".to_string(),
        };

        let features = encode(&report, "Stroke Rehab", 12);
        assert_eq!(
            features.to_array(),
            [6.0, 2.0, 99.9, 4.0, 1.0, 7.0, 12.0, 4.0, 1.0]
        );
        assert_eq!(features.to_array().len(), N_FEATURES);
    }

    #[test]
    fn test_unknown_pathway_encodes_as_general_discharge() {
        let report = report_with_pain(3);
        assert_eq!(encode(&report, "Hip Replacement", 1).care_pathway_code, 2);
        assert_eq!(encode(&report, "general discharge", 1).care_pathway_code, 2);
        assert_eq!(encode(&report, "Minor Surgery", 1).care_pathway_code, 0);
    }

    #[test]
    fn test_out_of_range_values_pass_through() {
        let mut report = report_with_pain(14);
        report.fever = 110.0;
        let features = encode(&report, "Minor Surgery", -2);
        assert_eq!(features.pain_score, 14);
        assert_eq!(features.fever, 110.0);
        assert_eq!(features.days_post_intervention, -2);
    }

    #[test]
    fn test_rising_fever_never_lowers_label() {
        let swellings = [Swelling::None, Swelling::Mild, Swelling::Moderate];
        for pain in 0..=7 {
            for swelling in swellings {
                for trend in [-1, 0, 1] {
                    let mut previous = 0;
                    for tenth in 980..=1040 {
                        let vector = FeatureVector {
                            pain_score: pain,
                            swelling_code: swelling.code(),
                            fever: f64::from(tenth) / 10.0,
                            mobility: 5,
                            wound_code: 0,
                            medication_adherence: 8,
                            days_post_intervention: 10,
                            care_pathway_code: 2,
                            pain_trend_code: trend,
                        };
                        let index = label_risk(&vector).index();
                        assert!(index >= previous, "label dropped at {}", vector.fever);
                        previous = index;
                    }
                }
            }
        }
    }
}
