#[cfg(test)]
mod tests {
    use crate::utils::{report_with_pain, small_model_config, temp_path, test_model};
    use rehab_engine::algorithm::classifier::model::ARTIFACT_FORMAT_VERSION;
    use rehab_engine::{EngineError, RiskModel, Swelling, WoundStatus, encode};

    #[test]
    fn test_distribution_sums_to_one_hundred() {
        let model = test_model();
        for pain in [0, 3, 6, 9] {
            for fever in [97.5, 99.0, 100.6, 102.4] {
                for swelling in [Swelling::None, Swelling::Severe] {
                    let mut report = report_with_pain(pain);
                    report.fever = fever;
                    report.swelling = swelling;
                    let assessment =
                        model.predict_risk(&encode(&report, "Injury Recovery", 12));

                    assert!(assessment.risk_index <= 3);
                    assert_eq!(assessment.risk_index as usize, assessment.risk_level.index());
                    assert!((assessment.probabilities.total() - 100.0).abs() <= 0.5);
                    assert!((0.0..=100.0).contains(&assessment.confidence));
                    assert_eq!(
                        assessment.confidence,
                        assessment.probabilities.get(assessment.risk_level)
                    );
                }
            }
        }
    }

    #[test]
    fn test_open_wound_is_scored_critical() {
        let mut report = report_with_pain(1);
        report.wound_status = WoundStatus::DischargeOpen;
        report.fever = 102.8;
        let assessment = test_model().predict_risk(&encode(&report, "Minor Surgery", 4));
        assert_eq!(assessment.risk_level, rehab_engine::RiskLevel::Critical);
    }

    #[test]
    fn test_validation_report_is_stored() {
        let report = test_model().validation();
        assert_eq!(report.per_class.len(), 4);
        assert_eq!(report.n_samples, 120);
        assert!(report.accuracy > 0.5);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let path = temp_path("model_round_trip");
        let model = test_model();
        model.save(&path).await.unwrap();

        let loaded = RiskModel::load(&path).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(loaded.validation().n_samples, model.validation().n_samples);
        assert!((loaded.validation().accuracy - model.validation().accuracy).abs() < 1e-9);
        for pain in 0..=10 {
            let features = encode(&report_with_pain(pain), "Orthopedic Surgery", 5);
            let a = model.predict_risk(&features).probabilities.as_array();
            let b = loaded.predict_risk(&features).probabilities.as_array();
            for (x, y) in a.iter().zip(b.iter()) {
                assert!((x - y).abs() < 1e-6);
            }
        }
    }

    #[tokio::test]
    async fn test_incompatible_artifact_is_bootstrap_error() {
        let path = temp_path("model_old_version");
        let mut artifact = test_model().artifact().clone();
        artifact.format_version = ARTIFACT_FORMAT_VERSION + 1;
        tokio::fs::write(&path, serde_json::to_vec(&artifact).unwrap())
            .await
            .unwrap();

        let result = RiskModel::load(&path).await;
        let _ = tokio::fs::remove_file(&path).await;

        match result {
            Err(error @ EngineError::Bootstrap(_)) => assert!(error.is_fatal()),
            other => panic!("expected bootstrap error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_artifact_is_trained_and_saved() {
        let path = temp_path("model_bootstrap");
        let config = small_model_config(path.clone());

        let trained = RiskModel::load_or_train(&config).await.unwrap();
        assert!(tokio::fs::try_exists(&path).await.unwrap());

        let reloaded = RiskModel::load_or_train(&config).await.unwrap();
        let _ = tokio::fs::remove_file(&path).await;

        assert_eq!(
            reloaded.validation().per_class.len(),
            trained.validation().per_class.len()
        );
        assert_eq!(
            reloaded.artifact().n_training_samples,
            trained.artifact().n_training_samples
        );
    }
}
