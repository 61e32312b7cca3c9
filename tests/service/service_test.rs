#[cfg(test)]
mod tests {
    use crate::utils::{
        orthopedic_patient, report_with_pain, reports_with_pain, temp_path, test_clock,
        test_model,
    };
    use rehab_engine::service::assess_history;
    use rehab_engine::{
        AlertType, EngineError, JsonStore, RecoveryService, Swelling, recovery_score,
    };

    fn service(name: &str) -> (RecoveryService, std::path::PathBuf) {
        let path = temp_path(name);
        let service =
            RecoveryService::new(JsonStore::new(&path), test_model()).with_clock(test_clock());
        (service, path)
    }

    #[tokio::test]
    async fn test_register_and_fetch_patient() {
        let (service, path) = service("register");

        let patient = service.register_patient(orthopedic_patient()).await.unwrap();
        assert_eq!(patient.id.len(), 8);
        assert!(patient.id.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

        let fetched = service.patient(&patient.id).await.unwrap();
        assert_eq!(fetched, patient);
        assert_eq!(service.list_patients().await.unwrap(), vec![patient.clone()]);

        // A second service over the same file sees the same data
        let reopened = RecoveryService::new(JsonStore::new(&path), test_model());
        assert_eq!(reopened.patient(&patient.id).await.unwrap(), patient);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_unknown_patient() {
        let (service, path) = service("unknown_patient");
        let result = service.dashboard("deadbeef").await;
        assert!(matches!(result, Err(EngineError::PatientNotFound(id)) if id == "deadbeef"));

        let result = service.submit_daily_log("deadbeef", report_with_pain(2)).await;
        assert!(matches!(result, Err(EngineError::PatientNotFound(_))));
        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_empty_name_is_rejected() {
        let (service, path) = service("empty_name");
        let mut details = orthopedic_patient();
        details.name = "  ".to_string();
        let result = service.register_patient(details).await;
        assert!(matches!(result, Err(EngineError::Validation(_))));
        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_submit_appends_and_escalates() {
        let (service, path) = service("escalation");
        let patient = service.register_patient(orthopedic_patient()).await.unwrap();

        let mut outcomes = Vec::new();
        for report in reports_with_pain(&[3, 5, 7]) {
            outcomes.push(service.submit_daily_log(&patient.id, report).await.unwrap());
        }

        let last = outcomes.last().unwrap();
        assert_eq!(last.days_post_intervention, 10);
        assert_eq!(last.rehab_plan.recovery_phase, "Sub-Acute Phase (Days 8–21)");
        assert!(
            last.alerts_triggered
                .iter()
                .any(|a| a.alert_type == AlertType::Escalation)
        );
        assert!(
            outcomes[..2]
                .iter()
                .flat_map(|o| &o.alerts_triggered)
                .all(|a| a.alert_type != AlertType::Escalation)
        );

        let logs = service.logs(&patient.id).await.unwrap();
        assert_eq!(logs.logs.len(), 3);
        assert_eq!(logs.recovery_score, recovery_score(logs.logs.as_slice()));
        assert_eq!(last.recovery_score, logs.recovery_score);
        assert_eq!(logs.logs[2].risk_level, last.risk.risk_level);

        let stored = service.alerts().await.unwrap();
        assert!(
            stored
                .iter()
                .any(|a| a.alert_type == AlertType::Escalation && a.patient_id == patient.id)
        );

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_fever_swelling_alert_is_persisted() {
        let (service, path) = service("fever_swelling");
        let patient = service.register_patient(orthopedic_patient()).await.unwrap();

        let mut report = report_with_pain(3);
        report.fever = 101.0;
        report.swelling = Swelling::Severe;
        let outcome = service.submit_daily_log(&patient.id, report.clone()).await.unwrap();
        assert!(
            outcome
                .alerts_triggered
                .iter()
                .any(|a| a.alert_type == AlertType::FeverSwelling)
        );

        // Alerts are not deduplicated
        service.submit_daily_log(&patient.id, report).await.unwrap();
        let fever_alerts = service
            .alerts()
            .await
            .unwrap()
            .into_iter()
            .filter(|a| a.alert_type == AlertType::FeverSwelling)
            .count();
        assert_eq!(fever_alerts, 2);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_non_finite_fever_is_rejected() {
        let (service, path) = service("nan_fever");
        let patient = service.register_patient(orthopedic_patient()).await.unwrap();
        let mut report = report_with_pain(3);
        report.fever = f64::NAN;

        let result = service.submit_daily_log(&patient.id, report).await;
        assert!(matches!(result, Err(EngineError::Validation(_))));
        assert!(service.logs(&patient.id).await.unwrap().logs.is_empty());
        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_extreme_scores_are_stored_and_scored() {
        let (service, path) = service("extreme_scores");
        let patient = service.register_patient(orthopedic_patient()).await.unwrap();

        for pain in [i32::MIN, i32::MAX, i32::MAX] {
            service
                .submit_daily_log(&patient.id, report_with_pain(pain))
                .await
                .unwrap();
        }

        let logs = service.logs(&patient.id).await.unwrap();
        assert_eq!(logs.logs[1].report.pain_score, i32::MAX);
        assert_eq!(logs.recovery_score, 0.0);
        assert_eq!(service.dashboard(&patient.id).await.unwrap().total_logs, 3);
        // Three reports: the early and recent windows coincide
        let pattern = service.pain_pattern(&patient.id).await.unwrap();
        assert_eq!(pattern.pattern, "Early Recovery");
        assert_eq!(pattern.peak_score, Some(i32::MAX));

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_views_before_first_log() {
        let (service, path) = service("no_logs");
        let patient = service.register_patient(orthopedic_patient()).await.unwrap();

        let dashboard = service.dashboard(&patient.id).await.unwrap();
        assert_eq!(dashboard.latest_risk, "Unknown");
        assert_eq!(dashboard.latest_risk_index, 0);
        assert_eq!(dashboard.total_logs, 0);
        assert_eq!(dashboard.recovery_score, 0.0);

        let result = service.complication_risk(&patient.id).await;
        assert!(matches!(result, Err(EngineError::Prerequisite(_))));

        let analysis = service.full_analysis(&patient.id).await.unwrap();
        assert_eq!(analysis.complication_risk.category, "Unknown");
        assert_eq!(analysis.complication_risk.probability, 0.0);
        assert_eq!(analysis.pain_pattern.pattern, "Insufficient Data");
        // Low risk, pain 5, mobility 5: 60 × 1.25 × 0.85
        assert_eq!(analysis.recovery_prediction.estimated_total_days, 63);
        assert_eq!(analysis.recovery_prediction.days_completed, 10);
        assert_eq!(analysis.daily_tip.title, "Weight Bearing");
        assert_eq!(analysis.daily_tip.day_number, 10);

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn test_dashboard_shows_last_week() {
        let (service, path) = service("dashboard");
        let patient = service.register_patient(orthopedic_patient()).await.unwrap();
        for report in reports_with_pain(&[8, 8, 7, 7, 6, 5, 5, 4, 4]) {
            service.submit_daily_log(&patient.id, report).await.unwrap();
        }

        let dashboard = service.dashboard(&patient.id).await.unwrap();
        assert_eq!(dashboard.total_logs, 9);
        assert_eq!(dashboard.logs.len(), 7);
        assert_eq!(dashboard.logs[0].report.pain_score, 7);
        assert_eq!(
            dashboard.latest_risk,
            dashboard.logs[6].risk_level.to_string()
        );

        let complication = service.complication_risk(&patient.id).await.unwrap();
        // Pain 4, stable trend, full adherence: 10 + 2 - 8
        assert_eq!(complication.probability, 4.0);
        assert_eq!(complication.category, "Very Low");

        let pattern = service.pain_pattern(&patient.id).await.unwrap();
        assert_eq!(pattern.pattern, "Steady Improvement");

        let _ = tokio::fs::remove_file(&path).await;
    }

    #[test]
    fn test_assess_history_requires_a_report() {
        let result = assess_history(test_model(), &[], "Minor Surgery", 3, test_clock());
        assert!(matches!(result, Err(EngineError::Prerequisite(_))));
    }

    #[test]
    fn test_assess_history_bundles_every_output() {
        let history = reports_with_pain(&[3, 5, 7]);
        let result =
            assess_history(test_model(), &history, "Minor Surgery", 3, test_clock()).unwrap();

        assert!(result.alerts.iter().any(|a| a.alert_type == AlertType::Escalation));
        assert_eq!(result.recovery_score, recovery_score(&history));
        assert_eq!(result.daily_tip.day_number, 3);
        assert_eq!(result.recovery_prediction.days_completed, 3);
        assert_eq!(result.pain_pattern.scores, vec![3, 5, 7]);
    }
}
