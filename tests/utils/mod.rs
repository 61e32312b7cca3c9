use std::path::PathBuf;
use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rehab_engine::{
    Clock, DailyReport, ModelConfig, NewPatient, PainTrend, RiskModel, Swelling, WoundStatus,
};

/// Fixed "now" used by service tests
#[must_use]
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
}

#[must_use]
pub fn test_clock() -> Clock {
    Clock::Fixed(test_now())
}

/// Unique path under the system temp directory; any leftover file is removed
#[must_use]
pub fn temp_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "rehab_engine_{}_{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    path
}

/// Reduced model configuration so tests train quickly
#[must_use]
pub fn small_model_config(path: PathBuf) -> ModelConfig {
    ModelConfig {
        path,
        n_samples: 600,
        n_estimators: 10,
        n_threads: 2,
        show_progress: false,
        ..ModelConfig::default()
    }
}

/// One small model shared by every test in the binary
#[must_use]
pub fn test_model() -> &'static RiskModel {
    static MODEL: OnceLock<RiskModel> = OnceLock::new();
    MODEL.get_or_init(|| {
        RiskModel::train(&small_model_config(temp_path("unused_model"))).expect("training failed")
    })
}

/// A benign report with the given pain score
#[must_use]
pub fn report_with_pain(pain_score: i32) -> DailyReport {
    DailyReport {
        pain_score,
        swelling: Swelling::None,
        fever: 98.6,
        mobility: 6,
        wound_status: WoundStatus::CleanHealing,
        medication_adherence: 10,
        pain_trend: PainTrend::Stable,
        notes: String::new(),
    }
}

#[must_use]
pub fn reports_with_pain(scores: &[i32]) -> Vec<DailyReport> {
    scores.iter().copied().map(report_with_pain).collect()
}

/// An orthopedic patient ten days after surgery at [`test_now`]
#[must_use]
pub fn orthopedic_patient() -> NewPatient {
    NewPatient {
        name: "Asha Menon".to_string(),
        age: 61,
        care_pathway: "Orthopedic Surgery".to_string(),
        start_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
        doctor_name: "Dr. Okafor".to_string(),
        doctor_email: "okafor@example.org".to_string(),
        weight_kg: 64.0,
        height_cm: 162.0,
    }
}
