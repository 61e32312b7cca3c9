//! Request-level operations over the decision engine and the document store
//!
//! [`RecoveryService`] is what an HTTP or CLI front end calls. It owns the JSON store,
//! borrows the process-wide risk model and computes every derived view on demand from
//! the stored log history.

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::algorithm::complication::ComplicationResult;
use crate::algorithm::daily_tip::DailyTipResult;
use crate::algorithm::pain_pattern::PainPatternResult;
use crate::algorithm::recovery_days::RecoveryDaysResult;
use crate::algorithm::rehab::RehabPlan;
use crate::algorithm::{
    RiskModel, analyze_pain_pattern, complication_probability, daily_tip, encode,
    evaluate_alerts, predict_recovery_days, recovery_score, rehab_plan, shared_model,
};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::models::{
    Alert, DailyReport, LogEntry, NewPatient, Patient, RiskAssessment, RiskLevel,
};
use crate::store::{JsonStore, StoreDocument};
use crate::utils::logging::{log_alert, log_assessment};

/// Pain score assumed when a patient has not logged anything yet
const DEFAULT_PAIN_SCORE: i32 = 5;
/// Mobility assumed when a patient has not logged anything yet
const DEFAULT_MOBILITY: i32 = 5;
/// Number of recent logs shown on the dashboard
const DASHBOARD_LOGS: usize = 7;

/// Source of the current time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    /// Always returns the same instant
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn now(self) -> DateTime<Utc> {
        match self {
            Self::System => Utc::now(),
            Self::Fixed(at) => at,
        }
    }

    #[must_use]
    pub fn today(self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Everything derived from one submitted report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogOutcome {
    pub risk: RiskAssessment,
    pub rehab_plan: RehabPlan,
    pub recovery_score: f64,
    pub days_post_intervention: i64,
    pub alerts_triggered: Vec<Alert>,
}

/// A patient's full log history with its recovery score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientLogs {
    pub logs: Vec<LogEntry>,
    pub recovery_score: f64,
}

/// Summary view for one patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    pub patient: Patient,
    pub total_logs: usize,
    pub recovery_score: f64,
    /// Tier of the latest log, or "Unknown" before the first log
    pub latest_risk: String,
    pub latest_risk_index: u8,
    /// Most recent logs, oldest first
    pub logs: Vec<LogEntry>,
}

/// All auxiliary analyses in one record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullAnalysis {
    pub recovery_prediction: RecoveryDaysResult,
    pub complication_risk: ComplicationResult,
    pub pain_pattern: PainPatternResult,
    pub daily_tip: DailyTipResult,
}

/// Reject reports the engine cannot score
///
/// Out-of-range scores are accepted as-is; only values that would poison the
/// arithmetic are refused.
///
/// # Errors
/// Returns a validation error for a non-finite temperature
pub fn validate_report(report: &DailyReport) -> Result<()> {
    if !report.fever.is_finite() {
        return Err(EngineError::Validation(format!(
            "fever must be a finite number, got {}",
            report.fever
        )));
    }
    Ok(())
}

fn validate_new_patient(patient: &NewPatient) -> Result<()> {
    if patient.name.trim().is_empty() {
        return Err(EngineError::Validation(
            "patient name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Latest tier, pain and mobility, with defaults before the first log
fn latest_signals(logs: &[LogEntry]) -> (RiskLevel, i32, i32) {
    logs.last().map_or(
        (RiskLevel::Low, DEFAULT_PAIN_SCORE, DEFAULT_MOBILITY),
        |l| (l.risk_level, l.report.pain_score, l.report.mobility),
    )
}

/// Front door to the decision engine
pub struct RecoveryService {
    store: JsonStore,
    model: &'static RiskModel,
    clock: Clock,
    /// Serializes read-modify-write cycles on the store
    write_lock: Mutex<()>,
}

impl RecoveryService {
    #[must_use]
    pub fn new(store: JsonStore, model: &'static RiskModel) -> Self {
        Self {
            store,
            model,
            clock: Clock::System,
            write_lock: Mutex::new(()),
        }
    }

    /// Bring the model up and open the store named by `config`
    ///
    /// # Errors
    /// Returns a bootstrap error if the model can neither be loaded nor trained
    pub async fn open(config: &EngineConfig) -> Result<Self> {
        let model = shared_model(&config.model).await?;
        Ok(Self::new(JsonStore::new(&config.store_path), model))
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub const fn model(&self) -> &'static RiskModel {
        self.model
    }

    fn find_patient<'a>(document: &'a StoreDocument, patient_id: &str) -> Result<&'a Patient> {
        document
            .patients
            .get(patient_id)
            .ok_or_else(|| EngineError::PatientNotFound(patient_id.to_string()))
    }

    /// Register a patient and return the stored record
    ///
    /// # Errors
    /// Returns an error if the details are invalid or the store cannot be written
    pub async fn register_patient(&self, details: NewPatient) -> Result<Patient> {
        validate_new_patient(&details)?;
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;

        let id = loop {
            let candidate = format!("{:08x}", rand::rng().random::<u32>());
            if !document.patients.contains_key(&candidate) {
                break candidate;
            }
        };

        let patient = Patient::new(id.clone(), details, self.clock.now());
        document.patients.insert(id.clone(), patient.clone());
        document.logs.insert(id.clone(), Vec::new());
        self.store.save(&document).await?;

        info!(
            "Registered patient {} ({}, {})",
            id,
            patient.name(),
            patient.care_pathway()
        );
        Ok(patient)
    }

    /// # Errors
    /// Returns [`EngineError::PatientNotFound`] for an unknown id
    pub async fn patient(&self, patient_id: &str) -> Result<Patient> {
        let document = self.store.load().await?;
        Self::find_patient(&document, patient_id).cloned()
    }

    /// All patients, oldest registration first
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub async fn list_patients(&self) -> Result<Vec<Patient>> {
        let document = self.store.load().await?;
        let mut patients: Vec<Patient> = document.patients.into_values().collect();
        patients.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(patients)
    }

    /// Score a report, append it to the patient's history and raise alerts
    ///
    /// The report is classified, stored, and only then are the alert rules and the
    /// recovery score evaluated, so both see the new entry.
    ///
    /// # Errors
    /// Returns an error for an unknown patient, an invalid report or a store failure
    pub async fn submit_daily_log(
        &self,
        patient_id: &str,
        report: DailyReport,
    ) -> Result<DailyLogOutcome> {
        validate_report(&report)?;
        let _guard = self.write_lock.lock().await;
        let mut document = self.store.load().await?;
        let patient = Self::find_patient(&document, patient_id)?.clone();

        let now = self.clock.now();
        let days_post = patient.days_post_intervention(now.date_naive());
        let features = encode(&report, patient.care_pathway(), days_post);
        let risk = self.model.predict_risk(&features);
        log_assessment(patient_id, &risk);

        let plan = rehab_plan(patient.care_pathway(), risk.risk_level, days_post);

        let history = document.logs.entry(patient_id.to_string()).or_default();
        history.push(LogEntry {
            report,
            date: now.date_naive(),
            days_post_intervention: days_post,
            risk_level: risk.risk_level,
            risk_index: risk.risk_index,
            timestamp: now,
        });

        let alerts = evaluate_alerts(history.as_slice(), patient.name(), patient_id, &risk, now);
        let score = recovery_score(history.as_slice());
        for alert in &alerts {
            log_alert(alert);
        }
        document.alerts.extend(alerts.iter().cloned());
        self.store.save(&document).await?;

        debug!(
            "Patient {patient_id}: day {days_post}, recovery score {score}, {} alerts",
            alerts.len()
        );

        Ok(DailyLogOutcome {
            risk,
            rehab_plan: plan,
            recovery_score: score,
            days_post_intervention: days_post,
            alerts_triggered: alerts,
        })
    }

    /// # Errors
    /// Returns [`EngineError::PatientNotFound`] for an unknown id
    pub async fn logs(&self, patient_id: &str) -> Result<PatientLogs> {
        let document = self.store.load().await?;
        Self::find_patient(&document, patient_id)?;
        let logs = document.logs_for(patient_id).to_vec();
        Ok(PatientLogs {
            recovery_score: recovery_score(logs.as_slice()),
            logs,
        })
    }

    /// Every alert raised so far, oldest first
    ///
    /// # Errors
    /// Returns an error if the store cannot be read
    pub async fn alerts(&self) -> Result<Vec<Alert>> {
        Ok(self.store.load().await?.alerts)
    }

    /// # Errors
    /// Returns [`EngineError::PatientNotFound`] for an unknown id
    pub async fn dashboard(&self, patient_id: &str) -> Result<Dashboard> {
        let document = self.store.load().await?;
        let patient = Self::find_patient(&document, patient_id)?.clone();
        let logs = document.logs_for(patient_id);

        let (latest_risk, latest_risk_index) = logs.last().map_or_else(
            || ("Unknown".to_string(), 0),
            |l| (l.risk_level.to_string(), l.risk_index),
        );

        Ok(Dashboard {
            patient,
            total_logs: logs.len(),
            recovery_score: recovery_score(logs),
            latest_risk,
            latest_risk_index,
            logs: logs[logs.len().saturating_sub(DASHBOARD_LOGS)..].to_vec(),
        })
    }

    /// # Errors
    /// Returns [`EngineError::PatientNotFound`] for an unknown id
    pub async fn recovery_prediction(&self, patient_id: &str) -> Result<RecoveryDaysResult> {
        let document = self.store.load().await?;
        let patient = Self::find_patient(&document, patient_id)?;
        Ok(self.recovery_days_for(patient, document.logs_for(patient_id)))
    }

    fn recovery_days_for(&self, patient: &Patient, logs: &[LogEntry]) -> RecoveryDaysResult {
        let today = self.clock.today();
        let (risk_level, pain, mobility) = latest_signals(logs);
        predict_recovery_days(
            patient.care_pathway(),
            risk_level,
            patient.days_post_intervention(today),
            pain,
            mobility,
            today,
        )
    }

    /// Complication probability from the latest report
    ///
    /// # Errors
    /// Returns [`EngineError::Prerequisite`] when the patient has no logs yet
    pub async fn complication_risk(&self, patient_id: &str) -> Result<ComplicationResult> {
        let document = self.store.load().await?;
        Self::find_patient(&document, patient_id)?;
        let latest = document.logs_for(patient_id).last().ok_or_else(|| {
            EngineError::Prerequisite(
                "no logs found, submit a daily log first".to_string(),
            )
        })?;
        Ok(complication_probability(&latest.report))
    }

    /// # Errors
    /// Returns [`EngineError::PatientNotFound`] for an unknown id
    pub async fn pain_pattern(&self, patient_id: &str) -> Result<PainPatternResult> {
        let document = self.store.load().await?;
        Self::find_patient(&document, patient_id)?;
        Ok(analyze_pain_pattern(document.logs_for(patient_id)))
    }

    /// # Errors
    /// Returns [`EngineError::PatientNotFound`] for an unknown id
    pub async fn daily_tip(&self, patient_id: &str) -> Result<DailyTipResult> {
        let document = self.store.load().await?;
        let patient = Self::find_patient(&document, patient_id)?;
        Ok(self.daily_tip_for(patient, document.logs_for(patient_id)))
    }

    fn daily_tip_for(&self, patient: &Patient, logs: &[LogEntry]) -> DailyTipResult {
        let (risk_level, ..) = latest_signals(logs);
        daily_tip(
            patient.care_pathway(),
            patient.days_post_intervention(self.clock.today()),
            risk_level,
        )
    }

    /// Recovery prediction, complication risk, pain pattern and tip together
    ///
    /// Unlike [`Self::complication_risk`], a patient without logs gets a neutral
    /// "Unknown" complication result instead of an error.
    ///
    /// # Errors
    /// Returns [`EngineError::PatientNotFound`] for an unknown id
    pub async fn full_analysis(&self, patient_id: &str) -> Result<FullAnalysis> {
        let document = self.store.load().await?;
        let patient = Self::find_patient(&document, patient_id)?;
        let logs = document.logs_for(patient_id);

        Ok(FullAnalysis {
            recovery_prediction: self.recovery_days_for(patient, logs),
            complication_risk: logs.last().map_or_else(ComplicationResult::unavailable, |l| {
                complication_probability(&l.report)
            }),
            pain_pattern: analyze_pain_pattern(logs),
            daily_tip: self.daily_tip_for(patient, logs),
        })
    }
}

/// Every engine output for a report history that is not kept in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryAssessment {
    pub risk: RiskAssessment,
    pub rehab_plan: RehabPlan,
    pub alerts: Vec<Alert>,
    pub recovery_score: f64,
    pub complication_risk: ComplicationResult,
    pub pain_pattern: PainPatternResult,
    pub recovery_prediction: RecoveryDaysResult,
    pub daily_tip: DailyTipResult,
}

/// Run the whole engine over an ad-hoc history whose last report is today's
///
/// # Errors
/// Returns [`EngineError::Prerequisite`] for an empty history and a validation error
/// for a report that cannot be scored
pub fn assess_history(
    model: &RiskModel,
    history: &[DailyReport],
    care_pathway: &str,
    days_post: i64,
    clock: Clock,
) -> Result<HistoryAssessment> {
    let latest = history.last().ok_or_else(|| {
        EngineError::Prerequisite("history must contain at least one report".to_string())
    })?;
    history.iter().try_for_each(validate_report)?;

    let risk = model.predict_risk(&encode(latest, care_pathway, days_post));
    log_assessment("ad-hoc", &risk);

    Ok(HistoryAssessment {
        rehab_plan: rehab_plan(care_pathway, risk.risk_level, days_post),
        alerts: evaluate_alerts(history, "Patient", "", &risk, clock.now()),
        recovery_score: recovery_score(history),
        complication_risk: complication_probability(latest),
        pain_pattern: analyze_pain_pattern(history),
        recovery_prediction: predict_recovery_days(
            care_pathway,
            risk.risk_level,
            days_post,
            latest.pain_score,
            latest.mobility,
            clock.today(),
        ),
        daily_tip: daily_tip(care_pathway, days_post, risk.risk_level),
        risk,
    })
}
