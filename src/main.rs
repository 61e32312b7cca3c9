use anyhow::{Context, Result};
use chrono::{Days, Utc};
use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

use rehab_engine::service::assess_history;
use rehab_engine::utils::logging::{console, create_spinner, finish_progress_bar};
use rehab_engine::{
    Clock, DailyReport, EngineConfig, NewPatient, PainTrend, RecoveryService, RiskModel,
    Swelling, WoundStatus, shared_model,
};

#[derive(Debug, Parser)]
#[command(name = "rehab-engine", version, about = "Post-discharge recovery decision engine")]
struct Cli {
    /// Serialized risk model (overrides REHAB_MODEL_PATH)
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// JSON document store (overrides REHAB_DB_PATH)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Number of trees when training (overrides REHAB_N_ESTIMATORS)
    #[arg(long, global = true)]
    trees: Option<usize>,

    /// Hide the training progress bar
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Train the risk model from scratch and save it
    Train,
    /// Score a report history read from a JSON file and print every output as JSON
    Assess {
        /// JSON array of daily reports, oldest first
        #[arg(long)]
        history: PathBuf,
        /// Care pathway, e.g. "Orthopedic Surgery"
        #[arg(long, default_value = "General Discharge")]
        pathway: String,
        /// Days since the intervention for the latest report
        #[arg(long)]
        days_post: i64,
    },
    /// Register a demo patient, submit a week of reports and print the analysis
    Demo,
}

impl Cli {
    fn config(&self) -> EngineConfig {
        let mut config = EngineConfig::from_env();
        if let Some(path) = &self.model {
            config.model.path.clone_from(path);
        }
        if let Some(path) = &self.store {
            config.store_path.clone_from(path);
        }
        if let Some(trees) = self.trees.filter(|n| *n > 0) {
            config.model.n_estimators = trees;
        }
        config.model.show_progress = !self.quiet;
        config
    }
}

fn demo_week() -> Vec<DailyReport> {
    let days = [
        (7, Swelling::Moderate, 99.8, 3, WoundStatus::Redness, PainTrend::Stable),
        (6, Swelling::Moderate, 99.4, 4, WoundStatus::Redness, PainTrend::Improving),
        (6, Swelling::Mild, 99.1, 4, WoundStatus::CleanHealing, PainTrend::Stable),
        (5, Swelling::Mild, 98.9, 5, WoundStatus::CleanHealing, PainTrend::Improving),
        (4, Swelling::Mild, 98.6, 6, WoundStatus::CleanHealing, PainTrend::Improving),
        (4, Swelling::None, 98.6, 6, WoundStatus::CleanHealing, PainTrend::Stable),
        (3, Swelling::None, 98.4, 7, WoundStatus::CleanHealing, PainTrend::Improving),
    ];
    days.into_iter()
        .map(|(pain_score, swelling, fever, mobility, wound_status, pain_trend)| DailyReport {
            pain_score,
            swelling,
            fever,
            mobility,
            wound_status,
            medication_adherence: 9,
            pain_trend,
            notes: String::new(),
        })
        .collect()
}

async fn train(config: EngineConfig) -> Result<()> {
    let start = Instant::now();
    let model = RiskModel::train_blocking(config.model.clone())
        .await
        .context("Failed to train risk model")?;
    model
        .save(&config.model.path)
        .await
        .context("Failed to save risk model")?;
    console::print_validation_summary(model.validation(), start.elapsed());
    Ok(())
}

async fn assess(config: EngineConfig, history: PathBuf, pathway: String, days_post: i64) -> Result<()> {
    let bytes = tokio::fs::read(&history)
        .await
        .with_context(|| format!("Failed to read {}", history.display()))?;
    let reports: Vec<DailyReport> =
        serde_json::from_slice(&bytes).context("History must be a JSON array of daily reports")?;

    let model = shared_model(&config.model)
        .await
        .context("Failed to bootstrap risk model")?;
    let assessment = assess_history(model, &reports, &pathway, days_post, Clock::System)?;
    println!("{}", serde_json::to_string_pretty(&assessment)?);
    Ok(())
}

async fn demo(config: EngineConfig) -> Result<()> {
    let spinner = create_spinner(Some("Preparing risk model"));
    let service = RecoveryService::open(&config)
        .await
        .context("Failed to start recovery service")?;
    finish_progress_bar(&spinner, Some("Risk model ready"));

    let week = demo_week();
    let today = Utc::now().date_naive();
    let start_date = today
        .checked_sub_days(Days::new(10))
        .context("Start date out of range")?;

    let patient = service
        .register_patient(NewPatient {
            name: "Demo Patient".to_string(),
            age: 58,
            care_pathway: "Orthopedic Surgery".to_string(),
            start_date,
            doctor_name: "Dr. Rivera".to_string(),
            doctor_email: String::new(),
            weight_kg: 72.0,
            height_cm: 168.0,
        })
        .await?;
    info!("Demo patient id: {}", patient.id);

    for (day, report) in week.into_iter().enumerate() {
        let outcome = service.submit_daily_log(&patient.id, report).await?;
        console::print_log_outcome(day + 1, &outcome);
    }

    let analysis = service.full_analysis(&patient.id).await?;
    console::print_analysis_summary(&analysis);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = cli.config();
    info!("Configuration:\n{config}");

    match cli.command {
        Command::Train => train(config).await,
        Command::Assess {
            history,
            pathway,
            days_post,
        } => assess(config, history, pathway, days_post).await,
        Command::Demo => demo(config).await,
    }
}
