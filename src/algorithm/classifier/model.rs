//! Trained risk model: training, persistence and inference
//!
//! The forest is trained once on the synthetic dataset, written to disk as a versioned
//! JSON artifact and reloaded on later starts. Any failure on that path is a bootstrap
//! error: the engine never falls back to an untrained model.

use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tokio::sync::OnceCell;

use super::dataset::{generate_dataset, train_validation_split};
use super::forest::{ForestParams, RandomForest, argmax};
use super::metrics::{ValidationReport, evaluate};
use crate::algorithm::features::{FEATURE_NAMES, FeatureVector, N_FEATURES};
use crate::config::ModelConfig;
use crate::error::{EngineError, Result};
use crate::error::util::{IoResultExt, bootstrap_error};
use crate::models::{ClassProbabilities, RiskAssessment, RiskLevel};
use crate::utils::logging::{log_operation_complete, log_operation_start, log_warning};
use crate::utils::{round1, write_atomic};

/// Bumped whenever the artifact layout changes
pub const ARTIFACT_FORMAT_VERSION: u32 = 1;

/// On-disk form of a trained model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub format_version: u32,
    pub trained_at: DateTime<Utc>,
    pub n_training_samples: usize,
    pub feature_names: Vec<String>,
    pub forest: RandomForest,
    pub validation: ValidationReport,
}

/// The risk classifier used for inference
#[derive(Debug, Clone, PartialEq)]
pub struct RiskModel {
    artifact: ModelArtifact,
}

impl RiskModel {
    /// Generate the synthetic dataset and fit a forest on it
    ///
    /// CPU bound; call from a blocking context.
    ///
    /// # Errors
    /// Returns a bootstrap error if the forest cannot be fitted
    pub fn train(config: &ModelConfig) -> Result<Self> {
        let start = Instant::now();
        let dataset = generate_dataset(config.n_samples, config.seed);
        let (train, validation) =
            train_validation_split(&dataset, config.validation_fraction, config.seed);

        let params = ForestParams {
            n_estimators: config.n_estimators,
            max_depth: config.max_depth,
            min_samples_split: config.min_samples_split,
            max_features: None,
            seed: config.seed,
            n_threads: config.n_threads,
            show_progress: config.show_progress,
        };
        let forest =
            RandomForest::fit(&train, &params).map_err(|e| bootstrap_error("training", e))?;
        let report = evaluate(&forest, &validation);

        info!(
            "Trained {} trees on {} samples in {:?}; validation accuracy {:.3} on {} samples",
            forest.n_trees(),
            train.len(),
            start.elapsed(),
            report.accuracy,
            report.n_samples
        );
        log::debug!("Validation report:\n{report}");

        Ok(Self {
            artifact: ModelArtifact {
                format_version: ARTIFACT_FORMAT_VERSION,
                trained_at: Utc::now(),
                n_training_samples: train.len(),
                feature_names: FEATURE_NAMES.iter().map(ToString::to_string).collect(),
                forest,
                validation: report,
            },
        })
    }

    /// Check a deserialized artifact before trusting it
    fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        if artifact.format_version != ARTIFACT_FORMAT_VERSION {
            return Err(bootstrap_error(
                "loading",
                format!(
                    "unsupported artifact version {} (expected {})",
                    artifact.format_version, ARTIFACT_FORMAT_VERSION
                ),
            ));
        }
        if artifact.feature_names.len() != N_FEATURES
            || artifact
                .feature_names
                .iter()
                .zip(FEATURE_NAMES.iter())
                .any(|(a, b)| a != b)
        {
            return Err(bootstrap_error("loading", "feature layout does not match"));
        }
        if !artifact.forest.is_well_formed() {
            return Err(bootstrap_error("loading", "forest is malformed"));
        }
        Ok(Self { artifact })
    }

    /// Write the model to `path` atomically
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails
    pub async fn save(&self, path: &Path) -> Result<()> {
        log_operation_start("Saving risk model to", path);
        let json = serde_json::to_vec(&self.artifact)?;
        write_atomic(path, &json).await?;
        log_operation_complete("saved", path, self.artifact.forest.n_trees(), None);
        Ok(())
    }

    /// Read a previously saved model
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be read and a bootstrap error if it is
    /// corrupt or from an incompatible version
    pub async fn load(path: &Path) -> Result<Self> {
        log_operation_start("Loading risk model from", path);
        let start = Instant::now();
        let bytes = tokio::fs::read(path).await.at_path(path)?;
        let artifact: ModelArtifact =
            serde_json::from_slice(&bytes).map_err(|e| bootstrap_error("loading", e))?;
        let model = Self::from_artifact(artifact)?;
        log_operation_complete(
            "loaded",
            path,
            model.artifact.forest.n_trees(),
            Some(start.elapsed()),
        );
        Ok(model)
    }

    /// Load the model at `config.path`, training and saving it when absent
    ///
    /// # Errors
    /// Every failure is reported as a bootstrap error
    pub async fn load_or_train(config: &ModelConfig) -> Result<Self> {
        let exists = tokio::fs::try_exists(&config.path)
            .await
            .map_err(|e| bootstrap_error("checking artifact", e))?;
        if exists {
            return Self::load(&config.path)
                .await
                .map_err(|e| if e.is_fatal() { e } else { bootstrap_error("loading", e) });
        }

        info!(
            "No risk model at {}, training a new one",
            config.path.display()
        );
        let model = Self::train_blocking(config.clone()).await?;
        model
            .save(&config.path)
            .await
            .map_err(|e| bootstrap_error("saving", e))?;
        Ok(model)
    }

    /// Train on the blocking pool so the async runtime stays responsive
    ///
    /// # Errors
    /// Returns a bootstrap error if training fails or the task panics
    pub async fn train_blocking(config: ModelConfig) -> Result<Self> {
        tokio::task::spawn_blocking(move || Self::train(&config))
            .await
            .map_err(|e| bootstrap_error("training task", e))?
    }

    /// Score one feature vector
    ///
    /// Returns the argmax tier, its probability as confidence and the full
    /// distribution, all in percent with one decimal.
    #[must_use]
    pub fn predict_risk(&self, features: &FeatureVector) -> RiskAssessment {
        let proba = self.artifact.forest.predict_proba(&features.to_array());
        let total: f64 = proba.iter().sum();
        let normalised = if total > 0.0 {
            proba.map(|p| p / total)
        } else {
            [0.25; 4]
        };

        let index = argmax(&normalised);
        let level = RiskLevel::from_index(index).unwrap_or_default();
        let percent = normalised.map(|p| round1(p * 100.0));

        RiskAssessment::new(
            level,
            percent[index],
            ClassProbabilities::from_array(percent),
        )
    }

    #[must_use]
    pub const fn validation(&self) -> &ValidationReport {
        &self.artifact.validation
    }

    #[must_use]
    pub const fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }
}

/// The shared model together with the artifact path it was initialised from
static SHARED_MODEL: OnceCell<(PathBuf, RiskModel)> = OnceCell::const_new();

/// Process-wide model, loaded or trained on first use
///
/// Concurrent first callers wait on the same initialization; a failed attempt leaves
/// the cell empty so a later call can retry after the cause is fixed. Only the first
/// successful `config` is honoured: later calls get that model back whatever they
/// pass, with a warning when their artifact path differs.
///
/// # Errors
/// Returns a bootstrap error if the model can neither be loaded nor trained
pub async fn shared_model(config: &ModelConfig) -> Result<&'static RiskModel> {
    let (path, model) = SHARED_MODEL
        .get_or_try_init(|| async {
            let model = RiskModel::load_or_train(config).await?;
            Ok::<_, EngineError>((config.path.clone(), model))
        })
        .await?;
    if *path != config.path {
        log_warning(
            &format!(
                "Shared risk model already initialised from {}, ignoring requested path",
                path.display()
            ),
            Some(&config.path),
        );
    }
    Ok(model)
}
