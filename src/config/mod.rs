//! Configuration for the decision engine.

use std::fmt;
use std::path::PathBuf;

/// Default location of the serialized classifier
pub const DEFAULT_MODEL_PATH: &str = "data/risk_model.json";

/// Default location of the JSON document store
pub const DEFAULT_STORE_PATH: &str = "data/db.json";

/// Configuration for training and persisting the risk classifier
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Where the trained forest is saved and reloaded from
    pub path: PathBuf,
    /// Number of synthetic samples to generate for training
    pub n_samples: usize,
    /// Number of trees in the forest
    pub n_estimators: usize,
    /// Maximum tree depth (unbounded when `None`)
    pub max_depth: Option<usize>,
    /// Minimum number of samples required to split a node
    pub min_samples_split: usize,
    /// Share of the synthetic dataset held out for validation
    pub validation_fraction: f64,
    /// Seed for dataset generation, the split and every tree
    pub seed: u64,
    /// Worker threads used to grow trees
    pub n_threads: usize,
    /// Display a progress bar while training
    pub show_progress: bool,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_MODEL_PATH),
            n_samples: 2000,
            n_estimators: 100,
            max_depth: None,
            min_samples_split: 2,
            validation_fraction: 0.2,
            seed: 42,
            n_threads: num_cpus::get(),
            show_progress: true,
        }
    }
}

/// Top-level engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Classifier settings
    pub model: ModelConfig,
    /// Path of the JSON document store
    pub store_path: PathBuf,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model: ModelConfig::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl EngineConfig {
    /// Build a configuration from defaults overridden by environment variables
    ///
    /// Recognised variables: `REHAB_MODEL_PATH`, `REHAB_DB_PATH`, `REHAB_N_ESTIMATORS`.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var("REHAB_MODEL_PATH") {
            config.model.path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var("REHAB_DB_PATH") {
            config.store_path = PathBuf::from(path);
        }
        if let Some(n) = std::env::var("REHAB_N_ESTIMATORS")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|n| *n > 0)
        {
            config.model.n_estimators = n;
        }
        config
    }
}

impl fmt::Display for EngineConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Engine Configuration:")?;
        writeln!(f, "  Model Path: {}", self.model.path.display())?;
        writeln!(f, "  Store Path: {}", self.store_path.display())?;
        writeln!(f, "  Training Samples: {}", self.model.n_samples)?;
        writeln!(f, "  Trees: {}", self.model.n_estimators)?;
        if let Some(depth) = self.model.max_depth {
            writeln!(f, "  Max Depth: {depth}")?;
        }
        writeln!(
            f,
            "  Validation Fraction: {:.0}%",
            self.model.validation_fraction * 100.0
        )?;
        writeln!(f, "  Seed: {}", self.model.seed)?;
        writeln!(f, "  Threads: {}", self.model.n_threads)?;
        Ok(())
    }
}
