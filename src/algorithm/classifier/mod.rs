//! Risk classifier
//!
//! A random forest trained on synthetically labelled reports. See [`model`] for the
//! training and persistence entry points.

pub mod dataset;
pub mod forest;
pub mod metrics;
pub mod model;
pub mod tree;

pub use dataset::{LabeledDataset, generate_dataset, label_risk, train_validation_split};
pub use forest::{ForestParams, RandomForest};
pub use metrics::{ClassMetrics, ValidationReport};
pub use model::{ModelArtifact, RiskModel, shared_model};
