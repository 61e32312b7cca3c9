//! Synthetic training data for the risk classifier
//!
//! Samples are drawn from fixed distributions and labelled by a deterministic,
//! priority-ordered rule cascade. The cascade is the ground truth the forest
//! approximates; it is not clinical ground truth.

use rand::prelude::*;
use rand::seq::SliceRandom;

use crate::algorithm::features::{FeatureVector, N_FEATURES};
use crate::algorithm::thresholds::{
    FEVER_CRITICAL_F, FEVER_ELEVATED_F, LATE_IMMOBILITY_DAYS, MOBILITY_LIMITED, PAIN_HIGH,
    PAIN_MODERATE, PAIN_WORSENING_MODERATE,
};
use crate::models::{PainTrend, RiskLevel, Swelling, WoundStatus};
use crate::utils::round1;

/// Pain trend codes drawn uniformly; "worsening" appears twice so it is over-represented
const TREND_DRAWS: [i32; 4] = [-1, 0, 1, 1];

/// Feature rows with their class labels
#[derive(Debug, Clone, Default)]
pub struct LabeledDataset {
    pub features: Vec<[f64; N_FEATURES]>,
    pub labels: Vec<usize>,
}

impl LabeledDataset {
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Number of samples per class
    #[must_use]
    pub fn class_counts(&self, n_classes: usize) -> Vec<usize> {
        let mut counts = vec![0; n_classes];
        for &label in &self.labels {
            if label < n_classes {
                counts[label] += 1;
            }
        }
        counts
    }

    fn subset(&self, indices: &[usize]) -> Self {
        Self {
            features: indices.iter().map(|&i| self.features[i]).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }
}

/// Assign a risk tier with the training rule cascade; first match wins
#[must_use]
pub fn label_risk(features: &FeatureVector) -> RiskLevel {
    let swelling = Swelling::from_code(features.swelling_code);
    let wound = WoundStatus::from_code(features.wound_code);
    let trend = PainTrend::from_code(features.pain_trend_code);

    if features.fever >= FEVER_CRITICAL_F || wound == WoundStatus::DischargeOpen {
        RiskLevel::Critical
    } else if features.pain_score >= PAIN_HIGH || swelling == Swelling::Severe {
        RiskLevel::High
    } else if features.pain_score >= PAIN_MODERATE
        || swelling == Swelling::Moderate
        || features.fever >= FEVER_ELEVATED_F
    {
        RiskLevel::Moderate
    } else if trend == PainTrend::Worsening && features.pain_score >= PAIN_WORSENING_MODERATE {
        RiskLevel::Moderate
    } else if features.mobility <= MOBILITY_LIMITED
        && features.days_post_intervention > LATE_IMMOBILITY_DAYS
    {
        RiskLevel::High
    } else {
        RiskLevel::Low
    }
}

/// Draw one random feature vector
fn sample_features(rng: &mut StdRng) -> FeatureVector {
    FeatureVector {
        pain_score: rng.random_range(0..=10),
        swelling_code: rng.random_range(0..4),
        fever: round1(rng.random_range(97.0..104.5)),
        mobility: rng.random_range(0..=10),
        wound_code: rng.random_range(0..3),
        medication_adherence: rng.random_range(0..=10),
        days_post_intervention: rng.random_range(1..60),
        care_pathway_code: rng.random_range(0..5),
        pain_trend_code: TREND_DRAWS[rng.random_range(0..TREND_DRAWS.len())],
    }
}

/// Generate `n` labelled samples from a fixed seed
#[must_use]
pub fn generate_dataset(n: usize, seed: u64) -> LabeledDataset {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut dataset = LabeledDataset {
        features: Vec::with_capacity(n),
        labels: Vec::with_capacity(n),
    };

    for _ in 0..n {
        let sample = sample_features(&mut rng);
        dataset.labels.push(label_risk(&sample).index());
        dataset.features.push(sample.to_array());
    }

    dataset
}

/// Shuffle and split into (train, validation)
#[must_use]
pub fn train_validation_split(
    dataset: &LabeledDataset,
    validation_fraction: f64,
    seed: u64,
) -> (LabeledDataset, LabeledDataset) {
    let mut indices: Vec<usize> = (0..dataset.len()).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let fraction = validation_fraction.clamp(0.0, 1.0);
    let n_validation = (dataset.len() as f64 * fraction).round() as usize;
    let (validation_idx, train_idx) = indices.split_at(n_validation.min(dataset.len()));

    (dataset.subset(train_idx), dataset.subset(validation_idx))
}
