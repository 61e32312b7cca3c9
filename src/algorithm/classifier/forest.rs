//! Bagged random forest over [`DecisionTree`]s
//!
//! Each tree is grown on a bootstrap resample of the training set with balanced
//! class weights and a random subset of features per split. Trees are grown in
//! parallel on a dedicated rayon pool; tree `t` draws from its own RNG seeded with
//! `seed + t`, so the fitted forest does not depend on the thread count.

use log::info;
use rand::prelude::*;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::dataset::LabeledDataset;
use super::tree::{DecisionTree, Distribution, N_CLASSES, TreeParams};
use crate::algorithm::features::N_FEATURES;
use crate::error::{EngineError, Result};
use crate::utils::logging::progress;

/// Hyperparameters for fitting a forest
#[derive(Debug, Clone)]
pub struct ForestParams {
    pub n_estimators: usize,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    /// Features tried per split; `None` means floor(sqrt(n_features))
    pub max_features: Option<usize>,
    pub seed: u64,
    pub n_threads: usize,
    pub show_progress: bool,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            max_depth: None,
            min_samples_split: 2,
            max_features: None,
            seed: 42,
            n_threads: num_cpus::get(),
            show_progress: false,
        }
    }
}

impl ForestParams {
    fn tree_params(&self) -> TreeParams {
        let default_features = ((N_FEATURES as f64).sqrt().floor() as usize).max(1);
        TreeParams {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split.max(2),
            max_features: self.max_features.unwrap_or(default_features).clamp(1, N_FEATURES),
        }
    }
}

/// Weight per class inversely proportional to its frequency
///
/// `n_samples / (n_classes * count_c)`; classes absent from the data get weight 0.
#[must_use]
pub fn balanced_class_weights(dataset: &LabeledDataset) -> Distribution {
    let counts = dataset.class_counts(N_CLASSES);
    let present = counts.iter().filter(|&&c| c > 0).count().max(1);
    let n = dataset.len() as f64;

    let mut weights = [0.0; N_CLASSES];
    for (w, &count) in weights.iter_mut().zip(counts.iter()) {
        if count > 0 {
            *w = n / (present as f64 * count as f64);
        }
    }
    weights
}

/// A fitted random forest classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
    class_weights: Distribution,
}

impl RandomForest {
    /// Fit a forest on `dataset`
    ///
    /// # Errors
    /// Returns an error if the dataset is empty or the thread pool cannot be built
    pub fn fit(dataset: &LabeledDataset, params: &ForestParams) -> Result<Self> {
        if dataset.is_empty() {
            return Err(EngineError::Validation(
                "cannot fit a forest on an empty dataset".to_string(),
            ));
        }
        if params.n_estimators == 0 {
            return Err(EngineError::Validation(
                "n_estimators must be at least 1".to_string(),
            ));
        }

        let class_weights = balanced_class_weights(dataset);
        let tree_params = params.tree_params();
        let n = dataset.len();

        info!(
            "Fitting {} trees on {} samples ({} features per split, {} threads)",
            params.n_estimators,
            n,
            tree_params.max_features,
            params.n_threads.max(1)
        );

        let pb = params.show_progress.then(|| {
            progress::create_main_progress_bar(params.n_estimators as u64, Some("Growing trees"))
        });

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.n_threads.max(1))
            .build()?;

        let trees: Vec<DecisionTree> = pool.install(|| {
            (0..params.n_estimators)
                .into_par_iter()
                .map(|t| {
                    let mut rng = StdRng::seed_from_u64(params.seed.wrapping_add(t as u64));

                    // Bootstrap multiplicity times class weight
                    let mut weights = vec![0.0; n];
                    for _ in 0..n {
                        weights[rng.random_range(0..n)] += 1.0;
                    }
                    for (w, &label) in weights.iter_mut().zip(dataset.labels.iter()) {
                        *w *= class_weights[label];
                    }

                    let tree = DecisionTree::fit(
                        &dataset.features,
                        &dataset.labels,
                        &weights,
                        &tree_params,
                        &mut rng,
                    );
                    if let Some(pb) = &pb {
                        pb.inc(1);
                    }
                    tree
                })
                .collect()
        });

        if let Some(pb) = &pb {
            progress::finish_progress_bar(pb, Some("Forest trained"));
        }

        Ok(Self {
            trees,
            class_weights,
        })
    }

    /// Mean of the per-tree leaf distributions
    #[must_use]
    pub fn predict_proba(&self, row: &[f64; N_FEATURES]) -> Distribution {
        let mut sum = [0.0; N_CLASSES];
        for tree in &self.trees {
            for (s, p) in sum.iter_mut().zip(tree.predict_proba(row)) {
                *s += p;
            }
        }
        let n = self.trees.len().max(1) as f64;
        sum.map(|s| s / n)
    }

    /// Most probable class; ties resolve to the lowest index
    #[must_use]
    pub fn predict(&self, row: &[f64; N_FEATURES]) -> usize {
        argmax(&self.predict_proba(row))
    }

    #[must_use]
    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }

    #[must_use]
    pub const fn class_weights(&self) -> &Distribution {
        &self.class_weights
    }

    /// Every tree is structurally valid and the forest is not empty
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.trees.is_empty()
            && self.class_weights.iter().all(|w| w.is_finite())
            && self.trees.iter().all(DecisionTree::is_well_formed)
    }
}

/// Index of the largest value; the first wins on ties
#[must_use]
pub fn argmax(values: &Distribution) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}
