//! Hold-out evaluation of the risk classifier

use serde::{Deserialize, Serialize};
use std::fmt;

use super::dataset::LabeledDataset;
use super::forest::RandomForest;
use super::tree::N_CLASSES;
use crate::models::RiskLevel;

/// Precision, recall and F1 for one risk tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Number of validation samples whose true label is this tier
    pub support: usize,
}

/// Validation results stored next to the trained model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub accuracy: f64,
    pub n_samples: usize,
    /// Indexed by risk tier
    pub per_class: Vec<ClassMetrics>,
    /// `confusion[true][predicted]`
    pub confusion: Vec<Vec<usize>>,
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 { 0.0 } else { num as f64 / den as f64 }
}

/// Score `forest` on a held-out dataset
#[must_use]
pub fn evaluate(forest: &RandomForest, dataset: &LabeledDataset) -> ValidationReport {
    let mut confusion = vec![vec![0usize; N_CLASSES]; N_CLASSES];
    for (row, &label) in dataset.features.iter().zip(dataset.labels.iter()) {
        if label < N_CLASSES {
            confusion[label][forest.predict(row)] += 1;
        }
    }

    let correct: usize = (0..N_CLASSES).map(|c| confusion[c][c]).sum();
    let per_class = (0..N_CLASSES)
        .map(|c| {
            let tp = confusion[c][c];
            let support: usize = confusion[c].iter().sum();
            let predicted: usize = confusion.iter().map(|row| row[c]).sum();
            let precision = ratio(tp, predicted);
            let recall = ratio(tp, support);
            let f1 = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };
            ClassMetrics {
                precision,
                recall,
                f1,
                support,
            }
        })
        .collect();

    ValidationReport {
        accuracy: ratio(correct, dataset.len()),
        n_samples: dataset.len(),
        per_class,
        confusion,
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10} {:>9} {:>9} {:>9} {:>9}", "", "precision", "recall", "f1-score", "support")?;
        for (level, m) in RiskLevel::ALL.iter().zip(self.per_class.iter()) {
            writeln!(
                f,
                "{:>10} {:>9.2} {:>9.2} {:>9.2} {:>9}",
                level.label(),
                m.precision,
                m.recall,
                m.f1,
                m.support
            )?;
        }
        writeln!(f)?;
        writeln!(f, "{:>10} {:>29.2} {:>9}", "accuracy", self.accuracy, self.n_samples)
    }
}
