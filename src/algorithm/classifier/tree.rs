//! CART decision tree with weighted Gini impurity
//!
//! Nodes live in a flat arena so a grown tree serializes as a plain list. Leaves
//! keep the weighted class distribution of the training samples that reached them.

use rand::prelude::*;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::algorithm::features::N_FEATURES;
use crate::models::N_RISK_LEVELS;

/// Number of output classes
pub const N_CLASSES: usize = N_RISK_LEVELS;

/// Class probabilities (or weighted counts) indexed by class
pub type Distribution = [f64; N_CLASSES];

/// Growth limits for a single tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeParams {
    /// Maximum depth; unbounded when `None`
    pub max_depth: Option<usize>,
    /// Nodes with fewer distinct samples than this become leaves
    pub min_samples_split: usize,
    /// Number of non-constant features to evaluate per split
    pub max_features: usize,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: 2,
            max_features: N_FEATURES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Node {
    Leaf {
        distribution: Distribution,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

/// A fitted classification tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

#[derive(Debug, Clone, Copy)]
struct SplitCandidate {
    feature: usize,
    threshold: f64,
    /// Weighted impurity of the children; lower is better
    score: f64,
}

/// Gini impurity of a weighted class histogram
fn gini(counts: &Distribution, total: f64) -> f64 {
    if total <= 0.0 {
        return 0.0;
    }
    1.0 - counts.iter().map(|c| (c / total).powi(2)).sum::<f64>()
}

/// Scale a histogram so it sums to one; uniform when empty
fn normalise(counts: &Distribution) -> Distribution {
    let total: f64 = counts.iter().sum();
    if total <= 0.0 {
        return [1.0 / N_CLASSES as f64; N_CLASSES];
    }
    counts.map(|c| c / total)
}

struct TreeBuilder<'a> {
    features: &'a [[f64; N_FEATURES]],
    labels: &'a [usize],
    weights: &'a [f64],
    params: &'a TreeParams,
    rng: &'a mut StdRng,
    nodes: Vec<Node>,
}

impl TreeBuilder<'_> {
    fn class_totals(&self, indices: &[usize]) -> Distribution {
        let mut totals = [0.0; N_CLASSES];
        for &i in indices {
            totals[self.labels[i]] += self.weights[i];
        }
        totals
    }

    /// Grow the subtree for `indices` and return its root node id
    fn grow(&mut self, indices: Vec<usize>, depth: usize) -> usize {
        let totals = self.class_totals(&indices);
        let node_id = self.nodes.len();
        self.nodes.push(Node::Leaf {
            distribution: normalise(&totals),
        });

        let is_pure = totals.iter().filter(|&&w| w > 0.0).count() <= 1;
        let depth_reached = self.params.max_depth.is_some_and(|max| depth >= max);
        if is_pure || depth_reached || indices.len() < self.params.min_samples_split {
            return node_id;
        }

        let Some(split) = self.best_split(&indices, &totals) else {
            return node_id;
        };

        let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| self.features[i][split.feature] <= split.threshold);

        let left = self.grow(left_idx, depth + 1);
        let right = self.grow(right_idx, depth + 1);
        self.nodes[node_id] = Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left,
            right,
        };
        node_id
    }

    /// Search a random subset of features for the lowest-impurity split
    ///
    /// Constant features do not count towards `max_features`, so the search keeps
    /// drawing features until enough splittable ones have been seen.
    fn best_split(&mut self, indices: &[usize], totals: &Distribution) -> Option<SplitCandidate> {
        let mut order: SmallVec<[usize; N_FEATURES]> = (0..N_FEATURES).collect();
        order.shuffle(&mut *self.rng);

        let total_weight: f64 = totals.iter().sum();
        let mut best: Option<SplitCandidate> = None;
        let mut evaluated = 0;

        for &feature in &order {
            if evaluated >= self.params.max_features {
                break;
            }
            let Some(candidate) = self.best_split_on(feature, indices, totals, total_weight) else {
                continue;
            };
            evaluated += 1;
            if best.is_none_or(|b| candidate.score < b.score) {
                best = Some(candidate);
            }
        }

        best
    }

    fn best_split_on(
        &self,
        feature: usize,
        indices: &[usize],
        totals: &Distribution,
        total_weight: f64,
    ) -> Option<SplitCandidate> {
        let mut sorted: Vec<(f64, usize, f64)> = indices
            .iter()
            .map(|&i| (self.features[i][feature], self.labels[i], self.weights[i]))
            .collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let (first, last) = (sorted.first()?.0, sorted.last()?.0);
        if first >= last {
            return None;
        }

        let mut left = [0.0; N_CLASSES];
        let mut left_weight = 0.0;
        let mut best: Option<SplitCandidate> = None;

        for pair in sorted.windows(2) {
            let (value, label, weight) = pair[0];
            let next = pair[1].0;
            left[label] += weight;
            left_weight += weight;

            if next <= value {
                continue;
            }

            let right_weight = total_weight - left_weight;
            let mut right = *totals;
            for (r, l) in right.iter_mut().zip(left.iter()) {
                *r -= l;
            }

            let score =
                left_weight * gini(&left, left_weight) + right_weight * gini(&right, right_weight);

            if best.is_none_or(|b| score < b.score) {
                let mut threshold = value + (next - value) / 2.0;
                if threshold >= next {
                    threshold = value;
                }
                best = Some(SplitCandidate {
                    feature,
                    threshold,
                    score,
                });
            }
        }

        best
    }
}

impl DecisionTree {
    /// Fit a tree on the samples with positive weight
    ///
    /// `weights` combine bootstrap multiplicity with class weights; samples with
    /// zero weight are left out entirely.
    #[must_use]
    pub fn fit(
        features: &[[f64; N_FEATURES]],
        labels: &[usize],
        weights: &[f64],
        params: &TreeParams,
        rng: &mut StdRng,
    ) -> Self {
        let indices: Vec<usize> = (0..labels.len())
            .filter(|&i| weights[i] > 0.0 && labels[i] < N_CLASSES)
            .collect();

        let mut builder = TreeBuilder {
            features,
            labels,
            weights,
            params,
            rng,
            nodes: Vec::new(),
        };
        builder.grow(indices, 0);

        Self {
            nodes: builder.nodes,
        }
    }

    /// Class distribution of the leaf `row` falls into
    #[must_use]
    pub fn predict_proba(&self, row: &[f64; N_FEATURES]) -> Distribution {
        let mut idx = 0;
        while let Some(node) = self.nodes.get(idx) {
            match node {
                Node::Leaf { distribution } => return *distribution,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    idx = if row[*feature] <= *threshold { *left } else { *right };
                }
            }
        }
        [1.0 / N_CLASSES as f64; N_CLASSES]
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Maximum root-to-leaf depth
    #[must_use]
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], idx: usize) -> usize {
            match nodes.get(idx) {
                Some(Node::Split { left, right, .. }) => {
                    1 + walk(nodes, *left).max(walk(nodes, *right))
                }
                _ => 0,
            }
        }
        walk(&self.nodes, 0)
    }

    /// Structural check for trees read back from disk
    ///
    /// Children must point forward in the arena, which also rules out cycles.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.nodes.is_empty()
            && self.nodes.iter().enumerate().all(|(idx, node)| match node {
                Node::Leaf { distribution } => distribution.iter().all(|p| p.is_finite()),
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    *feature < N_FEATURES
                        && threshold.is_finite()
                        && *left > idx
                        && *right > idx
                        && *left < self.nodes.len()
                        && *right < self.nodes.len()
                }
            })
    }
}
