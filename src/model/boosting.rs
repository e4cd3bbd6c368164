//! Gradient-boosted regression trees
//!
//! Shallow trees fitted sequentially to the residuals of the running
//! prediction, shrunk by a learning rate. Squared-error objective, so the
//! negative gradient is the plain residual.

use super::tree::{self, TreeNode, TreeParams};
use super::Regressor;
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradientBoosting {
    n_rounds: usize,
    max_depth: usize,
    min_samples_leaf: usize,
    learning_rate: f64,
    seed: u64,
    #[serde(default)]
    base_prediction: f64,
    #[serde(default)]
    trees: Vec<TreeNode>,
}

impl Default for GradientBoosting {
    fn default() -> Self {
        Self {
            n_rounds: 80,
            max_depth: 3,
            min_samples_leaf: 2,
            learning_rate: 0.1,
            seed: 42,
            base_prediction: 0.0,
            trees: Vec::new(),
        }
    }
}

impl GradientBoosting {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(n_rounds: usize, max_depth: usize, learning_rate: f64) -> Self {
        Self {
            n_rounds,
            max_depth,
            learning_rate,
            ..Self::default()
        }
    }

    pub fn n_rounds_fitted(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for GradientBoosting {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) {
        let n = x.nrows();
        let params = TreeParams {
            max_depth: self.max_depth,
            min_samples_split: 2 * self.min_samples_leaf.max(1),
            min_samples_leaf: self.min_samples_leaf.max(1),
            max_features: None,
        };
        let indices: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(self.seed);

        self.base_prediction = y.mean().unwrap_or(0.0);
        self.trees = Vec::with_capacity(self.n_rounds);

        let mut current = Array1::<f64>::from_elem(n, self.base_prediction);
        for _ in 0..self.n_rounds {
            let residuals = &y.to_owned() - &current;
            let tree = tree::grow(x, residuals.view(), &indices, &params, &mut rng);
            for (i, row) in x.outer_iter().enumerate() {
                current[i] += self.learning_rate * tree.predict_row(row);
            }
            self.trees.push(tree);
        }
    }

    fn predict(&self, x: ArrayView2<f64>) -> Array1<f64> {
        let mut out = Array1::<f64>::from_elem(x.nrows(), self.base_prediction);
        for tree in &self.trees {
            for (i, row) in x.outer_iter().enumerate() {
                out[i] += self.learning_rate * tree.predict_row(row);
            }
        }
        out
    }

    fn name(&self) -> &'static str {
        "GradientBoosting"
    }
}
