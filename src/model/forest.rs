//! Random forest regressor: bootstrap-sampled trees, averaged
//!
//! Seeded per tree so a fit is reproducible for a fixed dataset.

use super::tree::{self, TreeNode, TreeParams};
use super::Regressor;
use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RandomForest {
    n_trees: usize,
    max_depth: usize,
    min_samples_split: usize,
    min_samples_leaf: usize,
    seed: u64,
    #[serde(default)]
    trees: Vec<TreeNode>,
}

impl Default for RandomForest {
    fn default() -> Self {
        Self {
            n_trees: 60,
            max_depth: 10,
            min_samples_split: 4,
            min_samples_leaf: 2,
            seed: 42,
            trees: Vec::new(),
        }
    }
}

impl RandomForest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(n_trees: usize, max_depth: usize, seed: u64) -> Self {
        Self {
            n_trees,
            max_depth,
            seed,
            ..Self::default()
        }
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}

impl Regressor for RandomForest {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) {
        let n = x.nrows();
        let p = x.ncols();
        // Regression convention: p/3 features per split, at least one
        let params = TreeParams {
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            min_samples_leaf: self.min_samples_leaf.max(1),
            max_features: Some((p / 3).max(1)),
        };

        self.trees = (0..self.n_trees)
            .map(|t| {
                let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(t as u64));
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.random_range(0..n)).collect();
                tree::grow(x, y, &bootstrap, &params, &mut rng)
            })
            .collect();
    }

    fn predict(&self, x: ArrayView2<f64>) -> Array1<f64> {
        if self.trees.is_empty() {
            return Array1::zeros(x.nrows());
        }
        let mut out = Array1::<f64>::zeros(x.nrows());
        for (i, row) in x.outer_iter().enumerate() {
            let sum: f64 = self.trees.iter().map(|t| t.predict_row(row)).sum();
            out[i] = sum / self.trees.len() as f64;
        }
        out
    }

    fn name(&self) -> &'static str {
        "RandomForest"
    }
}
