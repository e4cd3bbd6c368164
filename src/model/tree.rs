//! CART-style regression tree, shared by the forest and boosting models
//!
//! Splits greedily on the largest sum-of-squared-error reduction, scanning
//! each candidate feature in sorted order with running sums.

use ndarray::{ArrayView1, ArrayView2};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TreeNode {
    Leaf {
        value: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
}

#[derive(Debug, Clone, Copy)]
pub struct TreeParams {
    pub max_depth: usize,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    /// Number of features considered per split; `None` means all
    pub max_features: Option<usize>,
}

impl TreeNode {
    pub fn predict_row(&self, row: ArrayView1<f64>) -> f64 {
        match self {
            TreeNode::Leaf { value } => *value,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if row[*feature] <= *threshold {
                    left.predict_row(row)
                } else {
                    right.predict_row(row)
                }
            }
        }
    }
}

/// Grow a tree over the sample rows given by `indices`.
pub fn grow(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    indices: &[usize],
    params: &TreeParams,
    rng: &mut StdRng,
) -> TreeNode {
    grow_node(x, y, indices, params, rng, 0)
}

fn grow_node(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    indices: &[usize],
    params: &TreeParams,
    rng: &mut StdRng,
    depth: usize,
) -> TreeNode {
    let mean = mean_of(y, indices);
    if depth >= params.max_depth || indices.len() < params.min_samples_split {
        return TreeNode::Leaf { value: mean };
    }

    let Some(split) = best_split(x, y, indices, params, rng) else {
        return TreeNode::Leaf { value: mean };
    };

    let (left_idx, right_idx): (Vec<usize>, Vec<usize>) = indices
        .iter()
        .copied()
        .partition(|&i| x[[i, split.feature]] <= split.threshold);

    TreeNode::Split {
        feature: split.feature,
        threshold: split.threshold,
        left: Box::new(grow_node(x, y, &left_idx, params, rng, depth + 1)),
        right: Box::new(grow_node(x, y, &right_idx, params, rng, depth + 1)),
    }
}

struct BestSplit {
    feature: usize,
    threshold: f64,
}

fn best_split(
    x: ArrayView2<f64>,
    y: ArrayView1<f64>,
    indices: &[usize],
    params: &TreeParams,
    rng: &mut StdRng,
) -> Option<BestSplit> {
    let n = indices.len();
    let p = x.ncols();

    let features: Vec<usize> = match params.max_features {
        Some(k) if k < p => rand::seq::index::sample(rng, p, k).into_vec(),
        _ => (0..p).collect(),
    };

    let total_sum: f64 = indices.iter().map(|&i| y[i]).sum();
    let total_sq: f64 = indices.iter().map(|&i| y[i] * y[i]).sum();
    let parent_sse = total_sq - total_sum * total_sum / n as f64;

    let mut best: Option<(f64, BestSplit)> = None;

    for &f in &features {
        let mut ordered: Vec<(f64, f64)> = indices.iter().map(|&i| (x[[i, f]], y[i])).collect();
        ordered.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        let mut left_sum = 0.0;
        let mut left_sq = 0.0;
        for (pos, &(value, target)) in ordered.iter().enumerate() {
            left_sum += target;
            left_sq += target * target;
            let n_left = pos + 1;
            let n_right = n - n_left;
            if n_left < params.min_samples_leaf || n_right < params.min_samples_leaf {
                continue;
            }
            // No split between equal feature values
            if value == ordered[pos + 1].0 {
                continue;
            }

            let right_sum = total_sum - left_sum;
            let right_sq = total_sq - left_sq;
            let sse = (left_sq - left_sum * left_sum / n_left as f64)
                + (right_sq - right_sum * right_sum / n_right as f64);
            let gain = parent_sse - sse;

            if gain > 1e-12 && best.as_ref().map_or(true, |(g, _)| gain > *g) {
                best = Some((
                    gain,
                    BestSplit {
                        feature: f,
                        threshold: (value + ordered[pos + 1].0) / 2.0,
                    },
                ));
            }
        }
    }

    best.map(|(_, s)| s)
}

fn mean_of(y: ArrayView1<f64>, indices: &[usize]) -> f64 {
    if indices.is_empty() {
        return 0.0;
    }
    indices.iter().map(|&i| y[i]).sum::<f64>() / indices.len() as f64
}
