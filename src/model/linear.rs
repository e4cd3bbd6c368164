//! Ordinary least squares with an intercept term
//!
//! Solves the ridge-stabilized normal equations `(XᵀX + λI)w = Xᵀy` with
//! Gaussian elimination. λ is tiny and exists only to keep near-collinear
//! feature matrices solvable, not to regularize.

use super::Regressor;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

const RIDGE_EPSILON: f64 = 1e-8;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinearRegression {
    /// Per-feature weights; empty until fitted
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearRegression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl Regressor for LinearRegression {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) {
        let n = x.nrows();
        let p = x.ncols();

        // Augment with a constant column for the intercept
        let mut design = Array2::<f64>::ones((n, p + 1));
        design.slice_mut(ndarray::s![.., ..p]).assign(&x);

        // Normal equations
        let xt = design.t();
        let mut xtx = xt.dot(&design);
        for i in 0..(p + 1) {
            xtx[[i, i]] += RIDGE_EPSILON;
        }
        let xty = xt.dot(&y);

        let solution = solve(xtx, xty);
        self.weights = solution.iter().take(p).copied().collect();
        self.intercept = solution[p];
    }

    fn predict(&self, x: ArrayView2<f64>) -> Array1<f64> {
        let w = Array1::from_vec(self.weights.clone());
        x.dot(&w) + self.intercept
    }

    fn name(&self) -> &'static str {
        "LinearRegression"
    }
}

/// Solve `a · x = b` by Gaussian elimination with partial pivoting.
/// `a` is symmetric positive definite here (XᵀX plus a ridge term), so a
/// vanishing pivot cannot occur; the guard only skips degenerate columns.
fn solve(mut a: Array2<f64>, mut b: Array1<f64>) -> Array1<f64> {
    let n = a.nrows();

    for col in 0..n {
        // Partial pivot
        let mut pivot_row = col;
        let mut pivot_val = a[[col, col]].abs();
        for row in (col + 1)..n {
            if a[[row, col]].abs() > pivot_val {
                pivot_val = a[[row, col]].abs();
                pivot_row = row;
            }
        }
        if pivot_val < f64::EPSILON {
            continue;
        }
        if pivot_row != col {
            for k in 0..n {
                let tmp = a[[col, k]];
                a[[col, k]] = a[[pivot_row, k]];
                a[[pivot_row, k]] = tmp;
            }
            b.swap(col, pivot_row);
        }

        for row in (col + 1)..n {
            let factor = a[[row, col]] / a[[col, col]];
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    // Back substitution
    let mut x = Array1::<f64>::zeros(n);
    for row in (0..n).rev() {
        let mut sum = b[row];
        for k in (row + 1)..n {
            sum -= a[[row, k]] * x[k];
        }
        x[row] = if a[[row, row]].abs() < f64::EPSILON {
            0.0
        } else {
            sum / a[[row, row]]
        };
    }
    x
}
