//! Candidate regression models and the training/selection protocol
//!
//! Three fixed candidates are trained on the log-transformed view count and
//! compared on a held-out split: a linear model, a bagged tree ensemble and
//! gradient-boosted trees. The best by held-out R² wins.

mod boosting;
mod forest;
mod linear;
pub mod metrics;
pub mod trainer;
mod tree;
#[cfg(test)]
mod tests;

pub use boosting::GradientBoosting;
pub use forest::RandomForest;
pub use linear::LinearRegression;
pub use metrics::EvaluationResult;
pub use trainer::ModelTrainer;

use crate::error::{PredictorError, Result};
use crate::types::FeatureVector;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

/// A numeric feature matrix with its named column schema and target vector.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub feature_names: Vec<String>,
    pub x: Array2<f64>,
    pub y: Array1<f64>,
}

impl Dataset {
    /// Assemble the numeric matrix from engineered feature vectors.
    ///
    /// Rows with missing time-derived fields are dropped here; identifier,
    /// text, timestamp and duration columns never make it into the matrix.
    pub fn from_features(rows: &[FeatureVector]) -> Result<Self> {
        let feature_names: Vec<String> = FeatureVector::COLUMN_NAMES
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut flat = Vec::new();
        let mut y = Vec::new();
        for fv in rows {
            if let Some(cols) = fv.columns() {
                flat.extend(cols.iter().map(|(_, v)| *v));
                y.push(fv.view_count);
            }
        }
        if y.is_empty() {
            return Err(PredictorError::EmptyDataset(
                "no rows with complete features".to_string(),
            ));
        }

        let n_rows = y.len();
        let x = Array2::from_shape_vec((n_rows, feature_names.len()), flat)
            .map_err(|e| PredictorError::EmptyDataset(e.to_string()))?;
        Ok(Self {
            feature_names,
            x,
            y: Array1::from_vec(y),
        })
    }

    pub fn n_rows(&self) -> usize {
        self.x.nrows()
    }
}

/// Common interface over the candidate regressors
pub trait Regressor {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>);
    fn predict(&self, x: ArrayView2<f64>) -> Array1<f64>;
    /// Model name for logging and result tables
    fn name(&self) -> &'static str;
}

/// Serializable wrapper over the fixed candidate set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CandidateModel {
    Linear(LinearRegression),
    Forest(RandomForest),
    Boosting(GradientBoosting),
}

impl Regressor for CandidateModel {
    fn fit(&mut self, x: ArrayView2<f64>, y: ArrayView1<f64>) {
        match self {
            CandidateModel::Linear(m) => m.fit(x, y),
            CandidateModel::Forest(m) => m.fit(x, y),
            CandidateModel::Boosting(m) => m.fit(x, y),
        }
    }

    fn predict(&self, x: ArrayView2<f64>) -> Array1<f64> {
        match self {
            CandidateModel::Linear(m) => m.predict(x),
            CandidateModel::Forest(m) => m.predict(x),
            CandidateModel::Boosting(m) => m.predict(x),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            CandidateModel::Linear(m) => m.name(),
            CandidateModel::Forest(m) => m.name(),
            CandidateModel::Boosting(m) => m.name(),
        }
    }
}
