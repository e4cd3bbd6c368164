//! Training, evaluation and model selection
//!
//! The target is `log1p`-transformed before fitting and every metric is
//! reported in log space; predictions are inverted with `expm1` at the
//! inference boundary, never here.

use super::metrics::{self, EvaluationResult};
use super::{CandidateModel, Dataset, GradientBoosting, LinearRegression, RandomForest, Regressor};
use crate::cleaner::CategoryEncoder;
use crate::error::{PredictorError, Result};
use crate::storage::TrainedArtifact;
use std::path::Path;
use tracing::info;

pub struct ModelTrainer {
    candidates: Vec<CandidateModel>,
    results: Vec<EvaluationResult>,
    best: Option<usize>,
    feature_names: Vec<String>,
}

impl ModelTrainer {
    /// The fixed candidate list. Order matters: ties on R² go to the
    /// first-encountered model.
    pub fn new() -> Self {
        Self {
            candidates: vec![
                CandidateModel::Linear(LinearRegression::new()),
                CandidateModel::Forest(RandomForest::new()),
                CandidateModel::Boosting(GradientBoosting::new()),
            ],
            results: Vec::new(),
            best: None,
            feature_names: Vec::new(),
        }
    }

    /// Fit every candidate on the log-transformed target and evaluate on the
    /// held-out split. Records the training feature schema as the contract
    /// any later inference must satisfy.
    pub fn train_and_evaluate(
        &mut self,
        train: &Dataset,
        test: &Dataset,
    ) -> Result<&[EvaluationResult]> {
        if train.feature_names != test.feature_names {
            return Err(PredictorError::SchemaMismatch {
                column: "train/test feature schemas differ".to_string(),
            });
        }

        let y_train_log = train.y.mapv(f64::ln_1p);
        let y_test_log: Vec<f64> = test.y.iter().map(|v| v.ln_1p()).collect();

        self.feature_names = train.feature_names.clone();
        self.results.clear();

        for model in &mut self.candidates {
            model.fit(train.x.view(), y_train_log.view());
            let predicted = model.predict(test.x.view()).to_vec();

            let result = EvaluationResult {
                model: model.name().to_string(),
                rmse: metrics::rmse(&y_test_log, &predicted),
                r2: metrics::r2(&y_test_log, &predicted),
                mae: metrics::mae(&y_test_log, &predicted),
            };
            info!(
                model = %result.model,
                rmse = result.rmse,
                r2 = result.r2,
                mae = result.mae,
                "evaluated candidate"
            );
            self.results.push(result);
        }

        self.best = select_best(&self.results);
        if let Some(i) = self.best {
            info!(model = %self.results[i].model, r2 = self.results[i].r2, "selected best model");
        }
        Ok(&self.results)
    }

    /// The winning candidate, once trained
    pub fn best_model(&self) -> Option<&CandidateModel> {
        self.best.map(|i| &self.candidates[i])
    }

    pub fn best_result(&self) -> Option<&EvaluationResult> {
        self.best.map(|i| &self.results[i])
    }

    /// Ordered training feature schema — the contract inference must match
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// Comparison table sorted by R² descending
    pub fn results_ranked(&self) -> Vec<EvaluationResult> {
        let mut ranked = self.results.clone();
        ranked.sort_by(|a, b| b.r2.partial_cmp(&a.r2).unwrap_or(std::cmp::Ordering::Equal));
        ranked
    }

    /// Persist the best model with its feature contract and the category
    /// encoder fitted at cleaning time. Fails with `NoModelTrained` before
    /// a successful `train_and_evaluate`.
    pub fn save(&self, path: impl AsRef<Path>, encoder: &CategoryEncoder) -> Result<()> {
        let best = self.best_model().ok_or(PredictorError::NoModelTrained)?;
        let artifact = TrainedArtifact {
            model: best.clone(),
            feature_names: self.feature_names.clone(),
            category_encoder: encoder.clone(),
        };
        artifact.save(path)
    }
}

impl Default for ModelTrainer {
    fn default() -> Self {
        Self::new()
    }
}

/// Index of the result with the highest R²; ties go to the earlier entry.
/// NaN never wins.
pub fn select_best(results: &[EvaluationResult]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, r) in results.iter().enumerate() {
        if !r.r2.is_nan() && best.map_or(true, |b| r.r2 > results[b].r2) {
            best = Some(i);
        }
    }
    best
}
