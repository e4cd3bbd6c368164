//! Inference adapter: raw metadata in, integer view count out
//!
//! Re-applies the cleaning and feature-engineering pipeline to new input,
//! then aligns the result to the trained feature contract by column name.
//! The `TrainedArtifact` is an explicit value passed in at construction;
//! there is no ambient model state.


use crate::cleaner::Cleaner;
use crate::error::{PredictorError, Result};
use crate::features::FeatureEngineer;
use crate::model::Regressor;
use crate::storage::TrainedArtifact;
use crate::types::{FeatureVector, RawRecord};
use ndarray::Array2;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

pub struct Predictor {
    artifact: TrainedArtifact,
}

/// Per-row batch outcome; cleaning drops are omitted entirely, schema
/// failures surface per row.
pub struct BatchPrediction {
    pub video_id: String,
    pub outcome: Result<u64>,
}

impl Predictor {
    pub fn new(artifact: TrainedArtifact) -> Self {
        Self { artifact }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(TrainedArtifact::load(path)?))
    }

    pub fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    /// Predict the view count for a single raw record.
    pub fn predict_one(&self, record: &RawRecord) -> Result<u64> {
        let features = self.preprocess(std::slice::from_ref(record))?;
        let fv = features.first().ok_or_else(|| {
            PredictorError::EmptyDataset("record was dropped during cleaning".to_string())
        })?;
        self.predict_feature_vector(fv)
    }

    /// Predict a batch. Rows the cleaner drops are excluded by omission;
    /// each surviving row gets its own outcome.
    pub fn predict_batch(&self, records: &[RawRecord]) -> Result<Vec<BatchPrediction>> {
        let features = self.preprocess(records)?;
        Ok(features
            .iter()
            .map(|fv| BatchPrediction {
                video_id: fv.video_id.clone(),
                outcome: self.predict_feature_vector(fv),
            })
            .collect())
    }

    /// Clean (inference mode), encode with the persisted vocabulary, and
    /// engineer features.
    fn preprocess(&self, records: &[RawRecord]) -> Result<Vec<FeatureVector>> {
        let mut cleaned = Cleaner::clean_for_inference(records);
        self.artifact.category_encoder.encode_records(&mut cleaned);
        Ok(FeatureEngineer::engineer_all(&cleaned))
    }

    /// Reindex one row to the feature contract and run the model.
    fn predict_feature_vector(&self, fv: &FeatureVector) -> Result<u64> {
        let available: HashMap<&str, f64> = fv.present_columns().into_iter().collect();

        // Contract order, validated by name; extra columns are ignored
        let mut row = Vec::with_capacity(self.artifact.feature_names.len());
        for name in &self.artifact.feature_names {
            let value = available
                .get(name.as_str())
                .ok_or_else(|| PredictorError::SchemaMismatch {
                    column: name.clone(),
                })?;
            row.push(*value);
        }

        let x = Array2::from_shape_vec((1, row.len()), row)
            .map_err(|e| PredictorError::EmptyDataset(e.to_string()))?;
        let log_pred = self.artifact.model.predict(x.view())[0];
        debug!(video_id = %fv.video_id, log_pred, "raw log-space prediction");

        Ok(invert_log_target(log_pred))
    }
}

/// Invert the `log1p` target transform, clamp at zero and round to an
/// integer count.
pub fn invert_log_target(log_pred: f64) -> u64 {
    log_pred.exp_m1().max(0.0).round() as u64
}
