//! Trained artifact persistence
//!
//! The model, its feature contract and the fitted category encoder travel as
//! one serde_json document. Saves go through a temp file in the destination
//! directory followed by a rename, so an interrupted write never leaves a
//! readable half-artifact behind.


use crate::cleaner::CategoryEncoder;
use crate::error::{PredictorError, Result};
use crate::model::CandidateModel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

/// Everything inference needs, as a single immutable unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainedArtifact {
    pub model: CandidateModel,
    /// Ordered feature contract captured from the training matrix
    pub feature_names: Vec<String>,
    /// Vocabulary fitted at training time, reused verbatim at inference
    pub category_encoder: CategoryEncoder,
}

impl TrainedArtifact {
    /// Atomic save: write to `<path>.tmp`, then rename over the target.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string(self)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, path)?;

        info!(path = %path.display(), features = self.feature_names.len(), "saved trained artifact");
        Ok(())
    }

    /// Load an artifact as a unit. A missing file is `ArtifactNotFound`;
    /// anything unreadable or undeserializable is `ArtifactCorrupt`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(PredictorError::ArtifactNotFound(path.display().to_string()));
            }
            Err(e) => {
                return Err(PredictorError::ArtifactCorrupt {
                    path: path.display().to_string(),
                    cause: e.to_string(),
                });
            }
        };

        serde_json::from_str(&raw).map_err(|e| PredictorError::ArtifactCorrupt {
            path: path.display().to_string(),
            cause: e.to_string(),
        })
    }
}
