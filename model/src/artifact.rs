use std::{fs, path::Path};

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::{
    error::{ModelErr, Result},
    linear::LinearModel,
};

/// Where the trainer leaves the artifact and the predictor picks it up.
pub const DEFAULT_ARTIFACT_PATH: &str = "diabetes_model.json";

/// The persisted form of a fitted model.
///
/// A single flat file with no versioning or metadata; reading it back with
/// `load` yields a model with bit-identical predictions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_count: usize,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl ModelArtifact {
    /// Writes the artifact to `path`.
    ///
    /// # Arguments
    /// * `path` - Destination file, truncated if it already exists.
    ///
    /// # Returns
    /// A result object that returns `ModelErr` on failure.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        // SAFETY: Serialize impl is derived on a struct with only string
        //         keys and plain numbers, serialization cannot fail.
        let bytes = serde_json::to_vec(self).unwrap();
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Reads an artifact back from `path`.
    ///
    /// # Arguments
    /// * `path` - A file previously written by `save`.
    ///
    /// # Returns
    /// The decoded artifact, or `ModelErr` on a read, decode or
    /// consistency failure.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = fs::read(path)?;
        let artifact: Self = serde_json::from_slice(&bytes)?;

        if artifact.feature_count != artifact.weights.len() {
            return Err(ModelErr::SizeMismatch {
                a: "feature_count",
                b: "weights",
                got: artifact.weights.len(),
                expected: artifact.feature_count,
            });
        }

        Ok(artifact)
    }
}

impl From<&LinearModel> for ModelArtifact {
    fn from(model: &LinearModel) -> Self {
        Self {
            feature_count: model.feature_count(),
            weights: model.weights().to_vec(),
            intercept: model.intercept(),
        }
    }
}

impl TryFrom<ModelArtifact> for LinearModel {
    type Error = ModelErr;

    fn try_from(artifact: ModelArtifact) -> Result<Self> {
        LinearModel::new(Array1::from(artifact.weights), artifact.intercept)
    }
}
