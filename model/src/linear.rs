use ndarray::{Array1, ArrayView2};

use crate::error::{ModelErr, Result};

/// A fitted ordinary least-squares regression.
///
/// Holds one weight per input feature plus an intercept. Immutable after
/// construction, so it can be shared freely across request handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    weights: Array1<f64>,
    intercept: f64,
}

impl LinearModel {
    /// Creates a new `LinearModel` instance.
    ///
    /// # Arguments
    /// * `weights` - One coefficient per input feature.
    /// * `intercept` - The bias term.
    ///
    /// # Returns
    /// A `LinearModel`, or `ModelErr::EmptyModel` if `weights` is empty.
    pub fn new(weights: Array1<f64>, intercept: f64) -> Result<Self> {
        if weights.is_empty() {
            return Err(ModelErr::EmptyModel);
        }

        Ok(Self { weights, intercept })
    }

    /// Returns the number of input features this model expects.
    pub fn feature_count(&self) -> usize {
        self.weights.len()
    }

    pub fn weights(&self) -> &Array1<f64> {
        &self.weights
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Predicts the target for a single feature vector.
    ///
    /// # Arguments
    /// * `features` - Feature values, in the model's feature order.
    ///
    /// # Returns
    /// The predicted target, or `ModelErr::FeatureCountMismatch` if the
    /// slice length disagrees with the weight count.
    pub fn predict_one(&self, features: &[f64]) -> Result<f64> {
        if features.len() != self.weights.len() {
            return Err(ModelErr::FeatureCountMismatch {
                got: features.len(),
                expected: self.weights.len(),
            });
        }

        let dot: f64 = self.weights.iter().zip(features).map(|(w, x)| w * x).sum();
        Ok(dot + self.intercept)
    }

    /// Predicts targets for a batch of feature vectors, one per row.
    pub fn predict_batch(&self, records: ArrayView2<'_, f64>) -> Result<Array1<f64>> {
        if records.ncols() != self.weights.len() {
            return Err(ModelErr::FeatureCountMismatch {
                got: records.ncols(),
                expected: self.weights.len(),
            });
        }

        Ok(records.dot(&self.weights) + self.intercept)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn predicts_weighted_sum_plus_intercept() {
        let model = LinearModel::new(array![1.0, 2.0, 3.0], 0.5).unwrap();
        let pred = model.predict_one(&[1.0, 1.0, 1.0]).unwrap();
        assert_eq!(pred, 6.5);
    }

    #[test]
    fn rejects_wrong_feature_count() {
        let model = LinearModel::new(array![1.0, 2.0, 3.0], 0.0).unwrap();
        let err = model.predict_one(&[1.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            ModelErr::FeatureCountMismatch {
                got: 2,
                expected: 3
            }
        ));
    }

    #[test]
    fn rejects_empty_weights() {
        let err = LinearModel::new(Array1::zeros(0), 1.0).unwrap_err();
        assert!(matches!(err, ModelErr::EmptyModel));
    }

    #[test]
    fn batch_prediction_matches_per_row_prediction() {
        let model = LinearModel::new(array![0.5, -1.0], 2.0).unwrap();
        let records = array![[1.0, 1.0], [2.0, 0.0], [0.0, 3.0]];

        let batch = model.predict_batch(records.view()).unwrap();

        for (row, pred) in records.outer_iter().zip(&batch) {
            let single = model
                .predict_one(row.as_slice().unwrap())
                .unwrap();
            assert_eq!(single, *pred);
        }
    }

    #[test]
    fn batch_rejects_wrong_column_count() {
        let model = LinearModel::new(array![1.0, 2.0], 0.0).unwrap();
        let records = ndarray::Array2::<f64>::zeros((4, 3));
        assert!(model.predict_batch(records.view()).is_err());
    }
}
