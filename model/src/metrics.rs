use ndarray::ArrayView1;

use crate::error::{ModelErr, Result};

/// Mean of the squared differences between predictions and targets.
///
/// Finite, non-negative for finite input. Errors on empty or
/// unequal-length views.
pub fn mean_squared_error(
    predicted: ArrayView1<'_, f64>,
    actual: ArrayView1<'_, f64>,
) -> Result<f64> {
    if predicted.len() != actual.len() {
        return Err(ModelErr::SizeMismatch {
            a: "predicted",
            b: "actual",
            got: predicted.len(),
            expected: actual.len(),
        });
    }

    if predicted.is_empty() {
        return Err(ModelErr::EmptyInput);
    }

    let sum: f64 = predicted
        .iter()
        .zip(&actual)
        .map(|(p, a)| (p - a).powi(2))
        .sum();

    Ok(sum / predicted.len() as f64)
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn known_values() {
        let predicted = array![1.0, 2.0, 3.0];
        let actual = array![1.0, 4.0, 7.0];

        // (0 + 4 + 16) / 3
        let mse = mean_squared_error(predicted.view(), actual.view()).unwrap();
        assert!((mse - 20.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn perfect_prediction_is_zero() {
        let v = array![1.5, -2.5, 0.0];
        assert_eq!(mean_squared_error(v.view(), v.view()).unwrap(), 0.0);
    }

    #[test]
    fn rejects_length_mismatch() {
        let a = array![1.0, 2.0];
        let b = array![1.0];
        assert!(mean_squared_error(a.view(), b.view()).is_err());
    }

    #[test]
    fn rejects_empty_input() {
        let empty = ndarray::Array1::<f64>::zeros(0);
        let err = mean_squared_error(empty.view(), empty.view()).unwrap_err();
        assert!(matches!(err, ModelErr::EmptyInput));
    }
}
