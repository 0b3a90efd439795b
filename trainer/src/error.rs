use std::{error::Error, fmt};

use linfa_linear::LinearError;
use model::ModelErr;

/// The trainer module's result type.
pub type Result<T> = std::result::Result<T, TrainErr>;

/// Training pipeline failures.
#[derive(Debug)]
pub enum TrainErr {
    Fit(LinearError<f64>),
    Model(ModelErr),
}

impl fmt::Display for TrainErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainErr::Fit(e) => write!(f, "failed to fit the regression: {e}"),
            TrainErr::Model(e) => write!(f, "model error: {e}"),
        }
    }
}

impl Error for TrainErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrainErr::Fit(e) => Some(e),
            TrainErr::Model(e) => Some(e),
        }
    }
}

impl From<LinearError<f64>> for TrainErr {
    fn from(value: LinearError<f64>) -> Self {
        Self::Fit(value)
    }
}

impl From<ModelErr> for TrainErr {
    fn from(value: ModelErr) -> Self {
        Self::Model(value)
    }
}
