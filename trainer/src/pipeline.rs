use linfa::Dataset;
use linfa::prelude::*;
use linfa_linear::LinearRegression;
use log::info;
use model::{LinearModel, mean_squared_error};
use ndarray::Axis;
use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::Result, split::split_indices};

/// Seed for the train / held-out shuffle, fixed so runs are reproducible.
pub const SPLIT_SEED: u64 = 42;

/// Fraction of samples used for fitting; the rest is held out for the
/// error estimate.
pub const TRAIN_RATIO: f32 = 0.8;

/// A fitted model together with its held-out evaluation.
#[derive(Debug)]
pub struct TrainReport {
    pub model: LinearModel,
    pub mse: f64,
}

/// Fits ordinary least squares on the built-in diabetes dataset.
///
/// Splits the 442 samples into train / held-out partitions with `seed`,
/// fits on the train partition and evaluates the mean squared error on
/// the held-out one.
///
/// # Arguments
/// * `seed` - Seed for the partition shuffle.
///
/// # Returns
/// The fitted model and its held-out mean squared error.
pub fn train(seed: u64) -> Result<TrainReport> {
    let data = linfa_datasets::diabetes();
    let records = data.records().to_owned();
    let targets = data.targets().to_owned();

    let mut rng = SmallRng::seed_from_u64(seed);
    let (train_idx, held_out_idx) = split_indices(records.nrows(), TRAIN_RATIO, &mut rng);
    info!(
        "split {} samples into {} train / {} held-out",
        records.nrows(),
        train_idx.len(),
        held_out_idx.len()
    );

    let train_set = Dataset::new(
        records.select(Axis(0), &train_idx),
        targets.select(Axis(0), &train_idx),
    );
    let fitted = LinearRegression::new().fit(&train_set)?;
    let model = LinearModel::new(fitted.params().clone(), fitted.intercept())?;

    let held_out_records = records.select(Axis(0), &held_out_idx);
    let held_out_targets = targets.select(Axis(0), &held_out_idx);
    let predicted = model.predict_batch(held_out_records.view())?;
    let mse = mean_squared_error(predicted.view(), held_out_targets.view())?;
    info!("held-out mse {mse}");

    Ok(TrainReport { model, mse })
}
