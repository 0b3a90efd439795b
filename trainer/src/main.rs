use std::{env, error::Error};

use log::info;
use model::{DEFAULT_ARTIFACT_PATH, ModelArtifact};
use trainer::{SPLIT_SEED, train};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let report = train(SPLIT_SEED)?;
    println!("Mean Squared Error: {}", report.mse);

    let path = env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string());
    ModelArtifact::from(&report.model).save(&path)?;
    info!("model artifact written to {path}");

    Ok(())
}
