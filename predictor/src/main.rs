use std::{env, io, sync::Arc};

use log::{info, warn};
use model::{DEFAULT_ARTIFACT_PATH, LinearModel, ModelArtifact};
use predictor::{PredictService, serve_connection};
use tokio::{net::TcpListener, signal};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "5000";

#[tokio::main]
async fn main() -> io::Result<()> {
    env_logger::init();

    let model_path = env::var("MODEL_PATH").unwrap_or_else(|_| DEFAULT_ARTIFACT_PATH.to_string());
    let artifact = ModelArtifact::load(&model_path).map_err(io::Error::from)?;
    let model = LinearModel::try_from(artifact).map_err(io::Error::from)?;
    info!(
        "loaded model with {} features from {model_path}",
        model.feature_count()
    );

    let service = Arc::new(PredictService::new(model));

    let addr = format!(
        "{}:{}",
        env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
        env::var("PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
    );
    let list = TcpListener::bind(&addr).await?;
    info!("listening at {addr}");

    loop {
        tokio::select! {
            accepted = list.accept() => {
                let (stream, peer) = accepted?;
                let service = Arc::clone(&service);

                tokio::spawn(async move {
                    if let Err(e) = serve_connection(&service, stream).await {
                        warn!("connection from {peer} failed: {e}");
                    }
                });
            }
            _ = signal::ctrl_c() => {
                info!("received shutdown signal");
                break;
            }
        }
    }

    Ok(())
}
