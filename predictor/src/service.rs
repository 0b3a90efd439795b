use std::io;

use log::{debug, warn};
use model::{LinearModel, ModelErr};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncWrite, BufReader};

use crate::http::{self, Request, Response, Status};

/// The body of a `POST /predict` request.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictRequest {
    pub input: Vec<f64>,
}

/// The body of a successful prediction response.
#[derive(Debug, Serialize, Deserialize)]
pub struct PredictResponse {
    pub prediction: f64,
}

/// The body of every non-200 response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Serves predictions from an immutable fitted model.
///
/// Constructed once at startup from the model artifact; the model is
/// read-only at request time, so one instance can back any number of
/// concurrent connections.
pub struct PredictService {
    model: LinearModel,
}

impl PredictService {
    /// Creates a new `PredictService` instance.
    ///
    /// # Arguments
    /// * `model` - The fitted model backing every prediction.
    pub fn new(model: LinearModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Routes a request to its handler.
    pub fn handle(&self, req: &Request) -> Response {
        match (req.method.as_str(), req.target.as_str()) {
            ("POST", "/predict") => self.predict(&req.body),
            _ => {
                warn!("no route for {} {}", req.method, req.target);
                Response::json(
                    Status::NotFound,
                    &ErrorResponse {
                        error: format!("no route for {} {}", req.method, req.target),
                    },
                )
            }
        }
    }

    /// Decodes the feature vector, validates it against the model and
    /// predicts. Bad input is rejected before the model runs.
    fn predict(&self, body: &[u8]) -> Response {
        let req: PredictRequest = match serde_json::from_slice(body) {
            Ok(req) => req,
            Err(e) => {
                warn!("rejected request body: {e}");
                return Response::json(
                    Status::BadRequest,
                    &ErrorResponse {
                        error: format!("invalid request body: {e}"),
                    },
                );
            }
        };

        match self.model.predict_one(&req.input) {
            Ok(prediction) => {
                debug!("predicted {prediction} from {} features", req.input.len());
                Response::json(Status::Ok, &PredictResponse { prediction })
            }
            Err(e @ ModelErr::FeatureCountMismatch { .. }) => {
                warn!("rejected feature vector: {e}");
                Response::json(
                    Status::BadRequest,
                    &ErrorResponse {
                        error: e.to_string(),
                    },
                )
            }
            Err(e) => Response::json(
                Status::InternalError,
                &ErrorResponse {
                    error: e.to_string(),
                },
            ),
        }
    }
}

/// Serves requests on `stream` until the peer disconnects.
///
/// Requests are handled one at a time in arrival order. A framing error
/// gets a 400 before the connection is dropped.
///
/// # Arguments
/// * `service` - The shared prediction service.
/// * `stream` - The accepted connection.
///
/// # Returns
/// A result object that returns `io::Error` on failure.
pub async fn serve_connection<S>(service: &PredictService, stream: S) -> io::Result<()>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (rx, mut tx) = tokio::io::split(stream);
    let mut rx = BufReader::new(rx);

    loop {
        match http::read_request(&mut rx).await {
            Ok(Some(req)) => {
                let resp = service.handle(&req);
                resp.write_to(&mut tx).await?;
            }
            Ok(None) => break,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                warn!("dropping connection: {e}");
                let resp = Response::json(
                    Status::BadRequest,
                    &ErrorResponse {
                        error: e.to_string(),
                    },
                );
                resp.write_to(&mut tx).await?;
                break;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
