mod artifact;
mod error;
mod linear;
mod metrics;

pub use artifact::DEFAULT_ARTIFACT_PATH;
pub use artifact::ModelArtifact;
pub use error::ModelErr;
pub use error::Result;
pub use linear::LinearModel;
pub use metrics::mean_squared_error;
