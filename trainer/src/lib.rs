mod error;
mod pipeline;
mod split;

pub use error::Result;
pub use error::TrainErr;
pub use pipeline::SPLIT_SEED;
pub use pipeline::TRAIN_RATIO;
pub use pipeline::TrainReport;
pub use pipeline::train;
pub use split::split_indices;
