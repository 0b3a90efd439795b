pub mod http;
pub mod service;

pub use service::PredictService;
pub use service::serve_connection;
