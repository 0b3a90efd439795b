use std::{error::Error, fmt, io};

/// The model module's result type.
pub type Result<T> = std::result::Result<T, ModelErr>;

/// Model construction, persistence and prediction failures.
#[derive(Debug)]
pub enum ModelErr {
    Io(io::Error),
    Decode(serde_json::Error),
    EmptyModel,
    EmptyInput,
    FeatureCountMismatch {
        got: usize,
        expected: usize,
    },
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
}

impl fmt::Display for ModelErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelErr::Io(e) => write!(f, "io error: {e}"),
            ModelErr::Decode(e) => write!(f, "artifact decode error: {e}"),
            ModelErr::EmptyModel => write!(f, "a model needs at least one weight"),
            ModelErr::EmptyInput => write!(f, "expected at least one sample"),
            ModelErr::FeatureCountMismatch { got, expected } => {
                write!(f, "feature count mismatch: got {got}, expected {expected}")
            }
            ModelErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => write!(
                f,
                "size mismatch between {a} and {b}: got {got}, expected {expected}"
            ),
        }
    }
}

impl Error for ModelErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelErr::Io(e) => Some(e),
            ModelErr::Decode(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ModelErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for ModelErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Boundary conversion for binaries / I/O APIs.
impl From<ModelErr> for io::Error {
    fn from(value: ModelErr) -> Self {
        match value {
            ModelErr::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}
