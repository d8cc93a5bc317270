use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InterchangeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Failed to write timeline to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: Box<InterchangeError>,
    },
}

impl InterchangeError {
    /// Wraps an error with the output path it occurred on.
    pub fn write(path: impl Into<PathBuf>, source: impl Into<InterchangeError>) -> Self {
        InterchangeError::Write {
            path: path.into(),
            source: Box::new(source.into()),
        }
    }
}
