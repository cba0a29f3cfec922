use std::num::ParseIntError;
use std::path::PathBuf;

/// A page no longer has the shape its parser expects.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("expected element not found: {0}")]
    MissingElement(&'static str),

    #[error("row {row} has no cell at index {index}")]
    MissingCell { row: usize, index: usize },

    #[error("invalid error code {value:?}: {source}")]
    InvalidCode {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("error code text is empty")]
    EmptyCode,
}

/// Failure of a single collection run.
#[derive(Debug, thiserror::Error)]
pub enum CollectError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: ParseError,
    },

    #[error("failed to serialize error codes: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CollectError {
    /// Network failures end the run with exit status 1; everything else is a fault.
    pub fn is_network(&self) -> bool {
        matches!(self, CollectError::Network { .. })
    }
}
