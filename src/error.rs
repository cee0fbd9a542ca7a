use std::path::PathBuf;
use thiserror::Error;

/// Fatal import failures. Row-level defects never surface here; they are
/// skipped and counted instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("source file is empty")]
    EmptySource,

    #[error(
        "unexpected headers: [{}] (expected [{}])",
        .found.join(", "),
        .expected.join(", ")
    )]
    HeaderMismatch {
        found: Vec<String>,
        expected: Vec<String>,
    },

    #[error("io error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ImportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a document body could not be read as a card document
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("`stations` is missing or not an array")]
    MissingStations,
}

/// Failures while loading the card document into the engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("failed to fetch {location}: {reason}")]
    FetchFailed { location: String, reason: String },

    #[error("malformed document at {location}: {reason}")]
    MalformedDocument { location: String, reason: String },
}
