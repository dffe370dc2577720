//! Error types for the plytree crate

use thiserror::Error;

/// Main error type for the plytree crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("prefix conflict at '{path}': one game ends where another continues")]
    PrefixConflict { path: String },

    #[error("no node reachable by path '{path}'")]
    PathNotFound { path: String },

    #[error("sequence contains no playable moves")]
    EmptySequence,

    #[error("corpus '{path}' contains no games")]
    EmptyCorpus { path: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to {operation}: {message}")]
    SerializationContext { operation: String, message: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
