use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MovieDbError {
    #[error("Data file {} is corrupt: {reason}", path.display())]
    StorageCorrupt { path: PathBuf, reason: String },

    #[error("Failed to write data file {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Not enough movies in database! To perform stats you need at least {required} movies, found {found}.")]
    InsufficientData { found: usize, required: usize },

    #[error("Movie already exists: {0}")]
    DuplicateTitle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("Lookup failed: {0}")]
    Lookup(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl MovieDbError {
    pub(crate) fn corrupt(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        MovieDbError::StorageCorrupt {
            path: path.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MovieDbError::StorageWrite {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, MovieDbError>;
