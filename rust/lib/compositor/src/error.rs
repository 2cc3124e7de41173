use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompositorError {
    #[error("io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),
}

impl CompositorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CompositorError::Io {
            path: path.into(),
            source,
        }
    }
}
