use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GramForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Missing Resource '{}': {source}", .path.display())]
    MissingResource {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl GramForgeError {
    pub fn missing<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::MissingResource {
            path: path.into(),
            source,
        }
    }
}

pub type GfResult<T> = Result<T, GramForgeError>;
