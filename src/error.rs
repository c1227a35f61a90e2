//! Error handling for the resume ranker

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRankerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("Embedding generation error: {0}")]
    Embedding(String),

    #[error("Model loading error: {0}")]
    ModelLoading(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Ranking store error: {0}")]
    Storage(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

pub type Result<T> = std::result::Result<T, ResumeRankerError>;

/// Model libraries report through anyhow; anything surfacing that way is a load failure
impl From<anyhow::Error> for ResumeRankerError {
    fn from(err: anyhow::Error) -> Self {
        ResumeRankerError::ModelLoading(format!("{:#}", err))
    }
}

impl From<tokio::task::JoinError> for ResumeRankerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ResumeRankerError::Processing(format!("Scoring task failed: {}", err))
    }
}

impl ResumeRankerError {
    /// Map an IO error on `path`, turning `NotFound` into `FileNotFound`
    pub fn from_io(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            ResumeRankerError::FileNotFound(path.into())
        } else {
            ResumeRankerError::Io(err)
        }
    }
}
