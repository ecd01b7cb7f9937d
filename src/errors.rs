use crate::models::ActivityKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StreakError {
    #[error("entry {index} is not a calendar date or timestamp: {value:?}")]
    InvalidDate { index: usize, value: String },
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct SourceError {
    pub message: String,
}

impl SourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{kind} dates are malformed: {source}")]
    Streak {
        kind: ActivityKind,
        #[source]
        source: StreakError,
    },
    #[error("failed to fetch {kind} dates: {source}")]
    Source {
        kind: ActivityKind,
        #[source]
        source: SourceError,
    },
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid activity JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl AppError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
