use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid log level '{0}'")]
    InvalidLevel(String),

    #[error("Split threshold must be a positive number")]
    InvalidSplitThreshold,

    #[error("Unknown listener '{0}'")]
    UnknownListener(String),

    #[error("Output '{name}' is unavailable: {reason}")]
    ArtifactUnavailable { name: String, reason: String },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn unavailable(name: impl Into<String>, reason: impl ToString) -> Self {
        Error::ArtifactUnavailable {
            name: name.into(),
            reason: reason.to_string(),
        }
    }
}
