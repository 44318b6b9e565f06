use thiserror::Error;

/// An error that occurred while parsing a time string.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("{0}")]
    Syntax(String),
    #[error("{0}")]
    UnitNotSupported(String),
}
