//! Search widget error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// No speech recognition backend is available
    #[error("speech recognition is not available")]
    Unsupported,

    /// The backend refused to start listening
    #[error("speech recognition failed to start: {0}")]
    Start(String),

    /// The backend reported an error while listening
    #[error("speech recognition error: {0}")]
    Recognition(String),
}

pub type Result<T> = std::result::Result<T, SearchError>;
