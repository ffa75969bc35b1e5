//! Carousel error types

use thiserror::Error;

/// Rejected carousel operations. None of these are fatal: callers on the
/// event path log and drop them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CarouselError {
    /// Navigation target outside `[0, len)`
    #[error("navigation target {index} is out of range for {len} items")]
    InvalidIndex { index: usize, len: usize },

    /// Item geometry has not been measured yet
    #[error("item geometry has not been measured yet")]
    NoGeometry,

    /// The carousel was mounted without items
    #[error("carousel has no items")]
    EmptyCatalog,
}

/// Asset catalog errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// The store could not be parsed
    #[error("store is not valid JSON: {0}")]
    Store(#[from] serde_json::Error),

    /// The page query has no selector parameter
    #[error("query has no `{0}` parameter")]
    MissingParam(String),

    /// No store entry carries the requested name
    #[error("no store entry named {0:?}")]
    UnknownEntry(String),

    /// A video asset is not a URL with a video id in its path
    #[error("invalid video url {url:?}: {reason}")]
    InvalidVideoUrl { url: String, reason: String },
}

/// Result type for carousel operations
pub type Result<T> = std::result::Result<T, CarouselError>;
