use std::path::PathBuf;

use thiserror::Error;

/// A specialized `Result` type for search operations.
pub type SeekResult<T> = Result<T, SeekError>;

/// The error type for caller-visible faults.
///
/// Searches themselves never fail: a missing library, a destroyed window or
/// a region that cannot be captured all degrade to an empty result. Errors
/// are reserved for malformed arguments and capture persistence.
#[derive(Debug, Error)]
pub enum SeekError {
    #[error("Malformed color range spec '{spec}': {reason}")]
    ColorSpec { spec: String, reason: String },

    #[error("Failed to save capture to {path:?}: {source}")]
    SaveFailed {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}
