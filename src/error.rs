//! Common error types for the tag query engine

use thiserror::Error;

/// Common result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced by the engine
///
/// Fetch and payload errors propagate unchanged from the asset boundary up
/// through the cache and resolver; there is no internal retry.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or non-success status while fetching an asset
    #[error("Fetch failed for {path}: {reason}")]
    Fetch { path: String, reason: String },

    /// Asset body did not match the expected JSON shape
    #[error("Malformed payload at {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// Random pick requested over zero candidates
    #[error("No candidate tags to pick from")]
    EmptyChoiceSet,

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
