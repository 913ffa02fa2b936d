//! Error taxonomy for the transmission chain
//!
//! Every violation is detected at the point it occurs and returned to the
//! caller immediately. No stage clamps values or produces partial output;
//! a failing stage aborts the whole pipeline run.

use thiserror::Error;

/// Result type for pipeline operations
pub type PhyResult<T> = Result<T, PhyError>;

/// Errors surfaced by the encoding/channel/decoding stages
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhyError {
    /// An empty or malformed sequence where content is required
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A configuration value outside its legal range
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A sequence length inconsistent with the configuration
    #[error("size mismatch: {0}")]
    SizeMismatch(String),
}
