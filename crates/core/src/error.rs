//! Error types for the flow-field core.

use thiserror::Error;

/// Errors produced by simulation construction and rendering.
///
/// Steady-state frame updates never fail: invalid configuration is rejected
/// at construction, and a degenerate (zero-cell) grid is handled by skipping
/// force application rather than erroring.
#[derive(Debug, Error)]
pub enum FlowError {
    /// Canvas width or height was not positive.
    #[error("invalid dimensions: width and height must be positive")]
    InvalidDimensions,

    /// A configuration parameter failed validation.
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam {
        name: &'static str,
        reason: String,
    },

    /// A noise source name was not recognized.
    #[error("unknown noise source: {0}")]
    UnknownNoise(String),

    /// An I/O failure while writing a snapshot.
    #[error("i/o error: {0}")]
    Io(String),
}
