//! Error types for patch extraction

use thiserror::Error;

/// Patch-extraction error types
#[derive(Error, Debug)]
pub enum ChopError {
    /// Strategy name not present in the registry
    #[error("Unknown strategy: {name}")]
    UnknownStrategy { name: String },

    /// Parameter mapping could not be bound to the strategy
    #[error("Invalid strategy parameters: {reason}")]
    InvalidParams { reason: String },

    /// Strategy-required parameter missing from the mapping
    #[error("Strategy `{strategy}` requires parameter `{param}`")]
    MissingParam {
        strategy: &'static str,
        param: &'static str,
    },

    /// Dual-matrix strategy invoked with a single matrix
    #[error("Strategy `{strategy}` operates on a mashup/vocal pair")]
    RequiresPair { strategy: &'static str },

    /// No valid random offset exists on an axis
    #[error("No valid {axis} offset: scale {scale} >= usable extent {extent}")]
    SamplingRange {
        axis: &'static str,
        extent: usize,
        scale: usize,
    },

    /// Mashup and vocal matrices are not the same shape
    #[error("Matrix shape mismatch: mashup {mashup:?}, vocal {vocal:?}")]
    ShapeMismatch {
        mashup: (usize, usize, usize),
        vocal: (usize, usize, usize),
    },
}

/// Result type for patch-extraction operations
pub type ChopResult<T> = Result<T, ChopError>;
