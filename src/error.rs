//! Error types for the drawing API edges.
//!
//! Pointer handling never fails; these errors only come out of name parsing,
//! bulk point replacement and settings loading.

use thiserror::Error;

/// Errors raised by drawing construction and variant lookup
#[derive(Error, Debug)]
pub enum DrawingError {
    /// Variant name not in the toolbox
    #[error("Unknown drawing variant: {0}")]
    UnknownVariant(String),

    /// Bulk point update with the wrong arity
    #[error("Point count mismatch: expected {expected}, got {actual}")]
    PointCountMismatch { expected: usize, actual: usize },
}

/// Result type alias for drawing operations
pub type DrawingResult<T> = Result<T, DrawingError>;

/// Errors that can occur while loading tool settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Value out of range
    #[error("Invalid setting: {0}")]
    Invalid(String),
}

/// Result type alias for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
