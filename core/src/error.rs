//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The Global Error Enum.
///
/// Absent annotation fields are never errors; they resolve to declared
/// defaults. Only structurally broken input ends up here.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// An annotation record is missing a mandatory value or holds a value
    /// of the wrong shape (e.g. a content schema without `implementation`).
    #[from(ignore)]
    #[display("Malformed Annotation: {_0}")]
    MalformedAnnotation(String),

    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON decoding errors of record dumps.
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),
}

impl AppError {
    /// Shorthand for building a `MalformedAnnotation` error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedAnnotation(msg.into())
    }
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
