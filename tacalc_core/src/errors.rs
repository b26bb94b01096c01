//! # Error Types
//!
//! Structured error types for tacalc_core. Every variant carries enough
//! context to be reported to a user or serialized for a machine consumer.
//!
//! Note that most "bad" situations in this crate are *not* errors: missing
//! inputs produce `Ok(None)`, a break-even that never happens is a sentinel
//! value, and a missing translation is a visible placeholder string.
//!
//! ## Example
//!
//! ```rust
//! use tacalc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_hours(hours: f64) -> CalcResult<()> {
//!     if hours < 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "manual_hours",
//!             hours.to_string(),
//!             "Hours cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for tacalc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (negative, NaN, infinite)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A stored-input identifier that the calculator does not know
    #[error("Unknown input key: {key}")]
    UnknownKey { key: String },

    /// Language code outside the supported set
    #[error("Unsupported language: {code}")]
    UnsupportedLanguage { code: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// The input store is locked by another process
    #[error("File locked: '{path}' is locked by {locked_by}")]
    FileLocked { path: String, locked_by: String },

    /// JSON/TOML serialization or deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Typst compilation or PDF export failed
    #[error("Render failed: {stage} - {reason}")]
    RenderFailed { stage: String, reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownKey error
    pub fn unknown_key(key: impl Into<String>) -> Self {
        CalcError::UnknownKey { key: key.into() }
    }

    /// Create an UnsupportedLanguage error
    pub fn unsupported_language(code: impl Into<String>) -> Self {
        CalcError::UnsupportedLanguage { code: code.into() }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileLocked error
    pub fn file_locked(path: impl Into<String>, locked_by: impl Into<String>) -> Self {
        CalcError::FileLocked {
            path: path.into(),
            locked_by: locked_by.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Create a RenderFailed error
    pub fn render_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::RenderFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Check if this is a recoverable error (e.g., can retry)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CalcError::FileLocked { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownKey { .. } => "UNKNOWN_KEY",
            CalcError::UnsupportedLanguage { .. } => "UNSUPPORTED_LANGUAGE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::FileLocked { .. } => "FILE_LOCKED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::RenderFailed { .. } => "RENDER_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("manual_hours", "-5", "Hours cannot be negative");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_key("nope").error_code(), "UNKNOWN_KEY");
        assert_eq!(
            CalcError::unsupported_language("xx").error_code(),
            "UNSUPPORTED_LANGUAGE"
        );
        assert_eq!(
            CalcError::render_failed("compile", "boom").error_code(),
            "RENDER_FAILED"
        );
    }

    #[test]
    fn test_only_lock_errors_are_recoverable() {
        assert!(CalcError::file_locked("inputs.json", "another process").is_recoverable());
        assert!(!CalcError::file_error("write", "inputs.json", "denied").is_recoverable());
    }
}
