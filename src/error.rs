//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while computing payroll, talking
//! to the employee store, loading configuration or exporting reports.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// The calculator itself only ever raises [`EngineError::InvalidInput`].
/// Store failures (`NotFound`, `StoreUnavailable`) are produced by the store
/// and passed through to callers unchanged.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidInput {
///     field: "hourly_rate".to_string(),
///     message: "is not a number".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid input field 'hourly_rate': is not a number");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required field was missing, non-numeric or out of range.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee exists with the given id.
    #[error("Employee not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// The employee store could not serve the request.
    #[error("Employee store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A pay policy value was outside its allowed range.
    #[error("Invalid policy value '{field}': {message}")]
    InvalidPolicy {
        /// The policy field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// A payroll export could not be produced.
    #[error("Export error: {message}")]
    ExportError {
        /// A description of the export failure.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building an [`EngineError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Builds an [`EngineError::InvalidInput`] for a value too large to
    /// compute with.
    pub fn out_of_range(field: impl Into<String>) -> Self {
        Self::invalid_input(field, "is out of range")
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
