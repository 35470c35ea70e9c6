//! Error types for the Attendance Calculator.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating attendance.

use thiserror::Error;

/// The main error type for the Attendance Calculator.
///
/// All fallible operations in the crate return this error type. Only
/// [`CalculatorError::InvalidInput`] is produced by the calculation itself;
/// the remaining variants come from configuration and threshold selection.
///
/// # Example
///
/// ```
/// use attendance_calculator::error::CalculatorError;
///
/// let error = CalculatorError::InvalidInput {
///     message: "total classes must be greater than zero".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid input: total classes must be greater than zero"
/// );
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// The attendance figures failed validation.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// A description of what made the input invalid.
        message: String,
    },

    /// The requested threshold is not one of the selectable choices.
    #[error("Unsupported attendance threshold: {percentage}%")]
    UnsupportedThreshold {
        /// The percentage that was requested.
        percentage: u8,
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

    /// Configuration parsed but holds values the calculator cannot use.
    #[error("Invalid configuration '{path}': {message}")]
    InvalidConfig {
        /// The path to the offending file.
        path: String,
        /// A description of the problem.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl CalculatorError {
    /// Shorthand for building an [`CalculatorError::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Returns true for errors caused by the values a user entered.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::UnsupportedThreshold { .. }
        )
    }
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
