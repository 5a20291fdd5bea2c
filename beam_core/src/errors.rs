//! # Error Types
//!
//! Structured error types for beam_core. Every numeric failure is reported
//! as a typed error with a human-readable cause; nothing is silently turned
//! into zero or NaN.
//!
//! Non-fatal findings (loads outside the span, unordered load positions) are
//! not errors. They are reported as [`AnalysisWarning`]s alongside a result.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span_in: f64) -> CalcResult<()> {
//!     if !span_in.is_finite() || span_in <= 0.0 {
//!         return Err(CalcError::degenerate_span(span_in));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_span(0.0).unwrap_err().error_code(), "DEGENERATE_SPAN");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Span is zero, negative or not a number. Grid and reactions are undefined.
    #[error("Degenerate span: L = {span} - span must be a finite positive length")]
    DegenerateSpan { span: f64 },

    /// E, I or their product is not strictly positive
    #[error("Non-positive flexural rigidity: {field} = {value} - must be positive")]
    NonPositiveRigidity { field: String, value: f64 },

    /// An input value is invalid (non-finite, zero resolution, length mismatch)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A stage produced NaN or infinity
    #[error("Non-finite result in {stage}: {reason}")]
    NonFiniteResult { stage: String, reason: String },

    /// File I/O error while reading an analysis request
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create a DegenerateSpan error
    pub fn degenerate_span(span: f64) -> Self {
        CalcError::DegenerateSpan { span }
    }

    /// Create a NonPositiveRigidity error
    pub fn non_positive_rigidity(field: impl Into<String>, value: f64) -> Self {
        CalcError::NonPositiveRigidity {
            field: field.into(),
            value,
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a NonFiniteResult error
    pub fn non_finite(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::NonFiniteResult {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DegenerateSpan { .. } => "DEGENERATE_SPAN",
            CalcError::NonPositiveRigidity { .. } => "NON_POSITIVE_RIGIDITY",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::NonFiniteResult { .. } => "NON_FINITE_RESULT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

/// Non-fatal finding about an otherwise computable configuration.
///
/// The analysis still runs; the numbers may just not mean what the caller
/// expects physically.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum AnalysisWarning {
    /// A load position or the evaluation point lies outside [0, L]
    OutOfRangeParameter { field: String, value: f64, span: f64 },

    /// Load positions are not in a ≤ b ≤ c order.
    ///
    /// The internal force evaluator compares against a, b, c in that literal
    /// order, so the diagrams are not a correct superposition of the loads.
    UnorderedLoadPositions { a: f64, b: f64, c: f64 },
}

impl AnalysisWarning {
    /// Get a short warning code for programmatic handling
    pub fn warning_code(&self) -> &'static str {
        match self {
            AnalysisWarning::OutOfRangeParameter { .. } => "OUT_OF_RANGE_PARAMETER",
            AnalysisWarning::UnorderedLoadPositions { .. } => "UNORDERED_LOAD_POSITIONS",
        }
    }
}

impl std::fmt::Display for AnalysisWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisWarning::OutOfRangeParameter { field, value, span } => write!(
                f,
                "'{}' = {} lies outside the span [0, {}]; result is not physically meaningful",
                field, value, span
            ),
            AnalysisWarning::UnorderedLoadPositions { a, b, c } => write!(
                f,
                "load positions a = {}, b = {}, c = {} are not ordered a <= b <= c; \
                 shear and moment follow the literal a, b, c segment order",
                a, b, c
            ),
        }
    }
}
