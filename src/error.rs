//! Error types for the shift engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during shift validation,
//! lifecycle operations, and transaction attribution.

use thiserror::Error;

/// The main error type for the shift engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use shift_engine::error::EngineError;
///
/// let error = EngineError::InvalidClockTime {
///     value: "25:00".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid clock time '25:00': expected \"HH:mm\" with hour 00-23 and minute 00-59"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A clock-time string could not be parsed as "HH:mm".
    #[error("Invalid clock time '{value}': expected \"HH:mm\" with hour 00-23 and minute 00-59")]
    InvalidClockTime {
        /// The string that failed to parse.
        value: String,
    },

    /// A shift interval has zero length (start equals end).
    #[error("Invalid shift times: start and end cannot be equal")]
    DegenerateInterval,

    /// A candidate interval conflicts with an existing active shift.
    #[error("Shift times overlap with {name} ({start}\u{2013}{end})")]
    OverlappingShift {
        /// The name of the conflicting shift.
        name: String,
        /// The conflicting shift's start time, formatted "HH:mm".
        start: String,
        /// The conflicting shift's end time, formatted "HH:mm".
        end: String,
    },

    /// No shift exists with the requested id.
    #[error("Shift not found: {shift_id}")]
    ShiftNotFound {
        /// The id that was looked up.
        shift_id: String,
    },

    /// The persistence collaborator failed.
    #[error("Storage error: {message}")]
    StorageError {
        /// A description of the storage failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
