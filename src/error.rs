//! Error types for the Cipher and Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all validation failures that can occur during calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the calculation engine.
///
/// All fallible operations in the engine return this error type. Every
/// variant represents a caller-input problem detected by eager validation
/// before any computation; none are transient, so there is no retry path.
///
/// # Example
///
/// ```
/// use calc_engine::error::EngineError;
///
/// let error = EngineError::ShiftOutOfRange { shift: 26 };
/// assert_eq!(
///     error.to_string(),
///     "Shift amount must be in the range -25 to 25, got 26"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The Caesar rotation amount was outside the permitted range.
    #[error("Shift amount must be in the range -25 to 25, got {shift}")]
    ShiftOutOfRange {
        /// The rejected shift amount.
        shift: i32,
    },

    /// An hourly rate was negative.
    #[error("Hourly rate must not be negative, got {rate}")]
    NegativeHourlyRate {
        /// The rejected hourly rate.
        rate: Decimal,
    },

    /// An allocated-hours figure did not fit within a 24-hour day.
    #[error("Allocated hours must be between 0 and 24, got {hours}")]
    AllocatedHoursOutOfRange {
        /// The rejected allocated hours.
        hours: Decimal,
    },

    /// Batch input sequences differed in length.
    #[error(
        "Batch input lengths do not match: {income} income, {rates} rate, {hours} hour entries"
    )]
    LengthMismatch {
        /// Number of monthly income entries.
        income: usize,
        /// Number of hourly rate entries.
        rates: usize,
        /// Number of allocated hour entries.
        hours: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
