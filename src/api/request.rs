//! Request types for the Cipher and Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the cipher and
//! payroll endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::CipherKey;

/// Request body for the `POST /cipher` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherRequest {
    /// The text to cipher.
    pub text: String,
    /// The cipher key: a bare integer for Caesar rotation, or an object
    /// mapping single characters to replacements.
    pub key: CipherKey,
}

/// Request body for the `POST /wage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualWageRequest {
    /// The employee's pay per hour.
    pub hourly_rate: Decimal,
    /// Hours allocated to the employee per day.
    pub allocated_hours: Decimal,
}

/// Request body for the `POST /profitability` endpoint.
///
/// The three arrays are parallel sequences: index `i` of each describes the
/// same employee, and all three must have the same length.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitabilityRequest {
    /// Monthly income generated per employee.
    pub monthly_income_generated: Vec<Decimal>,
    /// Hourly rate per employee.
    pub hourly_rates: Vec<Decimal>,
    /// Allocated hours per day per employee.
    pub allocated_hours: Vec<Decimal>,
}
