//! Response types for the Cipher and Payroll Calculation Engine API.
//!
//! This module defines the success and error response structures for the
//! HTTP API, and the mapping from engine errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::WageTier;

/// Response body for the `POST /cipher` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CipherResponse {
    /// The ciphered text.
    pub output: String,
}

/// Response body for the `POST /wage` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualWageResponse {
    /// The wage for a single allocated day.
    pub daily_wage: Decimal,
    /// The wage for a five-day work week.
    pub weekly_wage: Decimal,
    /// The annual wage, biweekly bonuses included.
    pub annual_wage: Decimal,
    /// The daily wage tier that applied.
    pub tier: WageTier,
}

/// Response body for the `POST /profitability` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitabilityResponse {
    /// Monthly profitability per employee, in input order.
    pub monthly: Vec<Decimal>,
    /// Annual profitability per employee, in input order.
    pub annual: Vec<Decimal>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        // Every engine error is a caller-input problem, so they all map to 400.
        let code = match &error {
            EngineError::ShiftOutOfRange { .. } => "SHIFT_OUT_OF_RANGE",
            EngineError::NegativeHourlyRate { .. } => "NEGATIVE_HOURLY_RATE",
            EngineError::AllocatedHoursOutOfRange { .. } => "ALLOCATED_HOURS_OUT_OF_RANGE",
            EngineError::LengthMismatch { .. } => "LENGTH_MISMATCH",
        };

        ApiErrorResponse {
            status: StatusCode::BAD_REQUEST,
            error: ApiError::new(code, error.to_string()),
        }
    }
}
