//! HTTP request handlers for the Cipher and Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::cipher::cipher_text;
use crate::payroll::{compute_annual_employee_wage, compute_employee_profitability};

use super::request::{AnnualWageRequest, CipherRequest, ProfitabilityRequest};
use super::response::{
    AnnualWageResponse, ApiError, ApiErrorResponse, CipherResponse, ProfitabilityResponse,
};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/cipher", post(cipher_handler))
        .route("/wage", post(wage_handler))
        .route("/profitability", post(profitability_handler))
}

/// Converts a JSON extraction rejection into an API error body.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for the POST /cipher endpoint.
///
/// Accepts text and a cipher key and returns the ciphered text.
async fn cipher_handler(
    payload: Result<Json<CipherRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing cipher request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match cipher_text(&request.text, &request.key) {
        Ok(output) => {
            // The per-transformation diagnostic record lives here, outside
            // the pure transform.
            debug!(
                correlation_id = %correlation_id,
                input = %request.text,
                key = ?request.key,
                output = %output,
                "Ciphered text"
            );
            (StatusCode::OK, Json(CipherResponse { output })).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Cipher request rejected");
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}

/// Handler for the POST /wage endpoint.
///
/// Accepts an hourly rate and daily allocated hours and returns the daily,
/// weekly, and annual wage figures with the applied tier.
async fn wage_handler(
    payload: Result<Json<AnnualWageRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing wage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match compute_annual_employee_wage(request.hourly_rate, request.allocated_hours) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                annual_wage = %result.annual_wage,
                "Wage calculated"
            );
            let response = AnnualWageResponse {
                daily_wage: result.daily_wage,
                weekly_wage: result.weekly_wage,
                annual_wage: result.annual_wage,
                tier: result.tier,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Wage request rejected");
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}

/// Handler for the POST /profitability endpoint.
///
/// Accepts parallel sequences of income, rate, and hour figures and returns
/// index-aligned monthly and annual profitability sequences.
async fn profitability_handler(
    payload: Result<Json<ProfitabilityRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing profitability request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (StatusCode::BAD_REQUEST, Json(error)).into_response();
        }
    };

    match compute_employee_profitability(
        &request.monthly_income_generated,
        &request.hourly_rates,
        &request.allocated_hours,
    ) {
        Ok(batch) => {
            info!(
                correlation_id = %correlation_id,
                employees = batch.monthly.len(),
                "Profitability calculated"
            );
            let response = ProfitabilityResponse {
                monthly: batch.monthly,
                annual: batch.annual,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Profitability request rejected");
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}
