//! HTTP API module for the Cipher and Payroll Calculation Engine.
//!
//! This module provides the REST endpoints for ciphering text and running
//! the payroll calculations.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{AnnualWageRequest, CipherRequest, ProfitabilityRequest};
pub use response::{AnnualWageResponse, ApiError, CipherResponse, ProfitabilityResponse};
