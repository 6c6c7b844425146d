//! Core data models for the Cipher and Payroll Calculation Engine.
//!
//! This module contains the domain types shared between the calculation
//! functions and the HTTP API.

mod cipher_key;
mod wage_tier;

pub use cipher_key::CipherKey;
pub use wage_tier::WageTier;
