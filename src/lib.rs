//! Cipher and Payroll Calculation Engine
//!
//! This crate provides two independent calculators: a single-character
//! substitution cipher (Caesar-style rotation or explicit replacement maps)
//! and a payroll calculator that derives annual wages and per-employee
//! profitability from hourly rates, daily hour allocations, and revenue.

#![warn(missing_docs)]

pub mod api;
pub mod cipher;
pub mod error;
pub mod models;
pub mod payroll;
