//! Payroll calculations for the Cipher and Payroll Calculation Engine.
//!
//! This module contains the wage and profitability calculations: the
//! three-tier daily wage policy and its annualization, single-employee
//! monthly profitability, and the batch profitability calculation over
//! parallel input sequences.

mod annual_wage;
mod profitability;

pub use annual_wage::{
    AnnualWageResult, biweekly_bonus, compute_annual_employee_wage, overtime_multiplier,
    overtime_threshold_hours, short_shift_allowance, short_shift_threshold_hours,
};
pub use profitability::{
    MonthlyProfitabilityResult, ProfitabilityBatch, compute_employee_profitability,
    compute_monthly_employee_profitability,
};
