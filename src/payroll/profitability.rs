//! Employee profitability calculations.
//!
//! This module derives per-employee profitability from revenue figures and
//! the annual wage calculation, for a single employee and for batches of
//! parallel input sequences.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

use super::annual_wage::compute_annual_employee_wage;

/// The number of months the annual wage is spread across.
const MONTHS_PER_YEAR: i64 = 12;

/// The result of a monthly profitability calculation for one employee.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyProfitabilityResult {
    /// The employee's annual wage.
    pub annual_wage: Decimal,
    /// The annual wage spread evenly over twelve months.
    pub monthly_wage: Decimal,
    /// Monthly income generated minus the monthly wage. Negative when the
    /// employee costs more than they bring in.
    pub profitability: Decimal,
}

/// Computes one employee's monthly profitability.
///
/// The wage side delegates to
/// [`compute_annual_employee_wage`](super::compute_annual_employee_wage),
/// whose validation errors propagate unchanged. The monthly wage is the
/// annual wage divided by twelve; profitability is the monthly income
/// generated minus that wage.
///
/// The income figure is unconstrained — negative income (an employee who
/// loses the company money before wages are even counted) is accepted.
///
/// # Arguments
///
/// * `monthly_income_generated` - Revenue attributed to the employee per month
/// * `hourly_rate` - The employee's pay per hour; must not be negative
/// * `allocated_hours` - Hours allocated per day; must lie in `[0, 24]`
///
/// # Examples
///
/// ```
/// use calc_engine::payroll::compute_monthly_employee_profitability;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = compute_monthly_employee_profitability(
///     Decimal::from(2000),
///     Decimal::from_str("7.25").unwrap(),
///     Decimal::from_str("9.5").unwrap(),
/// )
/// .unwrap();
/// assert_eq!(result.profitability.round_dp(2), Decimal::from_str("438.92").unwrap());
/// ```
pub fn compute_monthly_employee_profitability(
    monthly_income_generated: Decimal,
    hourly_rate: Decimal,
    allocated_hours: Decimal,
) -> EngineResult<MonthlyProfitabilityResult> {
    let annual = compute_annual_employee_wage(hourly_rate, allocated_hours)?;
    let monthly_wage = annual.annual_wage / Decimal::from(MONTHS_PER_YEAR);

    Ok(MonthlyProfitabilityResult {
        annual_wage: annual.annual_wage,
        monthly_wage,
        profitability: monthly_income_generated - monthly_wage,
    })
}

/// Monthly and annual profitability sequences for a batch of employees,
/// index-aligned with the batch inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitabilityBatch {
    /// Monthly profitability per employee, in input order.
    pub monthly: Vec<Decimal>,
    /// Annual profitability per employee, in input order.
    pub annual: Vec<Decimal>,
}

/// Computes monthly and annual profitability for a batch of employees.
///
/// The three slices are parallel sequences: index `i` of each describes the
/// same employee. All three must have identical length or the call fails
/// with `LengthMismatch` before any record is processed.
///
/// Records are processed strictly in input order and the batch is fail-fast:
/// the first invalid record aborts the whole call with its validation error
/// and no partial output.
///
/// The annual figure is the monthly profitability scaled by twelve — it is
/// not re-derived from annualized income against the annual wage, so any
/// rounding behavior of the monthly figure carries forward unchanged.
///
/// # Arguments
///
/// * `monthly_income_generated` - Revenue per employee per month
/// * `hourly_rates` - Pay per hour per employee
/// * `allocated_hours` - Hours allocated per day per employee
///
/// # Examples
///
/// ```
/// use calc_engine::payroll::compute_employee_profitability;
/// use rust_decimal::Decimal;
///
/// let zero = [Decimal::ZERO];
/// let batch = compute_employee_profitability(&zero, &zero, &zero).unwrap();
/// assert_eq!(batch.monthly.len(), 1);
/// assert_eq!(batch.annual[0], batch.monthly[0] * Decimal::from(12));
/// ```
pub fn compute_employee_profitability(
    monthly_income_generated: &[Decimal],
    hourly_rates: &[Decimal],
    allocated_hours: &[Decimal],
) -> EngineResult<ProfitabilityBatch> {
    if monthly_income_generated.len() != hourly_rates.len()
        || hourly_rates.len() != allocated_hours.len()
    {
        return Err(EngineError::LengthMismatch {
            income: monthly_income_generated.len(),
            rates: hourly_rates.len(),
            hours: allocated_hours.len(),
        });
    }

    let mut monthly = Vec::with_capacity(monthly_income_generated.len());
    for ((&income, &rate), &hours) in monthly_income_generated
        .iter()
        .zip(hourly_rates)
        .zip(allocated_hours)
    {
        let result = compute_monthly_employee_profitability(income, rate, hours)?;
        monthly.push(result.profitability);
    }

    let annual = monthly
        .iter()
        .map(|&m| m * Decimal::from(MONTHS_PER_YEAR))
        .collect();

    Ok(ProfitabilityBatch { monthly, annual })
}
