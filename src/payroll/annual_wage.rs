//! Annual wage calculation.
//!
//! This module computes an employee's annual wage from their hourly rate and
//! daily allocated hours, applying a three-tier daily wage policy before
//! scaling to the year.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::WageTier;

/// Allocated hours above this threshold are paid at the overtime multiplier.
pub fn overtime_threshold_hours() -> Decimal {
    Decimal::from(8)
}

/// Allocated hours at or below this threshold attract the short-shift allowance.
pub fn short_shift_threshold_hours() -> Decimal {
    Decimal::from(4)
}

/// Returns the overtime multiplier applied to hours beyond the threshold.
///
/// The multiplier is 1.2 (20% loading on overtime hours).
pub fn overtime_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

/// Returns the flat daily allowance added to short shifts.
///
/// The allowance is $5.00 per day for shifts of four hours or less.
pub fn short_shift_allowance() -> Decimal {
    Decimal::new(500, 2)
}

/// Returns the fixed bonus paid once per two-week pay period.
///
/// The bonus is $10.00 per biweekly period, 26 periods per year.
pub fn biweekly_bonus() -> Decimal {
    Decimal::from(10)
}

/// The number of paid work days in a week.
const WORK_DAYS_PER_WEEK: i64 = 5;

/// The number of biweekly pay periods in a year.
const PAY_PERIODS_PER_YEAR: i64 = 26;

/// The result of an annual wage calculation, including the intermediate
/// daily and weekly figures and the tier that applied.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnualWageResult {
    /// The wage for a single allocated day.
    pub daily_wage: Decimal,
    /// The wage for a five-day work week.
    pub weekly_wage: Decimal,
    /// The annual wage across 26 biweekly pay periods, bonuses included.
    pub annual_wage: Decimal,
    /// The daily wage tier the allocated hours fell into.
    pub tier: WageTier,
}

/// Computes an employee's annual wage from hourly rate and daily allocated hours.
///
/// The daily wage follows a three-tier policy:
///
/// 1. More than 8 allocated hours: the first 8 are paid plain and the excess
///    at the 1.2x overtime multiplier, `rate * (8 + (hours - 8) * 1.2)`.
/// 2. 4 allocated hours or less: plain pay plus the $5.00 short-shift
///    allowance, `rate * hours + 5.00`.
/// 3. Otherwise: plain pay, `rate * hours`.
///
/// The weekly wage is five daily wages. The annual wage is computed per
/// biweekly pay period — two weekly wages plus the $10.00 biweekly bonus —
/// over 26 periods. Monthly figures are deliberately not produced here: four
/// weeks is not a month, so monthly amounts are always derived from the
/// annual figure by callers.
///
/// # Arguments
///
/// * `hourly_rate` - The employee's pay per hour; must not be negative
/// * `allocated_hours` - Hours allocated per day; must lie in `[0, 24]`
///
/// # Returns
///
/// Returns an [`AnnualWageResult`] with the daily, weekly, and annual wages
/// and the applied tier, or:
/// - `NegativeHourlyRate` if `hourly_rate < 0`
/// - `AllocatedHoursOutOfRange` if `allocated_hours` is negative or exceeds 24
///
/// # Examples
///
/// ```
/// use calc_engine::payroll::compute_annual_employee_wage;
/// use rust_decimal::Decimal;
///
/// let result = compute_annual_employee_wage(Decimal::ZERO, Decimal::from(4)).unwrap();
/// assert_eq!(result.annual_wage, Decimal::from(1560));
/// ```
pub fn compute_annual_employee_wage(
    hourly_rate: Decimal,
    allocated_hours: Decimal,
) -> EngineResult<AnnualWageResult> {
    if hourly_rate < Decimal::ZERO {
        return Err(EngineError::NegativeHourlyRate { rate: hourly_rate });
    }
    if allocated_hours < Decimal::ZERO || allocated_hours > Decimal::from(24) {
        return Err(EngineError::AllocatedHoursOutOfRange {
            hours: allocated_hours,
        });
    }

    let (daily_wage, tier) = if allocated_hours > overtime_threshold_hours() {
        let overtime_hours = allocated_hours - overtime_threshold_hours();
        let paid_hours = overtime_threshold_hours() + overtime_hours * overtime_multiplier();
        (hourly_rate * paid_hours, WageTier::Overtime)
    } else if allocated_hours <= short_shift_threshold_hours() {
        (
            hourly_rate * allocated_hours + short_shift_allowance(),
            WageTier::ShortShift,
        )
    } else {
        (hourly_rate * allocated_hours, WageTier::Standard)
    };

    let weekly_wage = daily_wage * Decimal::from(WORK_DAYS_PER_WEEK);
    let annual_wage =
        (weekly_wage * Decimal::from(2) + biweekly_bonus()) * Decimal::from(PAY_PERIODS_PER_YEAR);

    Ok(AnnualWageResult {
        daily_wage,
        weekly_wage,
        annual_wage,
        tier,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    /// AW-001: zero rate on a short shift still earns the allowance and bonus
    #[test]
    fn test_zero_rate_short_shift() {
        let result = compute_annual_employee_wage(dec("0.00"), dec("4.0")).unwrap();

        assert_eq!(result.daily_wage, dec("5.00"));
        assert_eq!(result.weekly_wage, dec("25.00"));
        assert_eq!(result.annual_wage, dec("1560.00"));
        assert_eq!(result.tier, WageTier::ShortShift);
    }

    /// AW-002: overtime hours are paid at 1.2x
    #[test]
    fn test_overtime_tier() {
        let result = compute_annual_employee_wage(dec("15.00"), dec("9.0")).unwrap();

        assert_eq!(result.daily_wage, dec("138.00"));
        assert_eq!(result.weekly_wage, dec("690.00"));
        assert_eq!(result.annual_wage, dec("36140.00"));
        assert_eq!(result.tier, WageTier::Overtime);
    }

    /// AW-003: standard tier has no bonus or loading
    #[test]
    fn test_standard_tier() {
        let result = compute_annual_employee_wage(dec("15.25"), dec("7.0")).unwrap();

        assert_eq!(result.daily_wage, dec("106.75"));
        assert_eq!(result.annual_wage, dec("28015.00"));
        assert_eq!(result.tier, WageTier::Standard);
    }

    /// AW-004: the 8-hour boundary is standard, not overtime
    #[test]
    fn test_eight_hours_is_standard() {
        let result = compute_annual_employee_wage(dec("7.25"), dec("8.0")).unwrap();

        assert_eq!(result.daily_wage, dec("58.00"));
        assert_eq!(result.annual_wage, dec("15340.00"));
        assert_eq!(result.tier, WageTier::Standard);
    }

    /// AW-005: the 4-hour boundary is a short shift
    #[test]
    fn test_four_hours_is_short_shift() {
        let result = compute_annual_employee_wage(dec("140.00"), dec("4.0")).unwrap();

        assert_eq!(result.daily_wage, dec("565.00"));
        assert_eq!(result.annual_wage, dec("147160.00"));
        assert_eq!(result.tier, WageTier::ShortShift);
    }

    /// AW-006: fractional overtime hours
    #[test]
    fn test_fractional_overtime_hours() {
        let result = compute_annual_employee_wage(dec("7.25"), dec("9.5")).unwrap();

        assert_eq!(result.daily_wage, dec("71.050"));
        assert_eq!(result.annual_wage, dec("18733.000"));
        assert_eq!(result.tier, WageTier::Overtime);
    }

    /// AW-007: a long overtime day
    #[test]
    fn test_long_overtime_day() {
        let result = compute_annual_employee_wage(dec("140.00"), dec("12.0")).unwrap();

        assert_eq!(result.daily_wage, dec("1792.00"));
        assert_eq!(result.annual_wage, dec("466180.00"));
    }

    /// AW-008: negative rate is rejected
    #[test]
    fn test_negative_rate_is_rejected() {
        let result = compute_annual_employee_wage(dec("-1.00"), dec("0.0"));

        match result.unwrap_err() {
            EngineError::NegativeHourlyRate { rate } => assert_eq!(rate, dec("-1.00")),
            other => panic!("Expected NegativeHourlyRate, got {:?}", other),
        }
    }

    /// AW-009: hours above 24 are rejected
    #[test]
    fn test_hours_above_24_are_rejected() {
        let result = compute_annual_employee_wage(dec("0.00"), dec("25.0"));

        match result.unwrap_err() {
            EngineError::AllocatedHoursOutOfRange { hours } => assert_eq!(hours, dec("25.0")),
            other => panic!("Expected AllocatedHoursOutOfRange, got {:?}", other),
        }
    }

    /// AW-010: negative hours are rejected
    #[test]
    fn test_negative_hours_are_rejected() {
        let result = compute_annual_employee_wage(dec("0.00"), dec("-5.0"));

        match result.unwrap_err() {
            EngineError::AllocatedHoursOutOfRange { hours } => assert_eq!(hours, dec("-5.0")),
            other => panic!("Expected AllocatedHoursOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_hours_zero_rate_is_valid() {
        // A zero-hour allocation is still a short shift: the allowance and
        // biweekly bonus alone produce the annual figure.
        let result = compute_annual_employee_wage(dec("0.00"), dec("0.0")).unwrap();

        assert_eq!(result.annual_wage, dec("1560.00"));
        assert_eq!(result.tier, WageTier::ShortShift);
    }

    #[test]
    fn test_full_24_hour_day_is_valid() {
        let result = compute_annual_employee_wage(dec("10.00"), dec("24.0")).unwrap();

        // 8 plain + 16 overtime hours at 1.2x = 27.2 paid hours.
        assert_eq!(result.daily_wage, dec("272.00"));
        assert_eq!(result.tier, WageTier::Overtime);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let first = compute_annual_employee_wage(dec("15.00"), dec("9.0")).unwrap();
        let second = compute_annual_employee_wage(dec("15.00"), dec("9.0")).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_overtime_multiplier_is_exactly_1_2() {
        assert_eq!(overtime_multiplier(), dec("1.2"));
    }

    #[test]
    fn test_short_shift_allowance_is_exactly_5() {
        assert_eq!(short_shift_allowance(), dec("5.00"));
    }

    #[test]
    fn test_biweekly_bonus_is_exactly_10() {
        assert_eq!(biweekly_bonus(), dec("10"));
    }
}
