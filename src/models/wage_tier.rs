//! Wage tier model.

use serde::{Deserialize, Serialize};

/// The daily wage tier an employee's allocated hours fall into.
///
/// The tier determines which branch of the daily wage policy applies:
/// overtime loading above eight hours, a flat allowance at four hours or
/// less, and plain hourly pay in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageTier {
    /// More than eight allocated hours; the excess is paid at 1.2x.
    Overtime,
    /// Between four and eight allocated hours; plain hourly pay.
    Standard,
    /// Four allocated hours or less; a flat shift allowance is added.
    ShortShift,
}
