//! Attendance projections after a suggested action.

use rust_decimal::Decimal;

use super::current_attendance::round_percentage;
use crate::error::{CalculatorError, CalculatorResult};

/// Returns the attendance percentage for a hypothetical record, rounded to
/// two decimal places.
///
/// Used to report where a student ends up after attending the classes they
/// need, or after missing the classes they can afford to miss. Returns
/// `None` when `total` is not positive or the figures exceed decimal range.
///
/// # Examples
///
/// ```
/// use attendance_calculator::calculation::projected_attendance;
/// use rust_decimal::Decimal;
///
/// // 15 of 30 attended, then 30 more attended in a row
/// assert_eq!(projected_attendance(15 + 30, 30 + 30), Some(Decimal::from(75)));
/// assert_eq!(projected_attendance(1, 0), None);
/// ```
pub fn projected_attendance(attended: i128, total: i128) -> Option<Decimal> {
    if total <= 0 {
        return None;
    }
    let attended = Decimal::try_from_i128_with_scale(attended, 0).ok()?;
    let total = Decimal::try_from_i128_with_scale(total, 0).ok()?;
    attended
        .checked_mul(Decimal::ONE_HUNDRED)?
        .checked_div(total)
        .map(round_percentage)
}

/// Converts a non-negative class count into `u64`, clamping negatives to 0.
pub(crate) fn class_count(value: i128, rule: &str) -> CalculatorResult<u64> {
    u64::try_from(value.max(0)).map_err(|_| CalculatorError::CalculationError {
        message: format!("{} count {} does not fit in 64 bits", rule, value),
    })
}
