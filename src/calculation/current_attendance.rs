//! Current attendance percentage calculation.
//!
//! This module computes the share of classes attended so far and decides
//! whether the desired threshold is currently met.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{AuditStep, DesiredPercentage};

/// Number of decimal places shown for attendance percentages.
pub const PERCENTAGE_DECIMAL_PLACES: u32 = 2;

/// The result of calculating current attendance, including the audit step.
#[derive(Debug, Clone)]
pub struct CurrentAttendanceResult {
    /// Attendance in percent, rounded for display.
    pub percentage: Decimal,
    /// Whether the unrounded attendance is at or above the threshold.
    pub meets_threshold: bool,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Rounds a percentage half away from zero to two decimal places.
///
/// The result always carries exactly two decimal places, so `50` becomes `50.00`.
pub fn round_percentage(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(
        PERCENTAGE_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(PERCENTAGE_DECIMAL_PLACES);
    rounded
}

/// Returns `100 * attended / total`, rounded to two decimal places.
///
/// # Examples
///
/// ```
/// use attendance_calculator::calculation::current_attendance_percentage;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let percentage = current_attendance_percentage(25, 30).unwrap();
/// assert_eq!(percentage, Decimal::from_str("83.33").unwrap());
/// ```
pub fn current_attendance_percentage(attended: i64, total: i64) -> CalculatorResult<Decimal> {
    let raw = (Decimal::from(attended) * Decimal::ONE_HUNDRED)
        .checked_div(Decimal::from(total))
        .ok_or_else(|| {
            CalculatorError::invalid_input(format!(
                "total classes ({}) must be greater than zero",
                total
            ))
        })?;
    Ok(round_percentage(raw))
}

/// Returns true when `attended / total >= desired / 100`.
///
/// The comparison is done on exact integers, so rounding for display never
/// changes which branch is taken.
pub fn meets_threshold(attended: i64, total: i64, desired: DesiredPercentage) -> bool {
    100 * i128::from(attended) >= i128::from(desired.value()) * i128::from(total)
}

/// Calculates current attendance and compares it with the threshold.
///
/// # Arguments
///
/// * `attended` - Classes attended so far (validated)
/// * `total` - Classes held so far (validated, positive)
/// * `desired` - The threshold to compare against
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_current_attendance(
    attended: i64,
    total: i64,
    desired: DesiredPercentage,
    step_number: u32,
) -> CalculatorResult<CurrentAttendanceResult> {
    let percentage = current_attendance_percentage(attended, total)?;
    let meets = meets_threshold(attended, total, desired);

    let comparison = if meets { ">=" } else { "<" };
    let audit_step = AuditStep {
        step_number,
        rule_id: "current_attendance".to_string(),
        rule_name: "Current Attendance".to_string(),
        input: serde_json::json!({
            "classes_attended": attended,
            "total_classes": total,
            "desired_percentage": desired.value()
        }),
        output: serde_json::json!({
            "current_attendance_percentage": percentage.to_string(),
            "meets_threshold": meets
        }),
        reasoning: format!(
            "100 x {} / {} = {}% {} {}",
            attended,
            total,
            percentage.normalize(),
            comparison,
            desired
        ),
    };

    Ok(CurrentAttendanceResult {
        percentage,
        meets_threshold: meets,
        audit_step,
    })
}
