//! Attendance calculation entry points.
//!
//! [`compute`] returns the bare [`AttendanceResult`]; [`calculate`] runs the
//! same rules and wraps the outcome in an audited [`CalculationRecord`].

use std::time::Instant;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use super::classes_can_miss::calculate_classes_can_miss;
use super::classes_needed::calculate_classes_needed;
use super::current_attendance::calculate_current_attendance;
use super::validation::validate_input;
use crate::error::CalculatorResult;
use crate::models::{AttendanceInput, AttendanceResult, AuditStep, AuditTrace, CalculationRecord};

/// Runs every rule in order, collecting audit steps.
fn evaluate(input: &AttendanceInput) -> CalculatorResult<(AttendanceResult, Vec<AuditStep>)> {
    let mut steps = Vec::with_capacity(3);
    let mut step_number: u32 = 1;

    steps.push(validate_input(input, step_number)?);
    step_number += 1;

    let attended = input.classes_attended;
    let total = input.total_classes;
    let desired = input.desired_percentage;

    let current = calculate_current_attendance(attended, total, desired, step_number)?;
    steps.push(current.audit_step);
    step_number += 1;

    let result = if current.meets_threshold {
        let can_miss = calculate_classes_can_miss(attended, total, desired, step_number)?;
        steps.push(can_miss.audit_step);
        AttendanceResult {
            current_attendance_percentage: current.percentage,
            classes_needed: 0,
            classes_can_miss: can_miss.classes_can_miss,
        }
    } else {
        let needed = calculate_classes_needed(attended, total, desired, step_number)?;
        steps.push(needed.audit_step);
        AttendanceResult {
            current_attendance_percentage: current.percentage,
            classes_needed: needed.classes_needed,
            classes_can_miss: 0,
        }
    };

    Ok((result, steps))
}

/// Computes the attendance result for a record.
///
/// # Errors
///
/// Returns [`CalculatorError::InvalidInput`](crate::error::CalculatorError::InvalidInput)
/// when classes attended is negative, total classes is not positive, or
/// classes attended exceeds total classes.
///
/// # Examples
///
/// ```
/// use attendance_calculator::calculation::compute;
/// use attendance_calculator::models::{AttendanceInput, DesiredPercentage};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let p = DesiredPercentage::new(75).unwrap();
///
/// let result = compute(&AttendanceInput::new(30, 25, p)).unwrap();
/// assert_eq!(result.current_attendance_percentage, Decimal::from_str("83.33").unwrap());
/// assert_eq!(result.classes_needed, 0);
/// assert_eq!(result.classes_can_miss, 3);
///
/// assert!(compute(&AttendanceInput::new(10, 11, p)).is_err());
/// ```
pub fn compute(input: &AttendanceInput) -> CalculatorResult<AttendanceResult> {
    evaluate(input).map(|(result, _)| result)
}

/// Computes the attendance result and records how it was reached.
///
/// # Examples
///
/// ```
/// use attendance_calculator::calculation::calculate;
/// use attendance_calculator::models::{AttendanceInput, DesiredPercentage};
///
/// let input = AttendanceInput::new(30, 15, DesiredPercentage::new(75).unwrap());
/// let record = calculate(&input).unwrap();
///
/// assert_eq!(record.result.classes_needed, 30);
/// assert_eq!(record.audit_trace.steps.len(), 3);
/// assert!(record.audit_trace.step("classes_needed").is_some());
/// ```
pub fn calculate(input: &AttendanceInput) -> CalculatorResult<CalculationRecord> {
    let start_time = Instant::now();
    let (result, steps) = evaluate(input)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        total_classes = input.total_classes,
        classes_attended = input.classes_attended,
        desired_percentage = input.desired_percentage.value(),
        current = %result.current_attendance_percentage,
        classes_needed = result.classes_needed,
        classes_can_miss = result.classes_can_miss,
        duration_us,
        "Attendance calculated"
    );

    Ok(CalculationRecord {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        input: *input,
        result,
        audit_trace: AuditTrace { steps, duration_us },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CalculatorError;
    use crate::models::{AttendanceOutlook, DesiredPercentage};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn input(total: i64, attended: i64, desired: u8) -> AttendanceInput {
        AttendanceInput::new(total, attended, DesiredPercentage::new(desired).unwrap())
    }

    #[test]
    fn test_above_threshold_reports_classes_can_miss() {
        let result = compute(&input(30, 25, 75)).unwrap();

        assert_eq!(result.current_attendance_percentage, dec("83.33"));
        assert_eq!(result.classes_needed, 0);
        assert_eq!(result.classes_can_miss, 3);
        // Still at or above 75% after missing them
        assert!(100 * 25 >= 75 * (30 + result.classes_can_miss as i64));
    }

    #[test]
    fn test_below_threshold_reports_classes_needed() {
        let result = compute(&input(30, 15, 75)).unwrap();

        assert_eq!(result.current_attendance_percentage, dec("50.00"));
        assert_eq!(result.classes_can_miss, 0);
        assert!(result.classes_needed > 0);
        let needed = result.classes_needed as i64;
        assert!(100 * (15 + needed) >= 75 * (30 + needed));
    }

    #[test]
    fn test_attended_above_total_is_rejected() {
        let result = compute(&input(10, 11, 75));
        assert!(matches!(result, Err(CalculatorError::InvalidInput { .. })));
    }

    #[test]
    fn test_zero_total_is_rejected() {
        let result = compute(&input(0, 0, 75));
        assert!(matches!(result, Err(CalculatorError::InvalidInput { .. })));
    }

    #[test]
    fn test_negative_attended_is_rejected() {
        let result = compute(&input(10, -2, 75));
        assert!(matches!(result, Err(CalculatorError::InvalidInput { .. })));
    }

    #[test]
    fn test_exact_threshold_gives_no_margin() {
        let result = compute(&input(4, 3, 75)).unwrap();

        assert_eq!(result.current_attendance_percentage, dec("75"));
        assert_eq!(result.outlook(), AttendanceOutlook::NoMargin);
    }

    #[test]
    fn test_zero_attendance() {
        let result = compute(&input(10, 0, 75)).unwrap();

        assert_eq!(result.current_attendance_percentage, Decimal::ZERO);
        // (750 - 0) / 25 = 30
        assert_eq!(result.classes_needed, 30);
    }

    #[test]
    fn test_every_standard_threshold() {
        let expected = [(75, 0, 3), (80, 0, 1), (85, 4, 0), (90, 20, 0), (95, 70, 0)];
        for (desired, needed, can_miss) in expected {
            let result = compute(&input(30, 25, desired)).unwrap();
            assert_eq!(result.classes_needed, needed, "needed at {}%", desired);
            assert_eq!(result.classes_can_miss, can_miss, "can miss at {}%", desired);
        }
    }

    #[test]
    fn test_record_contains_audit_trace_in_order() {
        let record = calculate(&input(30, 25, 75)).unwrap();

        let rule_ids: Vec<&str> = record
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rule_ids,
            vec!["input_validation", "current_attendance", "classes_can_miss"]
        );

        let numbers: Vec<u32> = record
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_record_metadata() {
        let record = calculate(&input(30, 15, 75)).unwrap();

        assert_eq!(record.engine_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(record.input, input(30, 15, 75));
        assert_eq!(record.result, compute(&input(30, 15, 75)).unwrap());
    }

    #[test]
    fn test_each_record_has_unique_id() {
        let first = calculate(&input(30, 25, 75)).unwrap();
        let second = calculate(&input(30, 25, 75)).unwrap();
        assert_ne!(first.calculation_id, second.calculation_id);
    }

    #[test]
    fn test_invalid_record_is_not_produced() {
        assert!(calculate(&input(10, 11, 75)).is_err());
    }
}
