//! Input validation for attendance calculations.

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{AttendanceInput, AuditStep};

/// Checks that an attendance record describes a possible situation.
///
/// Fails with [`CalculatorError::InvalidInput`] when classes attended is
/// negative, total classes is not positive, or more classes were attended
/// than were held. On success the returned audit step records the accepted
/// figures.
///
/// # Examples
///
/// ```
/// use attendance_calculator::calculation::validate_input;
/// use attendance_calculator::models::{AttendanceInput, DesiredPercentage};
///
/// let ok = AttendanceInput::new(30, 25, DesiredPercentage::default());
/// assert!(validate_input(&ok, 1).is_ok());
///
/// let too_many = AttendanceInput::new(10, 11, DesiredPercentage::default());
/// assert!(validate_input(&too_many, 1).is_err());
/// ```
pub fn validate_input(
    input: &AttendanceInput,
    step_number: u32,
) -> CalculatorResult<AuditStep> {
    let AttendanceInput {
        total_classes: total,
        classes_attended: attended,
        ..
    } = *input;

    if attended < 0 {
        return Err(CalculatorError::invalid_input(format!(
            "classes attended ({}) cannot be negative",
            attended
        )));
    }
    if total <= 0 {
        return Err(CalculatorError::invalid_input(format!(
            "total classes ({}) must be greater than zero",
            total
        )));
    }
    if attended > total {
        return Err(CalculatorError::invalid_input(format!(
            "classes attended ({}) cannot exceed total classes ({})",
            attended, total
        )));
    }

    Ok(AuditStep {
        step_number,
        rule_id: "input_validation".to_string(),
        rule_name: "Input Validation".to_string(),
        input: serde_json::json!({
            "total_classes": total,
            "classes_attended": attended,
            "desired_percentage": input.desired_percentage.value()
        }),
        output: serde_json::json!({ "valid": true }),
        reasoning: format!(
            "0 <= {} attended <= {} held, {} threshold",
            attended, total, input.desired_percentage
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DesiredPercentage;

    fn input(total: i64, attended: i64) -> AttendanceInput {
        AttendanceInput::new(total, attended, DesiredPercentage::default())
    }

    fn expect_invalid(total: i64, attended: i64) -> String {
        match validate_input(&input(total, attended), 1) {
            Err(CalculatorError::InvalidInput { message }) => message,
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_input_produces_audit_step() {
        let step = validate_input(&input(30, 25), 1).unwrap();
        assert_eq!(step.step_number, 1);
        assert_eq!(step.rule_id, "input_validation");
        assert_eq!(step.input["total_classes"], 30);
        assert_eq!(step.input["classes_attended"], 25);
        assert_eq!(step.input["desired_percentage"], 75);
        assert_eq!(step.output["valid"], true);
    }

    #[test]
    fn test_negative_attended_is_rejected() {
        let message = expect_invalid(10, -1);
        assert!(message.contains("negative"));
    }

    #[test]
    fn test_zero_total_is_rejected() {
        let message = expect_invalid(0, 0);
        assert!(message.contains("greater than zero"));
    }

    #[test]
    fn test_negative_total_is_rejected() {
        expect_invalid(-5, 0);
    }

    #[test]
    fn test_attended_above_total_is_rejected() {
        let message = expect_invalid(10, 11);
        assert!(message.contains("(11)"));
        assert!(message.contains("(10)"));
    }

    #[test]
    fn test_zero_attended_is_valid() {
        assert!(validate_input(&input(10, 0), 1).is_ok());
    }

    #[test]
    fn test_full_attendance_is_valid() {
        assert!(validate_input(&input(10, 10), 1).is_ok());
    }
}
