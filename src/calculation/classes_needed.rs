//! Classes needed calculation.
//!
//! This module determines how many consecutive classes a student below the
//! threshold must attend before their attendance reaches it.

use rust_decimal::Decimal;

use super::projection::{class_count, projected_attendance};
use crate::error::CalculatorResult;
use crate::models::{AuditStep, DesiredPercentage};

/// The result of calculating classes needed, including the audit step.
#[derive(Debug, Clone)]
pub struct ClassesNeededResult {
    /// Minimum additional classes to attend.
    pub classes_needed: u64,
    /// Attendance after attending that many classes.
    pub projected_percentage: Option<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the minimum `n` such that `(attended + n) / (total + n) >= p / 100`.
///
/// Computed as `ceil((p * total - 100 * attended) / (100 - p))`, clamped to
/// zero when the threshold is already met.
///
/// # Examples
///
/// ```
/// use attendance_calculator::calculation::classes_needed;
/// use attendance_calculator::models::DesiredPercentage;
///
/// let p = DesiredPercentage::new(75).unwrap();
/// assert_eq!(classes_needed(15, 30, p).unwrap(), 30);
/// assert_eq!(classes_needed(25, 30, p).unwrap(), 0);
/// ```
pub fn classes_needed(
    attended: i64,
    total: i64,
    desired: DesiredPercentage,
) -> CalculatorResult<u64> {
    let p = i128::from(desired.value());
    let shortfall = p * i128::from(total) - 100 * i128::from(attended);
    if shortfall <= 0 {
        return Ok(0);
    }
    let divisor = 100 - p;
    class_count((shortfall + divisor - 1) / divisor, "classes needed")
}

/// Calculates classes needed and records the audit step.
///
/// # Arguments
///
/// * `attended` - Classes attended so far (validated)
/// * `total` - Classes held so far (validated, positive)
/// * `desired` - The threshold to reach
/// * `step_number` - The step number for audit trail sequencing
pub fn calculate_classes_needed(
    attended: i64,
    total: i64,
    desired: DesiredPercentage,
    step_number: u32,
) -> CalculatorResult<ClassesNeededResult> {
    let needed = classes_needed(attended, total, desired)?;
    let projected_percentage = projected_attendance(
        i128::from(attended) + i128::from(needed),
        i128::from(total) + i128::from(needed),
    );

    let projected_str = projected_percentage
        .map(|p| format!("{}%", p.normalize()))
        .unwrap_or_else(|| "n/a".to_string());

    let audit_step = AuditStep {
        step_number,
        rule_id: "classes_needed".to_string(),
        rule_name: "Classes Needed".to_string(),
        input: serde_json::json!({
            "classes_attended": attended,
            "total_classes": total,
            "desired_percentage": desired.value()
        }),
        output: serde_json::json!({
            "classes_needed": needed,
            "projected_percentage": projected_percentage.map(|p| p.to_string())
        }),
        reasoning: format!(
            "ceil(({} x {} - 100 x {}) / (100 - {})) = {}, attending them gives {}",
            desired.value(),
            total,
            attended,
            desired.value(),
            needed,
            projected_str
        ),
    };

    Ok(ClassesNeededResult {
        classes_needed: needed,
        projected_percentage,
        audit_step,
    })
}
