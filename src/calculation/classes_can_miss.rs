//! Classes can miss calculation.
//!
//! This module determines how many further classes a student at or above the
//! threshold can skip while staying at or above it.

use rust_decimal::Decimal;

use super::projection::{class_count, projected_attendance};
use crate::error::CalculatorResult;
use crate::models::{AuditStep, DesiredPercentage};

/// The result of calculating classes that can be missed, including the audit step.
#[derive(Debug, Clone)]
pub struct ClassesCanMissResult {
    /// Maximum additional classes that can be missed.
    pub classes_can_miss: u64,
    /// Attendance after missing that many classes.
    pub projected_percentage: Option<Decimal>,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the maximum `m` such that `attended / (total + m) >= p / 100`.
///
/// Computed as `floor((100 * attended - p * total) / p)`, clamped to zero
/// when the threshold is not met.
///
/// # Examples
///
/// ```
/// use attendance_calculator::calculation::classes_can_miss;
/// use attendance_calculator::models::DesiredPercentage;
///
/// let p = DesiredPercentage::new(75).unwrap();
/// assert_eq!(classes_can_miss(25, 30, p).unwrap(), 3);
/// assert_eq!(classes_can_miss(15, 30, p).unwrap(), 0);
/// ```
pub fn classes_can_miss(
    attended: i64,
    total: i64,
    desired: DesiredPercentage,
) -> CalculatorResult<u64> {
    let p = i128::from(desired.value());
    let surplus = 100 * i128::from(attended) - p * i128::from(total);
    if surplus <= 0 {
        return Ok(0);
    }
    class_count(surplus / p, "classes can miss")
}

/// Calculates classes that can be missed and records the audit step.
pub fn calculate_classes_can_miss(
    attended: i64,
    total: i64,
    desired: DesiredPercentage,
    step_number: u32,
) -> CalculatorResult<ClassesCanMissResult> {
    let can_miss = classes_can_miss(attended, total, desired)?;
    let projected_percentage =
        projected_attendance(i128::from(attended), i128::from(total) + i128::from(can_miss));

    let projected_str = projected_percentage
        .map(|p| format!("{}%", p.normalize()))
        .unwrap_or_else(|| "n/a".to_string());

    let audit_step = AuditStep {
        step_number,
        rule_id: "classes_can_miss".to_string(),
        rule_name: "Classes Can Miss".to_string(),
        input: serde_json::json!({
            "classes_attended": attended,
            "total_classes": total,
            "desired_percentage": desired.value()
        }),
        output: serde_json::json!({
            "classes_can_miss": can_miss,
            "projected_percentage": projected_percentage.map(|p| p.to_string())
        }),
        reasoning: format!(
            "floor((100 x {} - {} x {}) / {}) = {}, missing them gives {}",
            attended,
            desired.value(),
            total,
            desired.value(),
            can_miss,
            projected_str
        ),
    };

    Ok(ClassesCanMissResult {
        classes_can_miss: can_miss,
        projected_percentage,
        audit_step,
    })
}
