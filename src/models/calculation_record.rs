//! Calculation record models for the Attendance Calculator.
//!
//! This module contains the [`CalculationRecord`] type and the audit
//! structures that explain, step by step, how a result was reached.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AttendanceInput, AttendanceResult};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use attendance_calculator::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.step("classes_needed").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns the first step recorded for the given rule.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The complete, audited result of an attendance calculation.
///
/// # Example
///
/// ```
/// use attendance_calculator::models::{
///     AttendanceInput, AttendanceResult, AuditTrace, CalculationRecord, DesiredPercentage,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let record = CalculationRecord {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     input: AttendanceInput::new(4, 3, DesiredPercentage::default()),
///     result: AttendanceResult {
///         current_attendance_percentage: Decimal::from(75),
///         classes_needed: 0,
///         classes_can_miss: 0,
///     },
///     audit_trace: AuditTrace {
///         steps: vec![],
///         duration_us: 0,
///     },
/// };
/// assert_eq!(record.result.classes_needed, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationRecord {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the calculator that produced the record.
    pub engine_version: String,
    /// The validated input.
    pub input: AttendanceInput,
    /// The computed result.
    pub result: AttendanceResult,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DesiredPercentage;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_step(step_number: u32, rule_id: &str) -> AuditStep {
        AuditStep {
            step_number,
            rule_id: rule_id.to_string(),
            rule_name: "Sample".to_string(),
            input: serde_json::json!({}),
            output: serde_json::json!({}),
            reasoning: "sample".to_string(),
        }
    }

    fn sample_record() -> CalculationRecord {
        CalculationRecord {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            input: AttendanceInput::new(30, 25, DesiredPercentage::default()),
            result: AttendanceResult {
                current_attendance_percentage: Decimal::from_str("83.33").unwrap(),
                classes_needed: 0,
                classes_can_miss: 3,
            },
            audit_trace: AuditTrace {
                steps: vec![
                    sample_step(1, "input_validation"),
                    sample_step(2, "current_attendance"),
                    sample_step(3, "classes_can_miss"),
                ],
                duration_us: 5,
            },
        }
    }

    #[test]
    fn test_step_lookup_by_rule_id() {
        let record = sample_record();
        let step = record.audit_trace.step("current_attendance").unwrap();
        assert_eq!(step.step_number, 2);
        assert!(record.audit_trace.step("classes_needed").is_none());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: CalculationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_record_json_shape() {
        let json = serde_json::to_value(sample_record()).unwrap();
        assert_eq!(json["input"]["desired_percentage"], 75);
        assert_eq!(json["result"]["current_attendance_percentage"], "83.33");
        assert_eq!(json["audit_trace"]["steps"].as_array().unwrap().len(), 3);
    }
}
