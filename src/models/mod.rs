//! Core data models for the Attendance Calculator.
//!
//! This module contains all the domain models used throughout the crate.

mod attendance_input;
mod attendance_result;
mod calculation_record;

pub use attendance_input::{
    AttendanceInput, DEFAULT_THRESHOLD, DesiredPercentage, STANDARD_THRESHOLDS,
};
pub use attendance_result::{AttendanceOutlook, AttendanceResult};
pub use calculation_record::{AuditStep, AuditTrace, CalculationRecord};
