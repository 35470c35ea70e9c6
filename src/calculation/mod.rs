//! Calculation logic for the Attendance Calculator.
//!
//! This module contains input validation, the current attendance percentage,
//! the classes-needed and classes-can-miss rules, projections after the
//! suggested action, and the [`compute`]/[`calculate`] entry points that tie
//! them together.

mod attendance;
mod classes_can_miss;
mod classes_needed;
mod current_attendance;
mod projection;
mod validation;

pub use attendance::{calculate, compute};
pub use classes_can_miss::{ClassesCanMissResult, calculate_classes_can_miss, classes_can_miss};
pub use classes_needed::{ClassesNeededResult, calculate_classes_needed, classes_needed};
pub use current_attendance::{
    CurrentAttendanceResult, PERCENTAGE_DECIMAL_PLACES, calculate_current_attendance,
    current_attendance_percentage, meets_threshold, round_percentage,
};
pub use projection::projected_attendance;
pub use validation::validate_input;
