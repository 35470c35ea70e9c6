//! Attendance result model.
//!
//! This module contains the [`AttendanceResult`] produced by every
//! successful calculation, and the [`AttendanceOutlook`] derived from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The outcome of an attendance calculation.
///
/// At most one of `classes_needed` and `classes_can_miss` is non-zero. Both
/// are zero when the student meets the threshold but would drop below it by
/// missing a single further class.
///
/// # Example
///
/// ```
/// use attendance_calculator::models::AttendanceResult;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = AttendanceResult {
///     current_attendance_percentage: Decimal::from_str("83.33").unwrap(),
///     classes_needed: 0,
///     classes_can_miss: 3,
/// };
/// assert!(result.meets_threshold());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceResult {
    /// Current attendance in percent, rounded to two decimal places.
    pub current_attendance_percentage: Decimal,
    /// Additional classes to attend to reach the threshold.
    pub classes_needed: u64,
    /// Additional classes that can be missed while staying at the threshold.
    pub classes_can_miss: u64,
}

/// Where a student stands relative to their threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "classes")]
pub enum AttendanceOutlook {
    /// Below the threshold; this many more classes must be attended.
    ShortBy(u64),
    /// Above the threshold; this many classes can still be missed.
    CanMiss(u64),
    /// At or just above the threshold with no class to spare.
    NoMargin,
}

impl AttendanceResult {
    /// Returns true when no further classes are needed.
    pub fn meets_threshold(&self) -> bool {
        self.classes_needed == 0
    }

    /// Classifies the result.
    ///
    /// ```
    /// use attendance_calculator::models::{AttendanceOutlook, AttendanceResult};
    /// use rust_decimal::Decimal;
    ///
    /// let result = AttendanceResult {
    ///     current_attendance_percentage: Decimal::from(50),
    ///     classes_needed: 30,
    ///     classes_can_miss: 0,
    /// };
    /// assert_eq!(result.outlook(), AttendanceOutlook::ShortBy(30));
    /// ```
    pub fn outlook(&self) -> AttendanceOutlook {
        if self.classes_needed > 0 {
            AttendanceOutlook::ShortBy(self.classes_needed)
        } else if self.classes_can_miss > 0 {
            AttendanceOutlook::CanMiss(self.classes_can_miss)
        } else {
            AttendanceOutlook::NoMargin
        }
    }
}
