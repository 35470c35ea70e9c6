//! Attendance input model and the desired percentage threshold.
//!
//! This module defines the [`AttendanceInput`] struct describing a student's
//! attendance record and the [`DesiredPercentage`] newtype for the threshold
//! they want to maintain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CalculatorError, CalculatorResult};

/// The thresholds offered when no configuration overrides them.
pub const STANDARD_THRESHOLDS: [u8; 5] = [75, 80, 85, 90, 95];

/// The threshold selected by default.
pub const DEFAULT_THRESHOLD: u8 = 75;

/// An attendance threshold in percent.
///
/// Only values in `1..=99` can be constructed. The classes-needed formula
/// divides by `100 - p` and the classes-can-miss formula divides by `p`.
///
/// # Example
///
/// ```
/// use attendance_calculator::models::DesiredPercentage;
///
/// let threshold = DesiredPercentage::new(80).unwrap();
/// assert_eq!(threshold.value(), 80);
/// assert_eq!(threshold.to_string(), "80%");
///
/// assert!(DesiredPercentage::new(100).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DesiredPercentage(u8);

impl DesiredPercentage {
    /// Creates a threshold, rejecting 0 and anything at or above 100.
    pub fn new(percentage: u8) -> CalculatorResult<Self> {
        if (1..100).contains(&percentage) {
            Ok(Self(percentage))
        } else {
            Err(CalculatorError::UnsupportedThreshold { percentage })
        }
    }

    /// Returns the threshold as a whole percentage.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for DesiredPercentage {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl TryFrom<u8> for DesiredPercentage {
    type Error = CalculatorError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DesiredPercentage> for u8 {
    fn from(value: DesiredPercentage) -> Self {
        value.0
    }
}

impl fmt::Display for DesiredPercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A student's attendance record as entered.
///
/// The counts are signed so that a negative value typed by the user reaches
/// validation and is reported as invalid input, rather than being rejected
/// while parsing.
///
/// # Example
///
/// ```
/// use attendance_calculator::models::{AttendanceInput, DesiredPercentage};
///
/// let input = AttendanceInput::new(30, 25, DesiredPercentage::new(75).unwrap());
/// assert_eq!(input.total_classes, 30);
/// assert_eq!(input.classes_attended, 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceInput {
    /// Number of classes held so far.
    pub total_classes: i64,
    /// Number of those classes the student attended.
    pub classes_attended: i64,
    /// The threshold the student wants to maintain.
    pub desired_percentage: DesiredPercentage,
}

impl AttendanceInput {
    /// Creates a new attendance input.
    pub fn new(
        total_classes: i64,
        classes_attended: i64,
        desired_percentage: DesiredPercentage,
    ) -> Self {
        Self {
            total_classes,
            classes_attended,
            desired_percentage,
        }
    }
}
