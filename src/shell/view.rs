//! Rendering of results and notices for the terminal.
//!
//! This module turns calculator state into the text shown to the user, and
//! maps [`CalculatorError`] values onto blocking [`Notice`]s.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::config::ConfigLoader;
use crate::error::CalculatorError;
use crate::models::{AttendanceOutlook, AttendanceResult, DesiredPercentage};

use super::form::CalculatorForm;

/// Message shown whenever the entered values cannot be used.
pub const INVALID_INPUT_NOTICE: &str = "Please enter proper values!";

/// Width of the textual progress bar, in cells.
pub const PROGRESS_BAR_WIDTH: usize = 20;

/// A blocking notification for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The headline shown to the user.
    pub message: String,
    /// Optional explanation of what went wrong.
    pub detail: Option<String>,
}

impl Notice {
    /// Creates a notice with a detail line.
    pub fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: Some(detail.into()),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "! {}", self.message)?;
        if let Some(detail) = &self.detail {
            write!(f, "\n  {}", detail)?;
        }
        Ok(())
    }
}

impl From<CalculatorError> for Notice {
    fn from(error: CalculatorError) -> Self {
        match error {
            CalculatorError::InvalidInput { message } => {
                Notice::with_detail(INVALID_INPUT_NOTICE, message)
            }
            CalculatorError::UnsupportedThreshold { percentage } => Notice::with_detail(
                INVALID_INPUT_NOTICE,
                format!("{}% is not one of the selectable thresholds", percentage),
            ),
            CalculatorError::ConfigNotFound { path } => Notice::with_detail(
                "Configuration error",
                format!("Configuration file not found: {}", path),
            ),
            CalculatorError::ConfigParseError { path, message } => Notice::with_detail(
                "Configuration error",
                format!("Failed to parse {}: {}", path, message),
            ),
            CalculatorError::InvalidConfig { path, message } => Notice::with_detail(
                "Configuration error",
                format!("{}: {}", path, message),
            ),
            CalculatorError::CalculationError { message } => {
                Notice::with_detail("Calculation failed", message)
            }
        }
    }
}

fn classes(count: u64) -> &'static str {
    if count > 1 { "classes" } else { "class" }
}

/// Returns the one-line verdict for a result.
///
/// # Examples
///
/// ```
/// use attendance_calculator::models::{AttendanceResult, DesiredPercentage};
/// use attendance_calculator::shell::summary;
/// use rust_decimal::Decimal;
///
/// let result = AttendanceResult {
///     current_attendance_percentage: Decimal::from(50),
///     classes_needed: 30,
///     classes_can_miss: 0,
/// };
/// assert_eq!(
///     summary(&result, DesiredPercentage::new(75).unwrap()),
///     "You need to attend 30 more classes to achieve 75% attendance."
/// );
/// ```
pub fn summary(result: &AttendanceResult, desired: DesiredPercentage) -> String {
    match result.outlook() {
        AttendanceOutlook::ShortBy(needed) => format!(
            "You need to attend {} more {} to achieve {} attendance.",
            needed,
            classes(needed),
            desired
        ),
        AttendanceOutlook::CanMiss(_) | AttendanceOutlook::NoMargin => {
            let can_miss = result.classes_can_miss;
            format!(
                "You can bunk {} more {} and still maintain {} attendance.",
                can_miss,
                classes(can_miss),
                desired
            )
        }
    }
}

/// Draws a percentage as a fixed-width bar, e.g. `[##########..........]`.
pub fn progress_bar(percentage: Decimal, width: usize) -> String {
    let filled = (percentage * Decimal::from(width) / Decimal::ONE_HUNDRED)
        .round()
        .to_usize()
        .unwrap_or(0)
        .min(width);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(width - filled))
}

/// Renders a result the way the calculator page lays it out.
pub fn render_result(result: &AttendanceResult, desired: DesiredPercentage) -> String {
    let percentage = result.current_attendance_percentage.normalize();
    format!(
        "Current Attendance: {}%\n{}\n{} {}%\nClasses Needed: {}    Classes Can Miss: {}",
        percentage,
        summary(result, desired),
        progress_bar(result.current_attendance_percentage, PROGRESS_BAR_WIDTH),
        percentage,
        result.classes_needed,
        result.classes_can_miss
    )
}

fn field(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}

/// Renders the form fields, followed by the last result if there is one.
pub fn render_form(form: &CalculatorForm) -> String {
    let mut text = format!(
        "Total Classes: {}\nClasses Attended: {}\nDesired Attendance: {}%",
        field(&form.total_classes),
        field(&form.classes_attended),
        form.desired_attendance.trim().trim_end_matches('%')
    );
    if let Some(record) = form.last_record() {
        text.push_str("\n\n");
        text.push_str(&render_result(&record.result, record.input.desired_percentage));
    }
    text
}

/// Lists the selectable thresholds, marking the default.
pub fn render_thresholds(config: &ConfigLoader) -> String {
    config
        .thresholds()
        .iter()
        .map(|t| {
            if *t == config.default_threshold() {
                format!("{} (default)", t)
            } else {
                t.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
