//! Calculator form state.
//!
//! The form holds exactly what the user typed. Nothing is parsed until a
//! calculation is requested, so a half-typed value never produces an error.

use crate::calculation::calculate;
use crate::config::ConfigLoader;
use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{AttendanceInput, AttendanceResult, CalculationRecord, DesiredPercentage};

/// The input fields and the last successful calculation.
///
/// # Example
///
/// ```
/// use attendance_calculator::config::ConfigLoader;
/// use attendance_calculator::shell::CalculatorForm;
///
/// let config = ConfigLoader::default();
/// let mut form = CalculatorForm::new(&config);
/// form.total_classes = "30".to_string();
/// form.classes_attended = "25".to_string();
///
/// let record = form.calculate(&config).unwrap();
/// assert_eq!(record.result.classes_can_miss, 3);
///
/// form.reset(&config);
/// assert_eq!(form.total_classes, "");
/// assert_eq!(form.desired_attendance, "75");
/// assert!(form.result().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorForm {
    /// Raw text of the total classes field.
    pub total_classes: String,
    /// Raw text of the classes attended field.
    pub classes_attended: String,
    /// Raw text of the selected threshold.
    pub desired_attendance: String,
    last_record: Option<CalculationRecord>,
}

impl CalculatorForm {
    /// Creates an empty form with the configured default threshold selected.
    pub fn new(config: &ConfigLoader) -> Self {
        Self {
            total_classes: String::new(),
            classes_attended: String::new(),
            desired_attendance: config.default_threshold().value().to_string(),
            last_record: None,
        }
    }

    /// Clears both counts, restores the default threshold and drops the result.
    pub fn reset(&mut self, config: &ConfigLoader) {
        *self = Self::new(config);
    }

    /// Returns the last successful result, if any.
    pub fn result(&self) -> Option<&AttendanceResult> {
        self.last_record.as_ref().map(|r| &r.result)
    }

    /// Returns the last successful calculation, if any.
    pub fn last_record(&self) -> Option<&CalculationRecord> {
        self.last_record.as_ref()
    }

    /// Parses the selected threshold and checks it is one of the choices.
    pub fn desired_threshold(&self, config: &ConfigLoader) -> CalculatorResult<DesiredPercentage> {
        parse_threshold(&self.desired_attendance, config)
    }

    /// Selects a new threshold. The field is left unchanged when the value
    /// is not one of the choices.
    pub fn select_threshold(
        &mut self,
        value: String,
        config: &ConfigLoader,
    ) -> CalculatorResult<DesiredPercentage> {
        let threshold = parse_threshold(&value, config)?;
        self.desired_attendance = value;
        Ok(threshold)
    }

    /// Parses all fields into an [`AttendanceInput`].
    pub fn to_input(&self, config: &ConfigLoader) -> CalculatorResult<AttendanceInput> {
        let total_classes = parse_count("total classes", &self.total_classes)?;
        let classes_attended = parse_count("classes attended", &self.classes_attended)?;
        let desired_percentage = self.desired_threshold(config)?;
        Ok(AttendanceInput::new(
            total_classes,
            classes_attended,
            desired_percentage,
        ))
    }

    /// Parses the fields, runs the calculation and keeps the record.
    ///
    /// On failure the previous result is kept as it was.
    pub fn calculate(&mut self, config: &ConfigLoader) -> CalculatorResult<&CalculationRecord> {
        let input = self.to_input(config)?;
        let record = calculate(&input)?;
        Ok(&*self.last_record.insert(record))
    }
}

fn parse_threshold(raw: &str, config: &ConfigLoader) -> CalculatorResult<DesiredPercentage> {
    let percentage: u8 = raw.trim().trim_end_matches('%').parse().map_err(|_| {
        CalculatorError::invalid_input(format!("desired attendance '{}' is not a percentage", raw))
    })?;
    config.select_threshold(percentage)
}

fn parse_count(label: &str, raw: &str) -> CalculatorResult<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalculatorError::invalid_input(format!(
            "{} is required",
            label
        )));
    }
    trimmed.parse().map_err(|_| {
        CalculatorError::invalid_input(format!("{} '{}' is not a whole number", label, trimmed))
    })
}
