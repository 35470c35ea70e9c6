//! Configuration types for the Attendance Calculator.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file.

use serde::{Deserialize, Serialize};

use crate::models::{DEFAULT_THRESHOLD, STANDARD_THRESHOLDS};

fn default_threshold() -> i64 {
    i64::from(DEFAULT_THRESHOLD)
}

/// Calculator configuration file structure.
///
/// ```yaml
/// thresholds: [75, 80, 85, 90, 95]
/// default_threshold: 75
/// ```
///
/// Values are read as plain integers and range-checked by
/// [`ConfigLoader`](super::ConfigLoader) once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// The thresholds a student can choose from, in display order.
    pub thresholds: Vec<i64>,
    /// The threshold selected when the form is first shown or reset.
    #[serde(default = "default_threshold")]
    pub default_threshold: i64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            thresholds: STANDARD_THRESHOLDS.iter().copied().map(i64::from).collect(),
            default_threshold: i64::from(DEFAULT_THRESHOLD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_standard_thresholds() {
        let config = CalculatorConfig::default();
        assert_eq!(config.thresholds, vec![75, 80, 85, 90, 95]);
        assert_eq!(config.default_threshold, 75);
    }

    #[test]
    fn test_default_threshold_is_optional_in_yaml() {
        let config: CalculatorConfig = serde_yaml::from_str("thresholds: [80, 90]").unwrap();
        assert_eq!(config.thresholds, vec![80, 90]);
        assert_eq!(config.default_threshold, 75);
    }

    #[test]
    fn test_out_of_range_values_still_parse() {
        let config: CalculatorConfig =
            serde_yaml::from_str("thresholds: [75, 300, -5]
default_threshold: -1").unwrap();
        assert_eq!(config.thresholds, vec![75, 300, -5]);
        assert_eq!(config.default_threshold, -1);
    }
}
