//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calculator
//! configuration from a YAML file.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CalculatorError, CalculatorResult};
use crate::models::{DesiredPercentage, STANDARD_THRESHOLDS};

use super::types::CalculatorConfig;

/// Label used in errors for configuration that did not come from a file.
const BUILT_IN: &str = "<built-in>";

/// Loads and provides access to the calculator configuration.
///
/// A loaded configuration is always valid: every threshold is a usable
/// [`DesiredPercentage`], thresholds are unique, and the default is one of
/// them.
///
/// # Example
///
/// ```no_run
/// use attendance_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/calculator.yaml").unwrap();
/// let threshold = loader.select_threshold(80).unwrap();
/// println!("Selected threshold: {}", threshold);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    thresholds: Vec<DesiredPercentage>,
    default_threshold: DesiredPercentage,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    /// - The values cannot be used (`InvalidConfig`)
    pub fn load<P: AsRef<Path>>(path: P) -> CalculatorResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalculatorError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: CalculatorConfig =
            serde_yaml::from_str(&content).map_err(|e| CalculatorError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?;

        let loader = Self::validated(config, &path_str)?;
        debug!(
            path = %path_str,
            thresholds = ?loader.thresholds,
            default_threshold = loader.default_threshold.value(),
            "Loaded calculator configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from an in-memory configuration.
    ///
    /// ```
    /// use attendance_calculator::config::{CalculatorConfig, ConfigLoader};
    ///
    /// let config = CalculatorConfig {
    ///     thresholds: vec![60, 70],
    ///     default_threshold: 70,
    /// };
    /// let loader = ConfigLoader::from_config(config).unwrap();
    /// assert_eq!(loader.default_threshold().value(), 70);
    /// ```
    pub fn from_config(config: CalculatorConfig) -> CalculatorResult<Self> {
        Self::validated(config, BUILT_IN)
    }

    fn validated(config: CalculatorConfig, path: &str) -> CalculatorResult<Self> {
        let invalid = |message: String| CalculatorError::InvalidConfig {
            path: path.to_string(),
            message,
        };

        if config.thresholds.is_empty() {
            return Err(invalid("thresholds must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        let mut thresholds = Vec::with_capacity(config.thresholds.len());
        for &value in &config.thresholds {
            let threshold = u8::try_from(value)
                .ok()
                .and_then(|v| DesiredPercentage::new(v).ok())
                .ok_or_else(|| invalid(format!("threshold {} must be between 1 and 99", value)))?;
            if !seen.insert(value) {
                return Err(invalid(format!("threshold {} is listed twice", value)));
            }
            thresholds.push(threshold);
        }

        let default_threshold = thresholds
            .iter()
            .copied()
            .find(|t| i64::from(t.value()) == config.default_threshold)
            .ok_or_else(|| {
                invalid(format!(
                    "default threshold {} is not one of the thresholds",
                    config.default_threshold
                ))
            })?;

        Ok(Self {
            thresholds,
            default_threshold,
        })
    }

    /// Returns the selectable thresholds in display order.
    pub fn thresholds(&self) -> &[DesiredPercentage] {
        &self.thresholds
    }

    /// Returns the threshold selected by default.
    pub fn default_threshold(&self) -> DesiredPercentage {
        self.default_threshold
    }

    /// Resolves a requested percentage to one of the selectable thresholds.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_calculator::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::default();
    /// assert_eq!(loader.select_threshold(90).unwrap().value(), 90);
    /// assert!(loader.select_threshold(70).is_err());
    /// ```
    pub fn select_threshold(&self, percentage: u8) -> CalculatorResult<DesiredPercentage> {
        self.thresholds
            .iter()
            .copied()
            .find(|t| t.value() == percentage)
            .ok_or(CalculatorError::UnsupportedThreshold { percentage })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        let thresholds = STANDARD_THRESHOLDS
            .into_iter()
            .filter_map(|value| DesiredPercentage::new(value).ok())
            .collect();
        Self {
            thresholds,
            default_threshold: DesiredPercentage::default(),
        }
    }
}
