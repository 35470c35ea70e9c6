//! Configuration loading and management for the Attendance Calculator.
//!
//! This module provides functionality to load the selectable attendance
//! thresholds and the default threshold from a YAML file, or to fall back to
//! the built-in standard set.
//!
//! # Example
//!
//! ```no_run
//! use attendance_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/calculator.yaml").unwrap();
//! println!("Default threshold: {}", config.default_threshold());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::CalculatorConfig;
