//! Attendance Calculator
//!
//! This crate converts a student's attendance record (classes held, classes
//! attended, desired threshold) into the number of further classes they must
//! attend, or the number they can still miss while keeping the threshold.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;
