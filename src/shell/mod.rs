//! Terminal front end for the Attendance Calculator.
//!
//! This module provides the form state, the command parser, rendering of
//! results and notices, and the interactive session loop.

mod command;
mod form;
mod session;
mod view;

pub use command::{Command, CommandError, HELP};
pub use form::CalculatorForm;
pub use session::{BANNER, PROMPT, Reply, Session};
pub use view::{
    INVALID_INPUT_NOTICE, Notice, PROGRESS_BAR_WIDTH, progress_bar, render_form, render_result,
    render_thresholds, summary,
};
