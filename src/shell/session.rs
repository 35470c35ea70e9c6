//! Interactive session handling for the Attendance Calculator.
//!
//! A [`Session`] owns the form state and turns each [`Command`] into a
//! [`Reply`]. [`Session::run`] drives it from any line-based reader, which
//! keeps the loop testable without a terminal.

use std::fmt;
use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use crate::config::ConfigLoader;

use super::command::{Command, HELP};
use super::form::CalculatorForm;
use super::view::{Notice, render_form, render_result, render_thresholds};

/// Text printed when a session starts.
pub const BANNER: &str = "Attendance Calculator (type 'help' for commands)";

/// Prompt printed before each command.
pub const PROMPT: &str = "> ";

/// The outcome of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Text to show the user.
    Text(String),
    /// A blocking notification.
    Notice(Notice),
    /// The session should end.
    Quit,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Text(text) => f.write_str(text),
            Reply::Notice(notice) => write!(f, "{}", notice),
            Reply::Quit => f.write_str("Bye."),
        }
    }
}

/// One user's calculator session.
#[derive(Debug, Clone)]
pub struct Session {
    config: ConfigLoader,
    form: CalculatorForm,
}

impl Session {
    /// Creates a session with an empty form.
    pub fn new(config: ConfigLoader) -> Self {
        let form = CalculatorForm::new(&config);
        Self { config, form }
    }

    /// Returns the current form state.
    pub fn form(&self) -> &CalculatorForm {
        &self.form
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Applies a command to the session.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_calculator::config::ConfigLoader;
    /// use attendance_calculator::shell::{Command, Reply, Session};
    ///
    /// let mut session = Session::new(ConfigLoader::default());
    /// session.handle(Command::SetTotal("30".to_string()));
    /// session.handle(Command::SetAttended("25".to_string()));
    ///
    /// match session.handle(Command::Calculate) {
    ///     Reply::Text(text) => assert!(text.contains("83.33%")),
    ///     other => panic!("unexpected reply: {:?}", other),
    /// }
    /// ```
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::SetTotal(value) => {
                self.form.total_classes = value;
                Reply::Text(format!("Total Classes: {}", self.form.total_classes))
            }
            Command::SetAttended(value) => {
                self.form.classes_attended = value;
                Reply::Text(format!("Classes Attended: {}", self.form.classes_attended))
            }
            Command::SetTarget(value) => {
                match self.form.select_threshold(value, &self.config) {
                    Ok(threshold) => Reply::Text(format!("Desired Attendance: {}", threshold)),
                    Err(err) => Reply::Notice(err.into()),
                }
            }
            Command::Calculate => self.calculate(),
            Command::Reset => {
                self.form.reset(&self.config);
                Reply::Text(render_form(&self.form))
            }
            Command::Show => Reply::Text(render_form(&self.form)),
            Command::Thresholds => Reply::Text(render_thresholds(&self.config)),
            Command::Help => Reply::Text(HELP.to_string()),
            Command::Quit => Reply::Quit,
        }
    }

    fn calculate(&mut self) -> Reply {
        match self.form.calculate(&self.config) {
            Ok(record) => {
                info!(
                    calculation_id = %record.calculation_id,
                    current = %record.result.current_attendance_percentage,
                    classes_needed = record.result.classes_needed,
                    classes_can_miss = record.result.classes_can_miss,
                    duration_us = record.audit_trace.duration_us,
                    "Calculation completed successfully"
                );
                Reply::Text(render_result(&record.result, record.input.desired_percentage))
            }
            Err(err) => {
                warn!(error = %err, "Calculation rejected");
                Reply::Notice(err.into())
            }
        }
    }

    /// Parses and applies one line of input. Blank lines yield `None`.
    pub fn handle_line(&mut self, line: &str) -> Option<Reply> {
        if line.trim().is_empty() {
            return None;
        }
        Some(match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(err) => Reply::Notice(Notice::with_detail("Unrecognised command", err.to_string())),
        })
    }

    /// Reads commands until `quit` or end of input, writing every reply.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "{}", BANNER)?;
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if let Some(reply) = self.handle_line(&line) {
                writeln!(output, "{}", reply)?;
                if reply == Reply::Quit {
                    return Ok(());
                }
            }
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        writeln!(output)?;
        Ok(())
    }
}
