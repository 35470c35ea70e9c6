//! Commands accepted by the interactive shell.
//!
//! Each line of user input maps to one [`Command`]. Field setters carry the
//! raw text, exactly like typing into an input box.

use std::str::FromStr;

use thiserror::Error;

/// A single user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the total classes field.
    SetTotal(String),
    /// Set the classes attended field.
    SetAttended(String),
    /// Select the desired attendance threshold.
    SetTarget(String),
    /// Run the calculation on the current fields.
    Calculate,
    /// Clear the form back to its defaults.
    Reset,
    /// Show the current fields and result.
    Show,
    /// List the selectable thresholds.
    Thresholds,
    /// Show the command reference.
    Help,
    /// Leave the shell.
    Quit,
}

/// Errors produced while reading a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    Unknown(String),
    /// A field setter was given without a value.
    #[error("'{0}' needs a value, for example '{0} 30'")]
    MissingValue(String),
}

/// Command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  total <n>      set the number of classes held
  attended <n>   set the number of classes attended
  target <p>     select the desired attendance percentage
  calculate      work out classes needed or classes you can miss
  reset          clear all fields
  show           show the current fields and result
  thresholds     list the selectable percentages
  help           show this message
  quit           leave";

impl FromStr for Command {
    type Err = CommandError;

    /// Parses one line, ignoring case and surrounding whitespace.
    ///
    /// ```
    /// use attendance_calculator::shell::Command;
    ///
    /// assert_eq!(
    ///     "total 30".parse::<Command>(),
    ///     Ok(Command::SetTotal("30".to_string()))
    /// );
    /// assert_eq!("  CALC ".parse::<Command>(), Ok(Command::Calculate));
    /// assert!("fly".parse::<Command>().is_err());
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        let value = |name: &str| {
            if rest.is_empty() {
                Err(CommandError::MissingValue(name.to_string()))
            } else {
                Ok(rest.to_string())
            }
        };

        match keyword.to_lowercase().as_str() {
            "total" => value("total").map(Command::SetTotal),
            "attended" => value("attended").map(Command::SetAttended),
            "target" => value("target").map(Command::SetTarget),
            "calculate" | "calc" => Ok(Command::Calculate),
            "reset" => Ok(Command::Reset),
            "show" => Ok(Command::Show),
            "thresholds" => Ok(Command::Thresholds),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(CommandError::Unknown(keyword.to_string())),
        }
    }
}
