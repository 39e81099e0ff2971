//! Colored console output for the batch driver's messages.

use std::{
    fmt,
    io::{self, IsTerminal, Write},
};

use crossterm::style::Stylize;
use resx2cs::{Logger, Severity};

/// Errors and warnings go to stderr, everything else to stdout. Colors are
/// used only when the stream is a terminal.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    stdout_color: bool,
    stderr_color: bool,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            stdout_color: io::stdout().is_terminal(),
            stderr_color: io::stderr().is_terminal(),
        }
    }

    /// A logger that never emits escape sequences.
    pub fn plain() -> Self {
        Self {
            stdout_color: false,
            stderr_color: false,
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

/// The line as it should be printed, with color codes when `color` is set.
pub fn styled_line(severity: Severity, message: &str, color: bool) -> String {
    if !color {
        return message.to_string();
    }
    match severity {
        Severity::Error => message.red().to_string(),
        Severity::Warning => message.yellow().to_string(),
        Severity::Info => message.to_string(),
        Severity::Success => message.green().to_string(),
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        let message = message.to_string();
        // Failing to print is not worth aborting a conversion for.
        let _ = match severity {
            Severity::Error | Severity::Warning => writeln!(
                io::stderr().lock(),
                "{}",
                styled_line(severity, &message, self.stderr_color)
            ),
            Severity::Info | Severity::Success => writeln!(
                io::stdout().lock(),
                "{}",
                styled_line(severity, &message, self.stdout_color)
            ),
        };
    }
}
