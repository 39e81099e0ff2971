//! The logging capability the batch driver reports through.
//!
//! The engine never prints. Hosts pass a [`Logger`] and decide where messages
//! go: a console, a build system log, `tracing`, or memory.

use std::{cell::RefCell, fmt};

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

/// A sink for progress and outcome messages.
///
/// Implementors only provide [`Logger::log`]; call sites use the severity
/// helpers with `format_args!`:
///
/// ```rust
/// use resx2cs::logger::{Logger, MemoryLogger, Severity};
///
/// let logger = MemoryLogger::new();
/// logger.info(format_args!("processed {} files", 3));
/// assert_eq!(logger.messages(), vec![(Severity::Info, "processed 3 files".to_string())]);
/// ```
pub trait Logger {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>);

    fn error(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Error, message);
    }

    fn warn(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Warning, message);
    }

    fn info(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Info, message);
    }

    fn success(&self, message: fmt::Arguments<'_>) {
        self.log(Severity::Success, message);
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        (**self).log(severity, message);
    }
}

/// Forwards messages to `tracing` events under the `resx2cs` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        match severity {
            Severity::Error => tracing::error!(target: "resx2cs", "{}", message),
            Severity::Warning => tracing::warn!(target: "resx2cs", "{}", message),
            Severity::Info => tracing::info!(target: "resx2cs", "{}", message),
            Severity::Success => {
                tracing::info!(target: "resx2cs", outcome = "success", "{}", message)
            }
        }
    }
}

/// Keeps every message in order.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    messages: RefCell<Vec<(Severity, String)>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of all messages logged so far.
    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.borrow().clone()
    }

    /// Messages of one severity.
    pub fn messages_of(&self, severity: Severity) -> Vec<String> {
        self.messages
            .borrow()
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }

    /// `true` if any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.borrow().iter().any(|(_, m)| m.contains(needle))
    }
}

impl Logger for MemoryLogger {
    fn log(&self, severity: Severity, message: fmt::Arguments<'_>) {
        self.messages.borrow_mut().push((severity, message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_route_severity() {
        let logger = MemoryLogger::new();
        logger.error(format_args!("e{}", 1));
        logger.warn(format_args!("w"));
        logger.info(format_args!("i"));
        logger.success(format_args!("s"));
        assert_eq!(
            logger.messages(),
            vec![
                (Severity::Error, "e1".to_string()),
                (Severity::Warning, "w".to_string()),
                (Severity::Info, "i".to_string()),
                (Severity::Success, "s".to_string()),
            ]
        );
        assert_eq!(logger.messages_of(Severity::Warning), vec!["w".to_string()]);
    }

    #[test]
    fn test_reference_is_a_logger() {
        fn takes_logger(logger: impl Logger) {
            logger.info(format_args!("through a reference"));
        }
        let logger = MemoryLogger::new();
        takes_logger(&logger);
        assert!(logger.contains("through a reference"));
    }

    #[test]
    fn test_tracing_logger_does_not_panic_without_subscriber() {
        TracingLogger.success(format_args!("done"));
    }
}
