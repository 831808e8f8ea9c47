//! Diagnostic sink boundary.
//!
//! Products that emit side effects (a burger being prepared, for example)
//! receive a [`DiagnosticSink`] explicitly instead of reaching for a global
//! logger. Construction logic behaves the same whichever sink is supplied,
//! including [`NoopSink`].

pub mod adapter;
pub mod local;

use std::cell::RefCell;
use std::fmt;
use std::str::FromStr;

use crate::error::PatternError;

pub use adapter::LoggerAdapter;
pub use local::LocalLogger;

/// Severity of a diagnostic message. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    #[default]
    Info,
    Warn,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        };
        f.write_str(name)
    }
}

impl FromStr for Level {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(PatternError::invalid_value(
                "level",
                s,
                "expected one of: info, warn, error",
            )),
        }
    }
}

/// Anything that accepts `(level, message)` pairs.
pub trait DiagnosticSink {
    fn write(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.write(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.write(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.write(Level::Error, message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn write(&self, level: Level, message: &str) {
        (**self).write(level, message);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for Box<S> {
    fn write(&self, level: Level, message: &str) {
        (**self).write(level, message);
    }
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn write(&self, _level: Level, _message: &str) {}
}

/// Records messages in memory so callers can inspect what was emitted.
#[derive(Debug, Default)]
pub struct MemorySink {
    entries: RefCell<Vec<(Level, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(Level, String)> {
        self.entries.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn write(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push((level, message.to_string()));
    }
}
