//! Finding output and the warning cap.
//!
//! One line per finding on stdout, `path:line: severity: message`, in the
//! order findings are discovered. The format matches what Xcode's build log
//! parser picks up, so the tool can run as a build phase.

use std::fmt;
use std::path::Path;

use colored::Colorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Emits findings and counts warnings against a global per-run cap.
///
/// Warnings past the cap must not be emitted; callers check
/// [`Reporter::at_capacity`] before emitting and stop the run when it trips.
/// Errors are never counted and never suppressed.
#[derive(Debug)]
pub struct Reporter {
    max_warnings: usize,
    warning_count: usize,
}

impl Reporter {
    pub fn new(max_warnings: usize) -> Self {
        Self {
            max_warnings,
            warning_count: 0,
        }
    }

    pub fn warning(&mut self, path: &Path, line: usize, message: &str) {
        self.warning_count += 1;
        emit(path, line, Severity::Warning, message);
    }

    pub fn error(&self, path: &Path, line: usize, message: &str) {
        emit(path, line, Severity::Error, message);
    }

    pub fn at_capacity(&self) -> bool {
        self.warning_count >= self.max_warnings
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}

fn emit(path: &Path, line: usize, severity: Severity, message: &str) {
    let severity = match severity {
        Severity::Warning => "warning".bold().yellow(),
        Severity::Error => "error".bold().red(),
    };
    println!("{}:{}: {}: {}", path.display(), line, severity, message);
}
