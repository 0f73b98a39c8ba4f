//! Findings reported by checks.

use serde::Serialize;
use std::fmt::{self, Display};

/// The severity of a finding.
///
/// Shadowed rules never apply, so every finding is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// A rule that can never take effect.
    Error,
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => f.write_str("error"),
        }
    }
}

/// A single issue found in a CODEOWNERS file.
///
/// Consumers display `message` verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// How serious the issue is.
    pub severity: Severity,
    /// The line the issue is reported on (1-based).
    pub line: usize,
    /// Human-readable description.
    pub message: String,
}

impl Finding {
    /// Creates a finding.
    pub fn new(severity: Severity, line: usize, message: impl Into<String>) -> Self {
        Self {
            severity,
            line,
            message: message.into(),
        }
    }

    /// Creates an error-level finding.
    pub fn error(line: usize, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, line, message)
    }
}

impl Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// The findings produced by one or more checks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    /// All findings, in the order they were reported.
    pub findings: Vec<Finding>,
}

impl ValidationResult {
    /// Creates a new empty validation result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation result with the given findings.
    pub fn with_findings(findings: Vec<Finding>) -> Self {
        Self { findings }
    }

    /// Returns true if nothing was found.
    pub fn is_ok(&self) -> bool {
        self.findings.is_empty()
    }

    /// Returns true if any finding is an error.
    pub fn has_errors(&self) -> bool {
        self.errors_only().next().is_some()
    }

    /// Returns the error-level findings.
    pub fn errors_only(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    /// Adds a finding to the result.
    pub fn add(&mut self, finding: Finding) {
        self.findings.push(finding);
    }

    /// Merges another validation result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.findings.extend(other.findings);
    }
}
