//! Error types for CODEOWNERS file parsing.

use super::ast::Entry;
use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A line could not be parsed.
    #[error("line {line}: {message}")]
    InvalidLine {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// Description of the error.
        message: String,
    },

    /// A rule line has no owners.
    #[error("line {line}: rule has no owners")]
    MissingOwners {
        /// The line number (1-based).
        line: usize,
    },
}

impl ParseError {
    /// Creates an invalid line error.
    pub fn invalid_line(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidLine {
            line,
            message: message.into(),
        }
    }

    /// Creates a missing owners error.
    pub fn missing_owners(line: usize) -> Self {
        Self::MissingOwners { line }
    }

    /// Returns the line number where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidLine { line, .. } => *line,
            ParseError::MissingOwners { line } => *line,
        }
    }
}

/// The result of parsing a CODEOWNERS file.
///
/// Entries that parsed successfully are always returned, even when some
/// lines failed.
#[derive(Debug, Clone, Default)]
pub struct ParseResult {
    /// Rule entries in file order.
    pub entries: Vec<Entry>,
    /// Errors encountered while parsing.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Creates a successful parse result.
    pub fn ok(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            errors: Vec::new(),
        }
    }

    /// Creates a parse result with errors.
    pub fn with_errors(entries: Vec<Entry>, errors: Vec<ParseError>) -> Self {
        Self { entries, errors }
    }

    /// Returns true if parsing completed without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}
