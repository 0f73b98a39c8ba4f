//! Errors that abort a check.
//!
//! These are distinct from [`Finding`](super::Finding)s: a finding is an
//! ordinary result, an error means the check could not produce any.

use crate::matching::CompileError;
use thiserror::Error;

/// An error that stopped a check from completing.
#[derive(Debug, Clone, Error)]
pub enum CheckError {
    /// A rule's pattern could not be compiled.
    #[error("line {line}: while compiling pattern {pattern:?} into a regexp")]
    Compile {
        /// The line of the offending rule (1-based).
        line: usize,
        /// The pattern as written in the rule.
        pattern: String,
        /// The compiler error.
        #[source]
        source: CompileError,
    },

    /// Cancellation was requested while the check was running.
    #[error("check cancelled")]
    Cancelled,
}

impl CheckError {
    /// Creates a compile error for the rule on `line`.
    pub fn compile(line: usize, pattern: impl Into<String>, source: CompileError) -> Self {
        Self::Compile {
            line,
            pattern: pattern.into(),
            source,
        }
    }

    /// Returns true if this error reports a cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CheckError::Cancelled)
    }
}
