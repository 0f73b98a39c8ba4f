//! Data structures produced by the CODEOWNERS parser.

use serde::Serialize;
use std::fmt::{self, Display};

/// A single rule of a CODEOWNERS file, reduced to what ordering checks need.
///
/// The position of an entry in its list is significant: later entries take
/// precedence over earlier ones when both match a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    /// The raw pattern text (e.g., "*.rs", "/src/**", "docs/").
    pub pattern: String,
    /// Line number of the rule in the source file (1-based).
    pub line: usize,
}

impl Entry {
    /// Creates a new entry.
    pub fn new(pattern: impl Into<String>, line: usize) -> Self {
        Self {
            pattern: pattern.into(),
            line,
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.line, self.pattern)
    }
}
