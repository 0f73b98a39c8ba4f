//! Pattern shadowing detection check.
//!
//! This check detects when a later, broader pattern covers everything an
//! earlier, more specific pattern matches, leaving the earlier rule dead.

use super::{Check, CheckContext};
use crate::matching::{compile, normalize};
use crate::parse::Entry;
use crate::validate::{CancellationToken, CheckError, Finding, ValidationResult};
use std::fmt::Write as _;

/// Indentation of each bullet in a shadowing message.
const BULLET_INDENT: &str = "            ";

/// A check that detects pattern shadowing.
///
/// In CODEOWNERS, the last matching pattern wins. A broad pattern placed
/// after a narrower one therefore takes every path the narrower one would
/// have owned:
///
/// ```text
/// /build/logs/ @doctocat    # never applies
/// *            @default     # shadows the rule above
/// ```
///
/// Each rule's pattern, with a trailing `/` added, is compiled and tested
/// against the `/`-terminated text of every earlier pattern. A match means
/// the earlier rule is shadowed. Patterns are compared as strings, not
/// against files in the repository.
#[derive(Debug, Clone, Default)]
pub struct AvoidShadowingCheck;

impl AvoidShadowingCheck {
    /// Creates a new shadowing detection check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for AvoidShadowingCheck {
    fn name(&self) -> &'static str {
        "[Experimental] Avoid Shadowing Checker"
    }

    fn run(&self, ctx: &CheckContext) -> Result<ValidationResult, CheckError> {
        detect_shadowing(ctx.entries, ctx.cancel).map(ValidationResult::with_findings)
    }
}

/// Finds every entry that shadows at least one earlier entry.
///
/// Findings come out in input order, one per shadowing entry. `cancel` is
/// polled before each entry's pattern is compiled; once it fires the
/// analysis is abandoned and no findings are returned.
///
/// Only earlier entries can be shadowed. Two rules shadow each other in
/// either order only when they normalize to the same text, like `/dir` and
/// `/dir/`. `/dir/**` normalizes to `/dir/**/`, which needs a second `/`,
/// so it does not shadow an earlier `/dir/`, while `/dir/` does shadow an
/// earlier `/dir/**`.
pub fn detect_shadowing(
    entries: &[Entry],
    cancel: &dyn CancellationToken,
) -> Result<Vec<Finding>, CheckError> {
    let mut findings = Vec::new();

    for (idx, entry) in entries.iter().enumerate() {
        if cancel.is_cancelled() {
            return Err(CheckError::Cancelled);
        }

        let matcher = compile(&normalize(&entry.pattern))
            .map_err(|source| CheckError::compile(entry.line, &entry.pattern, source))?;

        let shadowed: Vec<&Entry> = entries[..idx]
            .iter()
            .filter(|previous| matcher.is_match(&normalize(&previous.pattern)))
            .collect();

        if !shadowed.is_empty() {
            findings.push(Finding::error(
                entry.line,
                format_shadowing_message(entry, &shadowed),
            ));
        }
    }

    Ok(findings)
}

/// Renders the message for `entry` shadowing `shadowed`.
///
/// ```text
/// Pattern "*" shadows the following patterns:
///             * 2: "/build/logs/"
///             * 3: "/script"
/// Entries should go from least-specific to most-specific.
/// ```
pub fn format_shadowing_message(entry: &Entry, shadowed: &[&Entry]) -> String {
    let mut message = format!(
        "Pattern {} shadows the following patterns:",
        quote(&entry.pattern)
    );
    for previous in shadowed {
        let _ = write!(
            message,
            "\n{BULLET_INDENT}* {}: {}",
            previous.line,
            quote(&previous.pattern)
        );
    }
    message.push_str("\nEntries should go from least-specific to most-specific.");
    message
}

/// Wraps `s` in double quotes, escaping `"`, `\\`, control characters and
/// non-space whitespace. Other characters, combining marks included, are
/// kept as they are.
fn quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\u{7}' => quoted.push_str("\\a"),
            '\u{8}' => quoted.push_str("\\b"),
            '\u{c}' => quoted.push_str("\\f"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            '\u{b}' => quoted.push_str("\\v"),
            c if c.is_ascii_control() => {
                let _ = write!(quoted, "\\x{:02x}", c as u32);
            }
            c if c.is_control() || (c.is_whitespace() && c != ' ') => {
                let code = c as u32;
                let _ = if code <= 0xffff {
                    write!(quoted, "\\u{code:04x}")
                } else {
                    write!(quoted, "\\U{code:08x}")
                };
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}
