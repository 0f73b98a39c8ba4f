//! Line and file-level parsers for CODEOWNERS files.
//!
//! This module combines the lexer components to turn an entire
//! CODEOWNERS file into an ordered list of entries.

use super::ast::Entry;
use super::error::{ParseError, ParseResult};
use super::lexer::{is_blank_line, parse_comment_line, parse_rule_components};
use log::{debug, trace};

/// Configuration options for the parser.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// If true, parsing stops at the first error (strict mode).
    /// If false, errors are collected and parsing continues (lenient mode).
    pub strict: bool,
    /// If true, patterns without owners are accepted as entries.
    /// If false, patterns without owners are parse errors.
    pub allow_unowned_patterns: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict: false,
            allow_unowned_patterns: true,
        }
    }
}

impl ParserConfig {
    /// Creates a new parser config with default settings (lenient mode,
    /// unowned patterns allowed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strict mode parser config.
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Default::default()
        }
    }

    /// Sets whether unowned patterns are allowed.
    pub fn with_allow_unowned_patterns(mut self, value: bool) -> Self {
        self.allow_unowned_patterns = value;
        self
    }
}

/// Parses a single line of a CODEOWNERS file.
///
/// Returns `Ok(None)` for blank and comment lines.
fn parse_line(
    line_text: &str,
    line_num: usize,
    config: &ParserConfig,
) -> Result<Option<Entry>, ParseError> {
    if is_blank_line(line_text) || parse_comment_line(line_text).is_ok() {
        return Ok(None);
    }

    let (_, components) = parse_rule_components(line_text)
        .map_err(|_| ParseError::invalid_line(line_num, "unexpected content after pattern"))?;

    if components.owners.is_empty() && !config.allow_unowned_patterns {
        return Err(ParseError::missing_owners(line_num));
    }

    Ok(Some(Entry::new(components.pattern, line_num)))
}

/// Parses a CODEOWNERS file with the given configuration.
pub fn parse_entries_with_config(input: &str, config: &ParserConfig) -> ParseResult {
    debug!(
        "Parsing CODEOWNERS file ({} bytes, strict={})",
        input.len(),
        config.strict
    );
    let mut entries = Vec::new();
    let mut errors = Vec::new();

    // `lines` strips both LF and CRLF endings.
    for (line_idx, line_text) in input.lines().enumerate() {
        let line_num = line_idx + 1;

        match parse_line(line_text, line_num, config) {
            Ok(Some(entry)) => {
                trace!("Line {}: rule {:?}", line_num, entry.pattern);
                entries.push(entry);
            }
            Ok(None) => trace!("Line {}: skipped", line_num),
            Err(error) => {
                debug!("Line {}: parse error - {}", line_num, error);
                errors.push(error);
                if config.strict {
                    debug!("Strict mode: stopping at first error");
                    break;
                }
            }
        }
    }

    debug!(
        "Parsing complete: {} entries, {} errors",
        entries.len(),
        errors.len()
    );
    if errors.is_empty() {
        ParseResult::ok(entries)
    } else {
        ParseResult::with_errors(entries, errors)
    }
}

/// Parses a CODEOWNERS file in lenient mode, collecting all errors.
pub fn parse_entries(input: &str) -> ParseResult {
    parse_entries_with_config(input, &ParserConfig::new())
}

/// Parses a CODEOWNERS file in strict mode, stopping at the first error.
pub fn parse_entries_strict(input: &str) -> ParseResult {
    parse_entries_with_config(input, &ParserConfig::strict())
}
