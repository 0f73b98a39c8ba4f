//! Pattern compilation for CODEOWNERS shadowing analysis.
//!
//! Patterns are translated into anchored regular expressions. Only the
//! subset of gitignore syntax needed to compare rules is understood:
//!
//! - `*` matches any sequence of characters, including `/`
//! - a trailing `/` matches anything below the directory (or nothing)
//! - a trailing `/**` matches a separator followed by anything
//! - every other character is literal
//!
//! Note that a single `*` crosses path separators here, unlike in most
//! gitignore engines.

use regex::Regex;
use std::borrow::Cow;
use thiserror::Error;

/// Path separator used in CODEOWNERS patterns.
pub const SEPARATOR: char = '/';

/// Suffix marking a recursive directory match.
const RECURSIVE_SUFFIX: &str = "/**";

/// Expression matching any sequence of characters, possibly empty.
const ANY: &str = ".*";

/// A pattern whose translated expression could not be compiled.
#[derive(Debug, Clone, Error)]
#[error("pattern {pattern:?} translated to invalid expression {expression:?}: {source}")]
pub struct CompileError {
    /// The pattern that was being compiled.
    pub pattern: String,
    /// The expression it was translated to.
    pub expression: String,
    /// The underlying regex error.
    #[source]
    pub source: regex::Error,
}

/// A compiled pattern that tests whole strings.
#[derive(Debug, Clone)]
pub struct Matcher {
    pattern: String,
    regex: Regex,
}

impl Matcher {
    /// Compiles a pattern. Equivalent to [`compile`].
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        compile(pattern)
    }

    /// Returns the pattern this matcher was compiled from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the translated regular expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Returns true if the whole of `text` is matched.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Appends a trailing separator unless `pattern` already ends with one.
///
/// Normalization is idempotent.
pub fn normalize(pattern: &str) -> Cow<'_, str> {
    if pattern.ends_with(SEPARATOR) {
        Cow::Borrowed(pattern)
    } else {
        Cow::Owned(format!("{pattern}{SEPARATOR}"))
    }
}

/// Translates a pattern into an anchored regular expression.
///
/// A trailing `/` is checked before a trailing `/**`.
pub fn translate(pattern: &str) -> String {
    let (body, suffix) = if pattern.ends_with(SEPARATOR) {
        (pattern, ANY)
    } else if let Some(stripped) = pattern.strip_suffix(RECURSIVE_SUFFIX) {
        (stripped, "/.*")
    } else {
        (pattern, "")
    };

    let mut expression = String::with_capacity(pattern.len() * 2 + 4);
    expression.push('^');
    for (i, literal) in body.split('*').enumerate() {
        if i > 0 {
            expression.push_str(ANY);
        }
        expression.push_str(&regex::escape(literal));
    }
    expression.push_str(suffix);
    expression.push('$');
    expression
}

/// Compiles a pattern into a [`Matcher`].
pub fn compile(pattern: &str) -> Result<Matcher, CompileError> {
    let expression = translate(pattern);
    match Regex::new(&expression) {
        Ok(regex) => Ok(Matcher {
            pattern: pattern.to_string(),
            regex,
        }),
        Err(source) => Err(CompileError {
            pattern: pattern.to_string(),
            expression,
            source,
        }),
    }
}
