//! CODEOWNERS Shadowing Detector Core
//!
//! A library for finding dead rules in GitHub CODEOWNERS files.
//!
//! CODEOWNERS resolution is "last matching rule wins", so a broad pattern
//! placed after a narrower one silently takes over every path the narrower
//! rule was meant to own. This crate finds those pairs.
//!
//! # Features
//!
//! - **Parser**: Reduce a CODEOWNERS file to its ordered `(pattern, line)` entries
//! - **Pattern compiler**: Translate glob patterns into anchored matchers
//! - **Shadow detection**: Report every rule that shadows an earlier one
//! - **Cancellation**: Poll-based early exit for long analyses
//!
//! # Quick Start
//!
//! ```rust
//! use codeowners_shadow_core::parse::parse_entries;
//! use codeowners_shadow_core::validate::NeverCancel;
//! use codeowners_shadow_core::validate::checks::detect_shadowing;
//!
//! let input = r#"
//! /build/logs/ @doctocat
//! /script      @mszostok
//! *            @default
//! "#;
//!
//! let parsed = parse_entries(input);
//! let findings = detect_shadowing(&parsed.entries, &NeverCancel).unwrap();
//!
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].line, 4);
//! println!("{}", findings[0]);
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Parser for CODEOWNERS files
//! - [`matching`]: Pattern compilation
//! - [`validate`]: Findings, errors and checks

use std::path::{Path, PathBuf};

pub mod matching;
pub mod parse;
pub mod validate;

// Re-export commonly used types at the crate root
pub use parse::{Entry, ParseResult, parse_entries};
pub use validate::checks::{AvoidShadowingCheck, Check, CheckContext, CheckRunner};
pub use validate::{CancellationToken, CheckError, Finding, Severity, ValidationResult};

/// Finds the CODEOWNERS file in a repository.
///
/// Searches in the following locations (in order):
/// 1. `.github/CODEOWNERS`
/// 2. `CODEOWNERS`
/// 3. `docs/CODEOWNERS`
///
/// Returns `Some(path)` if found, `None` otherwise.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use codeowners_shadow_core::find_codeowners_file;
///
/// let repo_path = Path::new("/path/to/repo");
/// if let Some(codeowners_path) = find_codeowners_file(repo_path) {
///     println!("Found CODEOWNERS at: {}", codeowners_path.display());
/// } else {
///     eprintln!("CODEOWNERS file not found");
/// }
/// ```
pub fn find_codeowners_file(repo_path: &Path) -> Option<PathBuf> {
    let locations = [
        repo_path.join(".github/CODEOWNERS"),
        repo_path.join("CODEOWNERS"),
        repo_path.join("docs/CODEOWNERS"),
    ];
    locations.into_iter().find(|p| p.exists())
}
