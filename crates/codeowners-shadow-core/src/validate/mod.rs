//! Validation module for CODEOWNERS files.
//!
//! This module provides the finding and error types shared by all checks,
//! the cooperative cancellation hook, and the checks themselves.
//!
//! # Example
//!
//! ```rust
//! use codeowners_shadow_core::parse::parse_entries;
//! use codeowners_shadow_core::validate::NeverCancel;
//! use codeowners_shadow_core::validate::checks::{CheckContext, CheckRunner};
//!
//! let parsed = parse_entries("/docs/ @docs\n* @default\n");
//! let ctx = CheckContext::new(&parsed.entries, &NeverCancel);
//!
//! for (name, result) in CheckRunner::with_all_checks().run(&ctx).unwrap() {
//!     for finding in &result.findings {
//!         eprintln!("{name}: line {}: {}", finding.line, finding);
//!     }
//! }
//! ```

mod cancel;
pub mod checks;
mod error;
mod finding;

// Re-export public types
pub use cancel::{CancellationToken, NeverCancel};
pub use error::CheckError;
pub use finding::{Finding, Severity, ValidationResult};
