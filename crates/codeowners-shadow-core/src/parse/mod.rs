//! Parser module for CODEOWNERS files.
//!
//! Turns the raw text of a CODEOWNERS file into the ordered list of
//! [`Entry`] values the checks work on. Only the pattern and its line
//! number are kept; owners are counted but not interpreted.
//!
//! # Example
//!
//! ```rust
//! use codeowners_shadow_core::parse::parse_entries;
//!
//! let input = r#"
//! ## CODEOWNERS file
//! *.rs @rustacean
//! /docs/ @docs-team
//! "#;
//!
//! let result = parse_entries(input);
//! assert!(result.is_ok());
//! assert_eq!(result.entries[0].pattern, "*.rs");
//! assert_eq!(result.entries[0].line, 3);
//! ```

mod ast;
mod error;
mod lexer;
mod parser;

// Re-export public types
pub use ast::Entry;
pub use error::{ParseError, ParseResult};
pub use parser::{ParserConfig, parse_entries, parse_entries_strict, parse_entries_with_config};
