//! CLI module for the CODEOWNERS shadowing detector.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// CODEOWNERS shadowing detector - finds rules that can never apply.
///
/// Reports every pattern that matches everything an earlier, more specific
/// pattern matches. Supports both human-readable and JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "codeowners-shadow")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the repository root.
    #[arg(long, env = "REPOSITORY_PATH", default_value = ".")]
    pub repository_path: PathBuf,

    /// Path to the CODEOWNERS file, relative to the repository root.
    /// Defaults to the first of .github/CODEOWNERS, CODEOWNERS, docs/CODEOWNERS.
    #[arg(long, env = "CODEOWNERS_FILE")]
    pub codeowners_file: Option<PathBuf>,

    /// Stop parsing at the first malformed line.
    #[arg(long)]
    pub strict: bool,

    /// Treat patterns without owners as parse errors.
    #[arg(long)]
    pub disallow_unowned_patterns: bool,

    /// Output validation results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}
