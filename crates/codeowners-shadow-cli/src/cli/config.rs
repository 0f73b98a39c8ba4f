//! Configuration handling for the CLI.
//!
//! This module converts CLI arguments into the library's configuration types
//! and locates the CODEOWNERS file.

use crate::cli::Args;
use codeowners_shadow_core::find_codeowners_file;
use codeowners_shadow_core::parse::ParserConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Invalid(String),

    /// Failed to locate the CODEOWNERS file.
    #[error("failed to read CODEOWNERS file: {0}")]
    ReadCodeowners(String),
}

/// Application exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Validation passed successfully.
    Success = 0,
    /// Application startup failed (wrong configuration or internal error).
    StartupFailure = 1,
    /// Application terminated by signal (SIGINT/SIGTERM).
    Terminated = 2,
    /// Validation failed (checks found issues).
    ValidationFailed = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl From<ExitCode> for u8 {
    fn from(code: ExitCode) -> Self {
        code as u8
    }
}

/// Validated and processed configuration for running the detector.
#[derive(Debug)]
pub struct ValidatedConfig {
    /// Path to the repository root.
    pub repo_path: PathBuf,
    /// Path to the CODEOWNERS file.
    pub codeowners_path: PathBuf,
    /// Configuration for the parser.
    pub parser_config: ParserConfig,
    /// Whether to output JSON.
    pub json_output: bool,
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments.
    pub fn from_args(args: &Args) -> Result<Self, ConfigError> {
        let repo_path = args.repository_path.canonicalize().map_err(|e| {
            ConfigError::Invalid(format!(
                "repository path '{}' is invalid: {}",
                args.repository_path.display(),
                e
            ))
        })?;

        let codeowners_path = match &args.codeowners_file {
            Some(file) => resolve_codeowners_file(&repo_path, file)?,
            None => locate_codeowners_file(&repo_path)?,
        };

        let parser_config = ParserConfig {
            strict: args.strict,
            allow_unowned_patterns: !args.disallow_unowned_patterns,
        };

        Ok(Self {
            repo_path,
            codeowners_path,
            parser_config,
            json_output: args.json,
        })
    }

    /// Determines the exit code based on validation results.
    pub fn exit_code_for_results(&self, has_errors: bool) -> ExitCode {
        if has_errors {
            ExitCode::ValidationFailed
        } else {
            ExitCode::Success
        }
    }
}

/// Finds the CODEOWNERS file in the repository's standard locations.
pub fn locate_codeowners_file(repo_path: &Path) -> Result<PathBuf, ConfigError> {
    find_codeowners_file(repo_path).ok_or_else(|| {
        ConfigError::ReadCodeowners(format!(
            "CODEOWNERS file not found in repository '{}'. Searched in: .github/CODEOWNERS, CODEOWNERS, docs/CODEOWNERS",
            repo_path.display()
        ))
    })
}

/// Resolves an explicitly configured CODEOWNERS file against the repository root.
fn resolve_codeowners_file(repo_path: &Path, file: &Path) -> Result<PathBuf, ConfigError> {
    let path = repo_path.join(file);
    if path.is_file() {
        Ok(path)
    } else {
        Err(ConfigError::ReadCodeowners(format!(
            "'{}' does not exist or is not a file",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".github")).unwrap();
        fs::write(dir.path().join(".github/CODEOWNERS"), "* @owner\n").unwrap();
        dir
    }

    fn args_for(dir: &TempDir, extra: &[&str]) -> Args {
        let mut argv = vec![
            "codeowners-shadow",
            "--repository-path",
            dir.path().to_str().unwrap(),
        ];
        argv.extend_from_slice(extra);
        Args::parse_from(argv)
    }

    #[test]
    fn test_find_codeowners_github_dir() {
        let dir = create_test_repo();
        let path = locate_codeowners_file(dir.path()).unwrap();
        assert!(path.ends_with(".github/CODEOWNERS"));
    }

    #[test]
    fn test_find_codeowners_root() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("CODEOWNERS"), "* @owner\n").unwrap();
        let path = locate_codeowners_file(dir.path()).unwrap();
        assert!(path.ends_with("CODEOWNERS"));
        assert!(!path.to_string_lossy().contains(".github"));
    }

    #[test]
    fn test_find_codeowners_docs() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("docs/CODEOWNERS"), "* @owner\n").unwrap();
        let path = locate_codeowners_file(dir.path()).unwrap();
        assert!(path.ends_with("docs/CODEOWNERS"));
    }

    #[test]
    fn test_find_codeowners_not_found() {
        let dir = TempDir::new().unwrap();
        let result = locate_codeowners_file(dir.path());
        assert!(matches!(result, Err(ConfigError::ReadCodeowners(_))));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::StartupFailure), 1);
        assert_eq!(i32::from(ExitCode::Terminated), 2);
        assert_eq!(u8::from(ExitCode::ValidationFailed), 3);
    }

    #[test]
    fn test_validated_config_defaults() {
        let dir = create_test_repo();
        let config = ValidatedConfig::from_args(&args_for(&dir, &[])).unwrap();

        assert!(config.codeowners_path.ends_with(".github/CODEOWNERS"));
        assert!(!config.parser_config.strict);
        assert!(config.parser_config.allow_unowned_patterns);
        assert!(!config.json_output);
    }

    #[test]
    fn test_validated_config_parser_flags() {
        let dir = create_test_repo();
        let args = args_for(&dir, &["--strict", "--disallow-unowned-patterns"]);
        let config = ValidatedConfig::from_args(&args).unwrap();

        assert!(config.parser_config.strict);
        assert!(!config.parser_config.allow_unowned_patterns);
    }

    #[test]
    fn test_validated_config_explicit_file() {
        let dir = create_test_repo();
        fs::create_dir_all(dir.path().join("meta")).unwrap();
        fs::write(dir.path().join("meta/OWNERS"), "/docs/ @docs\n").unwrap();

        let args = args_for(&dir, &["--codeowners-file", "meta/OWNERS"]);
        let config = ValidatedConfig::from_args(&args).unwrap();
        assert!(config.codeowners_path.ends_with("meta/OWNERS"));
    }

    #[test]
    fn test_validated_config_missing_explicit_file() {
        let dir = create_test_repo();
        let args = args_for(&dir, &["--codeowners-file", "nope/OWNERS"]);
        let result = ValidatedConfig::from_args(&args);
        assert!(result.unwrap_err().to_string().contains("nope/OWNERS"));
    }

    #[test]
    fn test_validated_config_invalid_repo_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");
        let args = Args::parse_from([
            "codeowners-shadow",
            "--repository-path",
            missing.to_str().unwrap(),
        ]);
        let result = ValidatedConfig::from_args(&args);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_exit_code_for_results() {
        let dir = create_test_repo();
        let config = ValidatedConfig::from_args(&args_for(&dir, &[])).unwrap();

        assert_eq!(config.exit_code_for_results(false), ExitCode::Success);
        assert_eq!(
            config.exit_code_for_results(true),
            ExitCode::ValidationFailed
        );
    }
}
