//! Check traits and runner for CODEOWNERS validation.
//!
//! This module provides a trait-based system for implementing validation checks
//! that can be composed and run together.

mod shadowing;

pub use shadowing::{AvoidShadowingCheck, detect_shadowing, format_shadowing_message};

use crate::parse::Entry;
use crate::validate::{CancellationToken, CheckError, ValidationResult};
use log::{debug, info};

/// Context provided to checks.
pub struct CheckContext<'a> {
    /// The rule entries of the CODEOWNERS file, in file order.
    pub entries: &'a [Entry],
    /// Polled by checks to stop early.
    pub cancel: &'a dyn CancellationToken,
}

impl<'a> CheckContext<'a> {
    /// Creates a new check context.
    pub fn new(entries: &'a [Entry], cancel: &'a dyn CancellationToken) -> Self {
        Self { entries, cancel }
    }
}

impl std::fmt::Debug for CheckContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckContext")
            .field("entries", &self.entries)
            .field("cancel", &"<dyn CancellationToken>")
            .finish()
    }
}

/// A validation check.
pub trait Check: Send + Sync {
    /// Returns the human-readable name used to label this check in reports.
    fn name(&self) -> &'static str;

    /// Runs the check and returns its findings.
    fn run(&self, ctx: &CheckContext) -> Result<ValidationResult, CheckError>;
}

/// Runs multiple validation checks and collects results.
#[derive(Default)]
pub struct CheckRunner {
    checks: Vec<Box<dyn Check>>,
}

impl CheckRunner {
    /// Creates a new check runner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a check runner with all built-in checks.
    pub fn with_all_checks() -> Self {
        let mut runner = Self::new();
        runner.add_check(AvoidShadowingCheck::new());
        runner
    }

    /// Adds a check.
    pub fn add_check<C: Check + 'static>(&mut self, check: C) {
        self.checks.push(Box::new(check));
    }

    /// Returns the names of the registered checks, in run order.
    pub fn check_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.checks.iter().map(|check| check.name())
    }

    /// Runs every check in registration order.
    ///
    /// Returns each check's name with its result. The first check error
    /// aborts the run.
    pub fn run(
        &self,
        ctx: &CheckContext,
    ) -> Result<Vec<(&'static str, ValidationResult)>, CheckError> {
        info!(
            "Running {} checks over {} entries",
            self.checks.len(),
            ctx.entries.len()
        );
        let mut results = Vec::with_capacity(self.checks.len());

        for check in &self.checks {
            debug!("Running check: {}", check.name());
            let result = check.run(ctx)?;
            debug!(
                "Check '{}' found {} issues",
                check.name(),
                result.findings.len()
            );
            results.push((check.name(), result));
        }

        info!(
            "Checks complete: {} total issues",
            results.iter().map(|(_, r)| r.findings.len()).sum::<usize>()
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{Finding, NeverCancel};
    use std::sync::atomic::AtomicBool;

    struct FixedCheck(usize);

    impl Check for FixedCheck {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn run(&self, _ctx: &CheckContext) -> Result<ValidationResult, CheckError> {
            Ok(ValidationResult::with_findings(vec![Finding::error(
                self.0, "fixed",
            )]))
        }
    }

    #[test]
    fn check_context_creation() {
        let entries = vec![Entry::new("*.rs", 1)];
        let ctx = CheckContext::new(&entries, &NeverCancel);
        assert_eq!(ctx.entries.len(), 1);
        assert!(!ctx.cancel.is_cancelled());
    }

    #[test]
    fn check_runner_creation() {
        let runner = CheckRunner::new();
        assert!(runner.checks.is_empty());
    }

    #[test]
    fn check_runner_with_all_checks() {
        let runner = CheckRunner::with_all_checks();
        let names: Vec<_> = runner.check_names().collect();
        assert_eq!(names, vec!["[Experimental] Avoid Shadowing Checker"]);
    }

    #[test]
    fn check_runner_keeps_registration_order() {
        let mut runner = CheckRunner::with_all_checks();
        runner.add_check(FixedCheck(4));

        let entries = vec![Entry::new("/docs/", 1), Entry::new("*", 2)];
        let results = runner
            .run(&CheckContext::new(&entries, &NeverCancel))
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, "[Experimental] Avoid Shadowing Checker");
        assert_eq!(results[0].1.findings.len(), 1);
        assert_eq!(results[1].0, "fixed");
        assert_eq!(results[1].1.findings[0].line, 4);
    }

    #[test]
    fn check_runner_stops_on_error() {
        let mut runner = CheckRunner::with_all_checks();
        runner.add_check(FixedCheck(1));

        let entries = vec![Entry::new("*", 1)];
        let cancelled = AtomicBool::new(true);
        let result = runner.run(&CheckContext::new(&entries, &cancelled));

        assert!(matches!(result, Err(CheckError::Cancelled)));
    }
}
