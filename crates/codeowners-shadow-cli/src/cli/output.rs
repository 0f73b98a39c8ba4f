//! Output formatting for the CLI.
//!
//! This module provides human-readable and JSON output formatters for validation results.

use codeowners_shadow_core::validate::{Finding, Severity, ValidationResult};
use colored::Colorize;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::io::Write;

/// JSON output: one array of issues per check, keyed by check name.
#[derive(Debug, Default, Serialize)]
#[serde(transparent)]
pub struct JsonOutput {
    checks: BTreeMap<String, Vec<JsonIssue>>,
}

impl JsonOutput {
    /// Creates a new empty JSON output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds issues from a validation result under the given check name.
    pub fn add_check_results(&mut self, check_name: &str, result: &ValidationResult) {
        self.checks
            .entry(check_name.to_string())
            .or_default()
            .extend(result.findings.iter().map(JsonIssue::from));
    }

    /// Writes the JSON output to a writer.
    pub fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        writeln!(writer, "{}", json)
    }
}

/// A single issue in JSON format.
#[derive(Debug, Serialize)]
pub struct JsonIssue {
    /// Line number where the issue occurred.
    pub line: usize,
    /// Human-readable message.
    pub message: String,
    /// Severity of the issue.
    pub severity: Severity,
}

impl From<&Finding> for JsonIssue {
    fn from(finding: &Finding) -> Self {
        Self {
            line: finding.line,
            message: finding.message.clone(),
            severity: finding.severity,
        }
    }
}

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes a header for a check.
    pub fn write_check_header(&mut self, check_name: &str) -> std::io::Result<()> {
        let header = format!("==> {}", check_name);
        if self.use_colors {
            writeln!(self.writer, "\n{}", header.cyan().bold())?;
        } else {
            writeln!(self.writer, "\n{}", header)?;
        }
        Ok(())
    }

    /// Writes validation results for a check.
    pub fn write_check_results(
        &mut self,
        check_name: &str,
        result: &ValidationResult,
    ) -> std::io::Result<()> {
        if result.findings.is_empty() {
            return Ok(());
        }

        self.write_check_header(check_name)?;

        for finding in &result.findings {
            self.write_issue(finding)?;
        }

        Ok(())
    }

    /// Writes a single issue.
    pub fn write_issue(&mut self, finding: &Finding) -> std::io::Result<()> {
        let label = finding.severity.to_string().to_uppercase();

        if self.use_colors {
            let colored_label = format!("[{}]", label).red().bold();
            writeln!(
                self.writer,
                "  {} line {}: {}",
                colored_label, finding.line, finding.message
            )?;
        } else {
            writeln!(
                self.writer,
                "  [{}] line {}: {}",
                label, finding.line, finding.message
            )?;
        }

        Ok(())
    }

    /// Writes a summary of all validation results.
    pub fn write_summary(&mut self, total_errors: usize) -> std::io::Result<()> {
        writeln!(self.writer)?;

        if total_errors == 0 {
            let message = "✓ No shadowed CODEOWNERS rules found";
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        } else {
            let message = format!("✗ Found {} error(s)", total_errors);
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())?;
            } else {
                writeln!(self.writer, "{}", message)?;
            }
        }

        Ok(())
    }

    /// Writes a startup error.
    pub fn write_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)?;
        } else {
            writeln!(self.writer, "Error: {}", message)?;
        }
        Ok(())
    }
}

/// Collects all validation results organized by check name.
#[derive(Debug, Default)]
pub struct ValidationResults {
    results: HashMap<String, ValidationResult>,
    order: Vec<String>,
}

impl ValidationResults {
    /// Creates a new empty results collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds results for a check.
    pub fn add(&mut self, check_name: impl Into<String>, result: ValidationResult) {
        let name = check_name.into();
        if !self.results.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.results.entry(name).or_default().merge(result);
    }

    /// Returns the total number of errors.
    pub fn total_errors(&self) -> usize {
        self.results.values().map(|r| r.errors_only().count()).sum()
    }

    /// Returns true if there are any errors.
    pub fn has_errors(&self) -> bool {
        self.total_errors() > 0
    }

    /// Iterates over results in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValidationResult)> {
        self.order
            .iter()
            .filter_map(|name| self.results.get(name).map(|r| (name.as_str(), r)))
    }

    /// Writes results in human-readable format.
    pub fn write_human<W: Write>(&self, writer: &mut W, use_colors: bool) -> std::io::Result<()> {
        let mut output = HumanOutput::new(writer, use_colors);

        for (name, result) in self.iter() {
            output.write_check_results(name, result)?;
        }

        output.write_summary(self.total_errors())?;

        Ok(())
    }

    /// Writes results in JSON format.
    pub fn write_json<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        let mut json_output = JsonOutput::new();

        for (name, result) in self.iter() {
            json_output.add_check_results(name, result);
        }

        json_output.write(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHECK: &str = "[Experimental] Avoid Shadowing Checker";

    fn shadow_finding() -> Finding {
        Finding::error(
            6,
            "Pattern \"*\" shadows the following patterns:\n            * 2: \"/build/logs/\"\nEntries should go from least-specific to most-specific.",
        )
    }

    #[test]
    fn test_json_issue_from_finding() {
        let issue = JsonIssue::from(&shadow_finding());

        assert_eq!(issue.line, 6);
        assert!(issue.message.starts_with("Pattern \"*\" shadows"));
        assert_eq!(issue.severity, Severity::Error);
    }

    #[test]
    fn test_json_output_add_results() {
        let mut output = JsonOutput::new();
        let result = ValidationResult::with_findings(vec![shadow_finding()]);

        output.add_check_results(CHECK, &result);

        assert_eq!(output.checks[CHECK].len(), 1);
        assert!(!output.checks.contains_key("parse"));
    }

    #[test]
    fn test_json_output_serialize() {
        let mut output = JsonOutput::new();
        output.add_check_results(CHECK, &ValidationResult::with_findings(vec![shadow_finding()]));

        let mut buf = Vec::new();
        output.write(&mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let issues = json[CHECK].as_array().unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0]["line"], 6);
        assert_eq!(issues[0]["severity"], "error");
        assert_eq!(issues[0]["message"], shadow_finding().message.as_str());
    }

    #[test]
    fn test_json_output_empty_check_is_empty_array() {
        let mut output = JsonOutput::new();
        output.add_check_results(CHECK, &ValidationResult::new());

        let mut buf = Vec::new();
        output.write(&mut buf).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(json[CHECK], serde_json::json!([]));
    }

    #[test]
    fn test_human_output_no_colors() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);

        output.write_issue(&shadow_finding()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("  [ERROR] line 6: Pattern \"*\" shadows"));
        assert!(text.contains("            * 2: \"/build/logs/\"\n"));
    }

    #[test]
    fn test_human_output_skips_clean_checks() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);
        output
            .write_check_results(CHECK, &ValidationResult::new())
            .unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_validation_results_totals() {
        let mut results = ValidationResults::new();
        results.add(CHECK, ValidationResult::with_findings(vec![shadow_finding()]));
        results.add(
            "parse",
            ValidationResult::with_findings(vec![Finding::error(3, "line 3: rule has no owners")]),
        );

        assert_eq!(results.total_errors(), 2);
        assert!(results.has_errors());
    }

    #[test]
    fn test_validation_results_order() {
        let mut results = ValidationResults::new();
        results.add("parse", ValidationResult::new());
        results.add(CHECK, ValidationResult::new());
        results.add("parse", ValidationResult::new());

        let names: Vec<_> = results.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["parse", CHECK]);
    }

    #[test]
    fn test_human_output_summary_valid() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);
        output.write_summary(0).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("No shadowed"));
    }

    #[test]
    fn test_human_output_summary_with_issues() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);
        output.write_summary(2).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Found 2 error(s)\n"));
        assert!(!text.contains("warning"));
    }
}
