//! CODEOWNERS Shadowing Detector CLI
//!
//! A command-line tool for finding shadowed rules in GitHub CODEOWNERS files.

use clap::Parser;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode as StdExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Args;
use cli::config::{ExitCode, ValidatedConfig};
use cli::output::{HumanOutput, ValidationResults};
use codeowners_shadow_core::parse::{ParseError, parse_entries_with_config};
use codeowners_shadow_core::validate::checks::{CheckContext, CheckRunner};
use codeowners_shadow_core::validate::{CheckError, Finding, ValidationResult};

#[tokio::main]
async fn main() -> StdExitCode {
    // Parse command-line arguments
    let args = Args::parse();

    // Initialize tracing
    init_tracing(args.verbose, args.json);

    // Set up signal handling for graceful shutdown
    let terminated = Arc::new(AtomicBool::new(false));
    let terminated_clone = terminated.clone();

    tokio::spawn(async move {
        let ctrl_c = signal::ctrl_c();
        #[cfg(unix)]
        let terminate = async {
            match signal::unix::signal(signal::unix::SignalKind::terminate()) {
                Ok(mut stream) => {
                    stream.recv().await;
                }
                Err(e) => {
                    warn!("Failed to install SIGTERM handler: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        };
        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {
                info!("Received SIGINT, shutting down...");
            }
            _ = terminate => {
                info!("Received SIGTERM, shutting down...");
            }
        }

        terminated_clone.store(true, Ordering::SeqCst);
    });

    // Run the detector
    let exit_code = run(args, &terminated);

    // Check if we were terminated by signal
    if terminated.load(Ordering::SeqCst) {
        return StdExitCode::from(u8::from(ExitCode::Terminated));
    }

    StdExitCode::from(u8::from(exit_code))
}

/// Initialize tracing based on verbosity level.
fn init_tracing(verbosity: u8, json_output: bool) {
    // Don't output logs when using JSON output mode
    if json_output {
        return;
    }

    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// Run the detector with the given arguments.
fn run(args: Args, terminated: &Arc<AtomicBool>) -> ExitCode {
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();

    // Validate configuration
    let config = match ValidatedConfig::from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            let use_colors = !args.json && io::stderr().is_terminal();
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    };

    let use_colors = !config.json_output && io::stdout().is_terminal();

    debug!("Validated configuration: {:?}", config);
    info!("Repository path: {}", config.repo_path.display());
    info!("CODEOWNERS file: {}", config.codeowners_path.display());

    // Read and parse CODEOWNERS file
    let codeowners_content = match std::fs::read_to_string(&config.codeowners_path) {
        Ok(content) => content,
        Err(e) => {
            write_error(
                &mut stderr,
                &format!(
                    "Failed to read CODEOWNERS file '{}': {}",
                    config.codeowners_path.display(),
                    e
                ),
                use_colors,
            );
            return ExitCode::StartupFailure;
        }
    };

    let parse_result = parse_entries_with_config(&codeowners_content, &config.parser_config);

    if !parse_result.is_ok() {
        warn!(
            "CODEOWNERS file has {} malformed line(s)",
            parse_result.errors.len()
        );
        let mut results = ValidationResults::new();
        results.add("parse", parse_errors_to_result(&parse_result.errors));
        if let Err(e) = write_results(&results, &config, &mut stdout, use_colors) {
            error!("Failed to write output: {}", e);
            return ExitCode::StartupFailure;
        }
        return ExitCode::ValidationFailed;
    }

    // Check for termination
    if terminated.load(Ordering::SeqCst) {
        return ExitCode::Terminated;
    }

    // Run validation checks; the shutdown flag doubles as the cancellation token.
    let runner = CheckRunner::with_all_checks();
    let ctx = CheckContext::new(&parse_result.entries, terminated);

    let mut results = ValidationResults::new();
    match runner.run(&ctx) {
        Ok(check_results) => {
            for (name, result) in check_results {
                debug!("Check '{}' found {} issue(s)", name, result.findings.len());
                results.add(name, result);
            }
        }
        Err(CheckError::Cancelled) => {
            info!("Checks cancelled");
            return ExitCode::Terminated;
        }
        Err(e) => {
            write_error(&mut stderr, &e.to_string(), use_colors);
            return ExitCode::StartupFailure;
        }
    }

    // Output results
    if let Err(e) = write_results(&results, &config, &mut stdout, use_colors) {
        error!("Failed to write output: {}", e);
        return ExitCode::StartupFailure;
    }

    // Determine exit code
    config.exit_code_for_results(results.has_errors())
}

/// Reports parse errors as error-level findings.
fn parse_errors_to_result(errors: &[ParseError]) -> ValidationResult {
    ValidationResult::with_findings(
        errors
            .iter()
            .map(|e| Finding::error(e.line(), e.to_string()))
            .collect(),
    )
}

/// Writes results in the configured format.
fn write_results<W: Write>(
    results: &ValidationResults,
    config: &ValidatedConfig,
    writer: &mut W,
    use_colors: bool,
) -> io::Result<()> {
    if config.json_output {
        results.write_json(writer)
    } else {
        results.write_human(writer, use_colors)
    }
}

/// Write an error message to the writer.
fn write_error<W: Write>(writer: &mut W, message: &str, use_colors: bool) {
    let mut output = HumanOutput::new(writer, use_colors);
    let _ = output.write_error(message);
}
