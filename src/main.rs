//! WorkflowDigest CLI Entry Point
//!
//! Prints the Markdown summary of a workflow directory to stdout.
//!
//! # Usage
//!
//! ```bash
//! # Summarize .github/workflows
//! workflow-digest
//!
//! # Summarize another directory, aborting on the first bad file
//! workflow-digest ci/workflows --strict
//!
//! # Machine-readable output with the warning list
//! workflow-digest --json
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use colored::Colorize;
use log::{error, info};

use workflow_digest::summary::{ErrorPolicy, Summarizer};
use workflow_digest::{APP_NAME, DEFAULT_WORKFLOWS_DIR, VERSION};

/// Command-line configuration parsed from arguments.
#[derive(Debug)]
struct Config {
    workflows_dir: PathBuf,
    policy: ErrorPolicy,
    json: bool,
    verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workflows_dir: PathBuf::from(DEFAULT_WORKFLOWS_DIR),
            policy: ErrorPolicy::FailSoft,
            json: false,
            verbose: false,
        }
    }
}

/// What the command line asks for.
#[derive(Debug)]
enum Invocation {
    Run(Config),
    Help,
    Version,
}

/// Configures the logging system with appropriate formatting.
fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            use std::io::Write;

            match record.level() {
                log::Level::Warn | log::Level::Error => {
                    writeln!(buf, "[{}] {}", record.level(), record.args())
                }
                _ => writeln!(buf, "{}", record.args()),
            }
        })
        .init();
}

/// Prints usage information.
fn print_usage() {
    println!("Usage: workflow-digest [OPTIONS] [WORKFLOWS_DIR]");
    println!();
    println!("Arguments:");
    println!(
        "  [WORKFLOWS_DIR]     Directory of workflow YAML files (default: {})",
        DEFAULT_WORKFLOWS_DIR
    );
    println!();
    println!("Options:");
    println!("  --strict            Abort on the first unreadable or invalid file");
    println!("  --json              Print the summary and warnings as JSON");
    println!("  --verbose           Enable debug logging");
    println!("  --help              Show this help message");
    println!("  --version           Show version information");
    println!();
    println!("Examples:");
    println!("  workflow-digest");
    println!("  workflow-digest ci/workflows --strict");
    println!("  workflow-digest --json > summary.json");
}

/// Parses command-line arguments.
fn parse_arguments(args: &[String]) -> Result<Invocation, String> {
    let mut config = Config::default();
    let mut positional_seen = false;

    // Skip program name
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => return Ok(Invocation::Help),
            "--version" | "-V" => return Ok(Invocation::Version),
            "--strict" => config.policy = ErrorPolicy::FailHard,
            "--json" => config.json = true,
            "--verbose" | "-v" => config.verbose = true,
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            _ => {
                if positional_seen {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                config.workflows_dir = PathBuf::from(arg);
                positional_seen = true;
            }
        }
    }

    Ok(Invocation::Run(config))
}

/// Main application entry point.
fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    setup_logging(config.verbose);

    info!("{} v{}", APP_NAME, VERSION);
    info!("Workflow directory: {}", config.workflows_dir.display());
    if config.policy == ErrorPolicy::FailHard {
        info!("Mode: STRICT (first bad file aborts)");
    }

    let summarizer = Summarizer::with_policy(config.policy);
    let summary = summarizer.summarize(&config.workflows_dir).map_err(|e| {
        error!("Summarization failed: {}", e);
        e
    })?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", summary.text);
    }

    for warning in &summary.warnings {
        eprintln!(
            "{} skipped {}: {}",
            "warning:".yellow().bold(),
            warning.file,
            warning.message
        );
    }

    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let config = match parse_arguments(&args) {
        Ok(Invocation::Run(config)) => config,
        Ok(Invocation::Help) => {
            print_usage();
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Version) => {
            println!("{} {}", APP_NAME, VERSION);
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            eprintln!();
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!();
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
