//! # rigging-cli
//!
//! Command-line transport for `rigging_core`. Reads a lift request (or an
//! engine input), evaluates it and writes the JSON result unchanged to stdout
//! or to a file. Logs go to stderr so stdout carries only JSON.
//!
//! Exit codes: `0` valid lift, `2` rejected or blocked, `1` fatal error.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use rigging_core::engine::{self, Verdict};
use rigging_core::file_io::{load_engine_input, load_tables, read_request_json, save_json};
use rigging_core::lift::evaluate_request_json;
use rigging_core::tables::{self, CapacityTables};

#[derive(Parser)]
#[command(name = "rigging-cli", version, about = "Below-the-hook rigging calculations")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a lift request and print the response
    Evaluate(EvaluateArgs),
    /// Print the active capacity tables
    Tables(TablesArgs),
}

#[derive(Args)]
struct EvaluateArgs {
    /// Path to the request JSON
    request: PathBuf,

    /// Treat the input as an engine input and print the engine verdict
    #[arg(long)]
    engine: bool,

    /// Alternate capacity tables (JSON)
    #[arg(long, env = "RIGGING_TABLES")]
    tables: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

#[derive(Args)]
struct TablesArgs {
    /// Alternate capacity tables (JSON)
    #[arg(long, env = "RIGGING_TABLES")]
    tables: Option<PathBuf>,

    /// Single-line JSON
    #[arg(long)]
    compact: bool,
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        })
    });

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Commands::Evaluate(args) => run_evaluate(&args),
        Commands::Tables(args) => run_tables(&args).map(|_| true),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn active_tables(path: Option<&Path>) -> Result<CapacityTables> {
    match path {
        Some(path) => {
            load_tables(path).with_context(|| format!("failed to load capacity tables from {}", path.display()))
        }
        None => Ok(tables::standard().clone()),
    }
}

/// Returns whether the lift is acceptable.
fn run_evaluate(args: &EvaluateArgs) -> Result<bool> {
    let tables = active_tables(args.tables.as_deref())?;

    if args.engine {
        let input = load_engine_input(&args.request)
            .with_context(|| format!("failed to read engine input {}", args.request.display()))?;
        let verdict = engine::evaluate(&input, &tables).context("engine evaluation failed")?;
        let acceptable = verdict.is_acceptable();
        if let Verdict::Rejected(rejection) = &verdict {
            info!(reason = %rejection.reason, "Engine rejected lift");
        }
        emit(&verdict, args.output.as_deref(), args.compact)?;
        return Ok(acceptable);
    }

    let json = read_request_json(&args.request)
        .with_context(|| format!("failed to read request {}", args.request.display()))?;
    let response = evaluate_request_json(&json, &tables).context("request evaluation failed")?;
    debug!(valid = response.is_valid(), "Request evaluated");

    emit(&response, args.output.as_deref(), args.compact)?;
    Ok(response.is_valid())
}

fn run_tables(args: &TablesArgs) -> Result<()> {
    let tables = active_tables(args.tables.as_deref())?;
    emit(&tables, None, args.compact)
}

fn emit<T: Serialize>(value: &T, output: Option<&Path>, compact: bool) -> Result<()> {
    match output {
        Some(path) => {
            save_json(value, path, !compact).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "Result written");
        }
        None => {
            let json = if compact {
                serde_json::to_string(value)
            } else {
                serde_json::to_string_pretty(value)
            }
            .context("failed to serialize result")?;
            println!("{}", json);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_evaluate() {
        let cli = Cli::try_parse_from(["rigging-cli", "-v", "evaluate", "lift.json", "--compact", "-o", "out.json"])
            .unwrap();
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Commands::Evaluate(args) => {
                assert_eq!(args.request, PathBuf::from("lift.json"));
                assert!(args.compact);
                assert!(!args.engine);
                assert_eq!(args.output, Some(PathBuf::from("out.json")));
            }
            Commands::Tables(_) => panic!("expected evaluate"),
        }
    }

    #[test]
    fn test_evaluate_writes_response() {
        let dir = tempfile::tempdir().unwrap();
        let request = dir.path().join("lift.json");
        let output = dir.path().join("response.json");
        std::fs::write(&request, "{ not json").unwrap();

        let args = EvaluateArgs {
            request,
            engine: false,
            tables: None,
            output: Some(output.clone()),
            compact: true,
        };
        assert!(!run_evaluate(&args).unwrap());

        let written: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
        assert_eq!(written["status"], "invalid");
        assert_eq!(written["reason"], "invalid_request_payload");
    }

    #[test]
    fn test_missing_tables_is_fatal() {
        let err = active_tables(Some(Path::new("/nonexistent/tables.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("capacity tables"));
    }
}
