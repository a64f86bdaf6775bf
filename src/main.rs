//! LSR - link-state routing simulator
//!
//! Loads a weighted network from a line-oriented text file, edits it, and
//! computes Dijkstra shortest paths, optionally one discovery at a time.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use lsr_core::error::{ExitCode as LsrExitCode, LsrError};
use lsr_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap may fail before `Cli.format` is available. If the user
            // asked for JSON, emit a structured error envelope.
            if argv_format_json {
                let lsr_error = match err.kind() {
                    clap::error::ErrorKind::DisplayHelp
                    | clap::error::ErrorKind::DisplayVersion => err.exit(),
                    clap::error::ErrorKind::ValueValidation
                    | clap::error::ErrorKind::InvalidValue
                    | clap::error::ErrorKind::InvalidSubcommand
                    | clap::error::ErrorKind::UnknownArgument
                    | clap::error::ErrorKind::MissingRequiredArgument
                    | clap::error::ErrorKind::ArgumentConflict => {
                        LsrError::UsageError(err.to_string())
                    }
                    _ => LsrError::Other(err.to_string()),
                };

                eprintln!("{}", lsr_error.to_json());
                return ExitCode::from(lsr_error.exit_code() as u8);
            }

            err.exit();
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let ctx = commands::dispatch::CommandContext::new(&cli, start);
    let format = ctx
        .as_ref()
        .map(|ctx| ctx.format)
        .unwrap_or_else(|_| cli.format.unwrap_or_default());
    let result = ctx.and_then(|ctx| commands::dispatch::run(&ctx));

    match result {
        Ok(()) => ExitCode::from(LsrExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v.eq_ignore_ascii_case("json")) {
                return true;
            }
        } else if arg.eq_ignore_ascii_case("--format=json") {
            return true;
        }
    }
    false
}
