//! CLI argument parsing for lsr
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{BreakArgs, ComputeArgs, EditLineArgs, FileArgs, RemoveArgs};
pub use output::{OutputFormat, StepMode};
use parse::parse_format;

/// LSR - link-state routing simulator
#[derive(Parser, Debug)]
#[command(name = "lsr")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records (defaults to the config file, then human)
    #[arg(long, global = true, value_parser = parse_format)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (e.g. debug, lsr_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a config.toml (defaults to $LSR_CONFIG_DIR or the user config dir)
    #[arg(long, global = true, env = "LSR_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute shortest paths from a source node
    Compute(ComputeArgs),

    /// Print the network in its line format
    Show(FileArgs),

    /// List node names
    Nodes(FileArgs),

    /// Add a network line (`NAME: NEIGHBOR:COST ...`) to a file
    Add(EditLineArgs),

    /// Remove a node and all its links from a file
    Remove(RemoveArgs),

    /// Break links along a chain such as `A>B>C`
    Break(BreakArgs),
}
