//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use super::output::StepMode;

/// Arguments for the compute command.
#[derive(Args, Debug)]
pub struct ComputeArgs {
    /// Network file
    pub file: PathBuf,

    /// Source node name
    pub source: String,

    /// ca: compute all at once; ss: single step, one discovery at a time
    #[arg(long, short, value_enum, default_value = "ca")]
    pub mode: StepMode,

    /// Do not wait for enter between steps
    #[arg(long)]
    pub no_pause: bool,
}

/// Arguments for commands that only read a network file.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Network file
    pub file: PathBuf,
}

/// Arguments for the add command.
#[derive(Args, Debug)]
pub struct EditLineArgs {
    /// Network file (created if missing)
    pub file: PathBuf,

    /// Line to add, e.g. "H: F:9 E:2"
    pub line: String,
}

/// Arguments for the remove command.
#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Network file
    pub file: PathBuf,

    /// Node name
    pub name: String,
}

/// Arguments for the break command.
#[derive(Args, Debug)]
pub struct BreakArgs {
    /// Network file
    pub file: PathBuf,

    /// Link chain, e.g. "C>D" or "A>B>C"
    pub chain: String,
}
