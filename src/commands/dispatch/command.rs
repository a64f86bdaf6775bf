//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::{Cli, OutputFormat};
use lsr_core::config::LsrConfig;
use lsr_core::error::Result;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: LsrConfig,
    /// Effective output format: `--format`, then config, then human
    pub format: OutputFormat,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        let config = LsrConfig::resolve(cli.config.as_deref())?;
        let format = cli
            .format
            .or(config.output.format)
            .unwrap_or_default();

        Ok(Self {
            cli,
            config,
            format,
            start,
        })
    }

    /// Path separator used when rendering routes
    pub fn separator(&self) -> &str {
        &self.config.output.separator
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("lsr {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A link-state routing simulator.");
        println!();
        println!("Run `lsr --help` for usage information.");
        Ok(())
    }
}
