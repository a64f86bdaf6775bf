//! Command implementations for all lsr commands

use crate::cli::Commands;
use crate::commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use lsr_core::error::Result;

use super::trace_command;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Compute(args) => commands::compute::execute(ctx, args),
            Commands::Show(args) => commands::show::execute_show(ctx, &args.file),
            Commands::Nodes(args) => commands::show::execute_nodes(ctx, &args.file),
            Commands::Add(args) => commands::edit::execute_add(ctx, &args.file, &args.line),
            Commands::Remove(args) => commands::edit::execute_remove(ctx, &args.file, &args.name),
            Commands::Break(args) => commands::edit::execute_break(ctx, &args.file, &args.chain),
        };
        trace_command!(ctx.cli, ctx.start, "execute_command");
        result
    }
}
