//! Compute command: shortest paths from a source node

mod human;
mod json;
mod records;
mod step;

use crate::cli::{ComputeArgs, OutputFormat, StepMode};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::output_by_format_result;
use lsr_core::error::Result;
use lsr_core::network::Network;
use lsr_core::route;

/// Execute the compute command
pub fn execute(ctx: &CommandContext, args: &ComputeArgs) -> Result<()> {
    let network = Network::from_file(&args.file)?;
    trace_command!(ctx.cli, ctx.start, "load_network");

    // Interactive stepping only makes sense for the human listing
    if ctx.format == OutputFormat::Human && args.mode == StepMode::SingleStep {
        let pause = ctx.config.trace.pause && !args.no_pause;
        return step::run(ctx, &network, &args.source, pause);
    }

    let result = route::compute(&network, &args.source, args.mode.into())?;
    trace_command!(ctx.cli, ctx.start, "compute");

    output_by_format_result!(ctx.format,
        json => json::output(&result, args.mode),
        human => { human::output_summary(ctx, &result.summary); },
        records => { records::output(ctx, &result, args.mode); }
    )
}
