//! Interactive single-step driver
//!
//! Pulls one discovery event at a time from the path engine and waits for
//! an acknowledgement line on stdin before pulling the next.

use std::io::{self, BufRead, Write};

use crate::commands::dispatch::CommandContext;
use lsr_core::error::Result;
use lsr_core::network::Network;
use lsr_core::route::Trace;

use super::human;

/// Pause point between discovery events
pub struct StepGate<R> {
    reader: R,
    pause: bool,
    prompt: String,
}

impl<R: BufRead> StepGate<R> {
    pub fn new(reader: R, pause: bool, prompt: impl Into<String>) -> Self {
        Self {
            reader,
            pause,
            prompt: prompt.into(),
        }
    }

    /// Block until a line is read. On end of input, stop pausing.
    pub fn wait(&mut self) -> Result<()> {
        if !self.pause {
            return Ok(());
        }

        io::stdout().flush()?;
        eprint!("{} ", self.prompt);
        io::stderr().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            tracing::debug!("stdin closed, continuing without pausing");
            self.pause = false;
        }
        Ok(())
    }

    #[cfg(test)]
    fn is_pausing(&self) -> bool {
        self.pause
    }
}

/// Run a single-step computation with human output
pub fn run(ctx: &CommandContext, network: &Network, source: &str, pause: bool) -> Result<()> {
    let mut trace = Trace::start(network, source)?;
    let stdin = io::stdin();
    let mut gate = StepGate::new(stdin.lock(), pause, ctx.config.trace.prompt.as_str());

    if !ctx.cli.quiet {
        println!("Steps");
    }
    for event in trace.by_ref() {
        println!("{}", human::format_event(&event, ctx.separator()));
        gate.wait()?;
    }

    let summary = trace.finish();
    if !ctx.cli.quiet {
        println!();
        println!("Summary table");
    }
    human::output_summary(ctx, &summary);
    Ok(())
}
