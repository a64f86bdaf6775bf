use serde::Serialize;

use crate::cli::StepMode;
use lsr_core::error::Result;
use lsr_core::route::{Computation, DiscoveryEvent, Route, TraceStats};

#[derive(Serialize)]
struct ComputeOutput<'a> {
    source: &'a str,
    mode: &'static str,
    routes: &'a [Route],
    stats: TraceStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    events: Option<&'a [DiscoveryEvent]>,
}

fn to_value(result: &Computation, mode: StepMode) -> Result<serde_json::Value> {
    let output = ComputeOutput {
        source: &result.summary.source,
        mode: mode.as_str(),
        routes: &result.summary.routes,
        stats: result.summary.stats,
        events: result.events.as_deref(),
    };
    Ok(serde_json::to_value(output)?)
}

/// Output in JSON format
pub fn output(result: &Computation, mode: StepMode) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&to_value(result, mode)?)?);
    Ok(())
}
