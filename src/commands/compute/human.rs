use crate::commands::dispatch::CommandContext;
use lsr_core::route::{DiscoveryEvent, Route, Summary};

/// Cost column for a route, `unreachable` when there is no path
fn cost_label(cost: Option<u64>) -> String {
    match cost {
        Some(cost) => cost.to_string(),
        None => "unreachable".to_string(),
    }
}

pub fn format_route(route: &Route, separator: &str) -> String {
    format!(
        "{}: Path: {} Cost: {}",
        route.node,
        route.path_string(separator),
        cost_label(route.cost)
    )
}

pub fn format_event(event: &DiscoveryEvent, separator: &str) -> String {
    format!(
        "Found {}: Path: {} Cost: {}",
        event.node,
        event.path_string(separator),
        event.cost
    )
}

/// Print `Source X` followed by one line per destination
pub fn output_summary(ctx: &CommandContext, summary: &Summary) {
    println!("Source {}", summary.source);
    for route in &summary.routes {
        println!("{}", format_route(route, ctx.separator()));
    }
}
