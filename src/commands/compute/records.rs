use crate::cli::StepMode;
use crate::commands::dispatch::CommandContext;
use lsr_core::format::escape_quotes;
use lsr_core::route::Computation;

fn render(result: &Computation, mode: StepMode, separator: &str) -> Vec<String> {
    let summary = &result.summary;
    let mut lines = vec![format!(
        "H lsr=1 command=compute source={} mode={} nodes={} reachable={}",
        summary.source,
        mode.as_str(),
        summary.routes.len() + 1,
        summary.reachable_count()
    )];

    for event in result.events.iter().flatten() {
        lines.push(format!(
            "E step={} node={} cost={} path=\"{}\"",
            event.step,
            event.node,
            event.cost,
            escape_quotes(&event.path_string(separator))
        ));
    }

    for route in &summary.routes {
        let cost = route
            .cost
            .map(|c| c.to_string())
            .unwrap_or_else(|| "unreachable".to_string());
        lines.push(format!(
            "R node={} cost={} path=\"{}\"",
            route.node,
            cost,
            escape_quotes(&route.path_string(separator))
        ));
    }

    let stats = summary.stats;
    lines.push(format!(
        "S iterations={} checks={} improvements={}",
        stats.iterations, stats.relaxation_checks, stats.improvements
    ));
    lines
}

/// Output in records format
pub fn output(ctx: &CommandContext, result: &Computation, mode: StepMode) {
    for line in render(result, mode, ctx.separator()) {
        println!("{}", line);
    }
}
