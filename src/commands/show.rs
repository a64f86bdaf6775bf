//! Show and nodes commands: read-only views of a network file

use std::path::Path;

use serde::Serialize;

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::output_by_format_result;
use lsr_core::error::Result;
use lsr_core::network::{Cost, Network};

#[derive(Serialize)]
struct LinkJson<'a> {
    neighbor: &'a str,
    cost: Cost,
}

#[derive(Serialize)]
struct NodeJson<'a> {
    name: &'a str,
    links: Vec<LinkJson<'a>>,
}

fn network_json(network: &Network) -> serde_json::Value {
    let nodes: Vec<NodeJson> = network
        .nodes()
        .map(|node| NodeJson {
            name: node.name(),
            links: node
                .links()
                .map(|(neighbor, cost)| LinkJson { neighbor, cost })
                .collect(),
        })
        .collect();

    serde_json::json!({
        "nodes": nodes,
        "node_count": network.len(),
        "link_count": network.link_count(),
    })
}

/// Records: one `N` line per node, one `L` line per undirected link
fn network_records(network: &Network) -> Vec<String> {
    let mut lines = vec![format!(
        "H lsr=1 command=show nodes={} links={}",
        network.len(),
        network.link_count()
    )];
    for node in network.nodes() {
        lines.push(format!("N name={} degree={}", node.name(), node.degree()));
    }
    for node in network.nodes() {
        for (neighbor, cost) in node.links() {
            if node.name() <= neighbor {
                lines.push(format!("L from={} to={} cost={}", node.name(), neighbor, cost));
            }
        }
    }
    lines
}

/// Execute the show command
pub fn execute_show(ctx: &CommandContext, file: &Path) -> Result<()> {
    let network = Network::from_file(file)?;
    trace_command!(ctx.cli, ctx.start, "load_network");

    output_by_format_result!(ctx.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&network_json(&network))?);
            Ok(())
        },
        human => {
            if !network.is_empty() {
                println!("{}", network.serialize());
            }
        },
        records => {
            for line in network_records(&network) {
                println!("{}", line);
            }
        }
    )
}

/// Execute the nodes command
pub fn execute_nodes(ctx: &CommandContext, file: &Path) -> Result<()> {
    let network = Network::from_file(file)?;
    trace_command!(ctx.cli, ctx.start, "load_network");
    let names = network.names();

    output_by_format_result!(ctx.format,
        json => {
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({ "nodes": names }))?);
            Ok(())
        },
        human => {
            for name in &names {
                println!("{}", name);
            }
        },
        records => {
            for name in &names {
                println!("N name={}", name);
            }
        }
    )
}
