//! Edit commands: add a line, remove a node, break links
//!
//! Each command loads the network file, applies one edit and writes the
//! file back.

use std::path::Path;

use lsr_core::error::Result;
use lsr_core::network::{LinkBreak, Network};

use crate::commands::dispatch::{trace_command, CommandContext};
use crate::output_by_format_result;

/// Open a file for editing. `add` may start a new file.
fn open(ctx: &CommandContext, file: &Path, create: bool) -> Result<Network> {
    let network = if create && !file.exists() {
        tracing::debug!(path = %file.display(), "new_network");
        Network::new()
    } else {
        Network::from_file(file)?
    };
    trace_command!(ctx.cli, ctx.start, "load_network");
    Ok(network)
}

fn save(ctx: &CommandContext, network: &Network, file: &Path) -> Result<()> {
    network.save_file(file)?;
    trace_command!(ctx.cli, ctx.start, "save_network");
    Ok(())
}

/// Execute the add command
pub fn execute_add(ctx: &CommandContext, file: &Path, line: &str) -> Result<()> {
    let mut network = open(ctx, file, true)?;
    let entry = network.add_line(line)?;
    save(ctx, &network, file)?;

    output_by_format_result!(ctx.format,
        json => {
            let links: Vec<serde_json::Value> = entry
                .links
                .iter()
                .map(|(neighbor, cost)| serde_json::json!({ "neighbor": neighbor, "cost": cost }))
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "added": entry.name,
                    "links": links,
                    "node_count": network.len(),
                }))?
            );
            Ok(())
        },
        human => {
            if !ctx.cli.quiet {
                println!("Added node {}", line.trim());
            }
        },
        records => {
            println!(
                "H lsr=1 command=add node={} links={} nodes={}",
                entry.name,
                entry.links.len(),
                network.len()
            );
        }
    )
}

/// Execute the remove command
pub fn execute_remove(ctx: &CommandContext, file: &Path, name: &str) -> Result<()> {
    let mut network = open(ctx, file, false)?;
    let removed = network.remove_node(name)?;
    let name = name.trim();
    if removed {
        save(ctx, &network, file)?;
    }

    output_by_format_result!(ctx.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "node": name,
                    "removed": removed,
                }))?
            );
            Ok(())
        },
        human => {
            if !ctx.cli.quiet {
                if removed {
                    println!("Removed node {}", name);
                } else {
                    println!("Node {} does not exist", name);
                }
            }
        },
        records => {
            println!("H lsr=1 command=remove node={} removed={}", name, removed);
        }
    )
}

fn describe_break(link: &LinkBreak) -> String {
    if link.removed {
        format!("Removed link {}>{}", link.from, link.to)
    } else {
        format!("No link {}>{}", link.from, link.to)
    }
}

/// Execute the break command
pub fn execute_break(ctx: &CommandContext, file: &Path, chain: &str) -> Result<()> {
    let mut network = open(ctx, file, false)?;
    let breaks = network.break_chain(chain)?;
    if breaks.iter().any(|b| b.removed) {
        save(ctx, &network, file)?;
    }

    output_by_format_result!(ctx.format,
        json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "links": breaks }))?
            );
            Ok(())
        },
        human => {
            if !ctx.cli.quiet {
                for link in &breaks {
                    println!("{}", describe_break(link));
                }
            }
        },
        records => {
            println!("H lsr=1 command=break pairs={}", breaks.len());
            for link in &breaks {
                println!(
                    "B from={} to={} removed={}",
                    link.from, link.to, link.removed
                );
            }
        }
    )
}
