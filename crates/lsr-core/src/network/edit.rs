//! Incremental edit surface for front ends
//!
//! These mirror what a live editor does with a single text field: add a
//! line, remove a node by name, or break a chain of links such as `A>B>C`.

use serde::Serialize;
use tracing::debug;

use crate::bail_empty;
use crate::error::Result;

use super::{LineEntry, Network};

/// Separator between node names in a break chain
pub const CHAIN_SEPARATOR: char = '>';

/// Outcome of breaking one link of a chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkBreak {
    pub from: String,
    pub to: String,
    /// Whether a link actually existed and was removed
    pub removed: bool,
}

impl Network {
    /// Apply a single network line typed into an editor
    pub fn add_line(&mut self, text: &str) -> Result<LineEntry> {
        if text.trim().is_empty() {
            bail_empty!("line");
        }
        let entry = self.load(text)?;
        debug!(node = %entry.name, links = entry.links.len(), "add_line");
        Ok(entry)
    }

    /// Remove a node by name. Returns false if it did not exist.
    pub fn remove_node(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() {
            bail_empty!("node name");
        }
        Ok(self.remove(name))
    }

    /// Break every consecutive pair in a chain like `A>B>C` (A-B, then B-C)
    pub fn break_chain(&mut self, chain: &str) -> Result<Vec<LinkBreak>> {
        if chain.trim().is_empty() {
            bail_empty!("link chain");
        }

        let names: Vec<&str> = chain.split(CHAIN_SEPARATOR).map(str::trim).collect();
        let breaks = names
            .windows(2)
            .map(|pair| LinkBreak {
                from: pair[0].to_string(),
                to: pair[1].to_string(),
                removed: self.disconnect(pair[0], pair[1]),
            })
            .collect();
        Ok(breaks)
    }
}
