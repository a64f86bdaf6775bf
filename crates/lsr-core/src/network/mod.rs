//! Weighted, undirected network of named nodes
//!
//! Nodes are keyed by name and kept in name order. Every mutation entry
//! point keeps the link relation symmetric: A links to B with cost c iff B
//! links to A with cost c.

pub mod edit;
pub mod io;
pub mod node;
pub mod parse;

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::error::Result;

pub use edit::LinkBreak;
pub use node::{Cost, Node};
pub use parse::{parse_line, LineEntry};

/// Set of uniquely named nodes with symmetric weighted links
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Network {
    nodes: BTreeMap<String, Node>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a node with exactly this name exists
    pub fn has(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Add a node by name, or return the existing one
    pub fn add(&mut self, name: &str) -> &Node {
        if !self.nodes.contains_key(name) {
            trace!(node = name, "add_node");
        }
        self.nodes
            .entry(name.to_string())
            .or_insert_with(|| Node::new(name))
    }

    /// Link `a` and `b` in both directions, creating missing endpoints.
    ///
    /// If the two are already linked nothing changes, including the cost:
    /// the first link written wins. Returns true if a link was created.
    pub fn connect(&mut self, a: &str, b: &str, cost: Cost) -> bool {
        self.add(a);
        self.add(b);

        if self.nodes.get(a).is_some_and(|node| node.has(b)) {
            trace!(a, b, cost, "connect_existing");
            return false;
        }

        if let Some(node) = self.nodes.get_mut(a) {
            node.connect(b, cost);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            node.connect(a, cost);
        }
        trace!(a, b, cost, "connect");
        true
    }

    /// Remove the link between `a` and `b` in both directions.
    ///
    /// No-op when either node is absent or they are not linked.
    pub fn disconnect(&mut self, a: &str, b: &str) -> bool {
        if !self.has(a) || !self.has(b) {
            return false;
        }

        let mut removed = false;
        if let Some(node) = self.nodes.get_mut(a) {
            removed |= node.disconnect(b);
        }
        if let Some(node) = self.nodes.get_mut(b) {
            removed |= node.disconnect(a);
        }
        if removed {
            debug!(a, b, "disconnect");
        }
        removed
    }

    /// Alias of [`Network::disconnect`]
    pub fn break_link(&mut self, a: &str, b: &str) -> bool {
        self.disconnect(a, b)
    }

    /// Detach a node from all its neighbors and delete it. No-op if absent.
    pub fn remove(&mut self, name: &str) -> bool {
        let Some(removed) = self.nodes.remove(name) else {
            return false;
        };

        for (neighbor, _) in removed.links() {
            if let Some(node) = self.nodes.get_mut(neighbor) {
                node.disconnect(name);
            }
        }
        debug!(node = name, links = removed.degree(), "remove_node");
        true
    }

    /// All node names in name order
    pub fn names(&self) -> Vec<String> {
        self.nodes.keys().cloned().collect()
    }

    /// All nodes in name order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of undirected links
    pub fn link_count(&self) -> usize {
        let mut ends = 0;
        let mut loops = 0;
        for node in self.nodes.values() {
            ends += node.degree();
            if node.has(node.name()) {
                loops += 1;
            }
        }
        (ends - loops) / 2 + loops
    }

    /// Reset to an empty network
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// One line per node in name order, joined by newlines
    pub fn serialize(&self) -> String {
        self.to_string()
    }

    /// Apply one line of the network format as `add` + `connect` calls.
    ///
    /// The line is parsed in full before anything is applied, so a
    /// malformed line leaves the network unchanged.
    pub fn load(&mut self, line: &str) -> Result<LineEntry> {
        let entry = parse_line(line)?;
        self.apply(&entry);
        Ok(entry)
    }

    /// Apply an already parsed line
    pub fn apply(&mut self, entry: &LineEntry) {
        self.add(&entry.name);
        for (neighbor, cost) in &entry.links {
            self.connect(&entry.name, neighbor, *cost);
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.values().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
