use std::collections::HashMap;

use crate::network::{Cost, Network};

/// Immutable, index-addressed copy of a network.
///
/// Node indices follow the network's name order and each adjacency list
/// follows neighbor name order, which fixes the tie-break and relaxation
/// order of the path engine.
#[derive(Debug, Clone)]
pub struct Snapshot {
    names: Vec<String>,
    adjacency: Vec<Vec<(usize, Cost)>>,
}

impl Snapshot {
    pub fn of(network: &Network) -> Self {
        let names = network.names();
        let index: HashMap<&str, usize> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();

        let adjacency = network
            .nodes()
            .map(|node| {
                node.links()
                    .filter_map(|(neighbor, cost)| index.get(neighbor).map(|&k| (k, cost)))
                    .collect()
            })
            .collect();

        Self { names, adjacency }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .ok()
    }

    pub fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Outgoing `(neighbor index, cost)` pairs of a node
    pub fn links(&self, index: usize) -> &[(usize, Cost)] {
        &self.adjacency[index]
    }
}
