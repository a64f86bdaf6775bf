use std::collections::BTreeMap;
use std::fmt;

/// Link cost between two nodes
pub type Cost = u32;

/// A named vertex and its weighted links.
///
/// Links reference neighbors by name and are kept in name order, so
/// iteration and display are deterministic. There is at most one link per
/// neighbor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    links: BTreeMap<String, Cost>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            links: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Links as `(neighbor, cost)` pairs in neighbor name order
    pub fn links(&self) -> impl Iterator<Item = (&str, Cost)> + '_ {
        self.links.iter().map(|(name, cost)| (name.as_str(), *cost))
    }

    /// Check if this node links to `neighbor`
    pub fn has(&self, neighbor: &str) -> bool {
        self.links.contains_key(neighbor)
    }

    /// Cost of the link to `neighbor`, if any
    pub fn cost_to(&self, neighbor: &str) -> Option<Cost> {
        self.links.get(neighbor).copied()
    }

    pub fn degree(&self) -> usize {
        self.links.len()
    }

    /// Add a one-way link entry. An existing entry keeps its cost.
    ///
    /// Returns true if a new entry was created.
    pub(crate) fn connect(&mut self, neighbor: &str, cost: Cost) -> bool {
        if self.has(neighbor) {
            return false;
        }
        self.links.insert(neighbor.to_string(), cost);
        true
    }

    /// Drop the one-way link entry to `neighbor`
    pub(crate) fn disconnect(&mut self, neighbor: &str) -> bool {
        self.links.remove(neighbor).is_some()
    }
}

/// Renders the line form `NAME: NEIGHBOR1:COST1 NEIGHBOR2:COST2`.
/// An isolated node renders as `NAME: ` with the trailing space.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, (neighbor, cost)) in self.links().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}:{}", neighbor, cost)?;
        }
        Ok(())
    }
}
