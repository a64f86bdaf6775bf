//! Result types produced by the path engine

use serde::Serialize;

/// How `compute` reports progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComputeMode {
    /// Compute all: summary only
    #[default]
    All,
    /// Single step: summary plus every discovery event in order
    SingleStep,
}

impl From<bool> for ComputeMode {
    fn from(trace: bool) -> Self {
        if trace {
            ComputeMode::SingleStep
        } else {
            ComputeMode::All
        }
    }
}

/// A strict improvement of a node's best known path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryEvent {
    /// 1-based position in the event stream
    pub step: usize,
    pub node: String,
    pub path: Vec<String>,
    pub cost: u64,
}

impl DiscoveryEvent {
    pub fn path_string(&self, separator: &str) -> String {
        self.path.join(separator)
    }
}

/// Final cheapest path from the source to one node
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub node: String,
    /// Node names from source to `node`; empty when unreachable
    pub path: Vec<String>,
    /// Total cost; `None` when unreachable
    pub cost: Option<u64>,
}

impl Route {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    pub fn path_string(&self, separator: &str) -> String {
        self.path.join(separator)
    }
}

/// Counters gathered while running the engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TraceStats {
    /// Outer loop iterations consumed (one per node)
    pub iterations: usize,
    /// Links examined for relaxation
    pub relaxation_checks: usize,
    /// Relaxations that strictly lowered a cost
    pub improvements: usize,
}

/// Routes to every node except the source, in name order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub source: String,
    pub routes: Vec<Route>,
    pub stats: TraceStats,
}

impl Summary {
    pub fn route(&self, node: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.node == node)
    }

    pub fn reachable_count(&self) -> usize {
        self.routes.iter().filter(|route| route.is_reachable()).count()
    }
}

/// Output of a single `compute` call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Computation {
    pub summary: Summary,
    /// Present only in single-step mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<DiscoveryEvent>>,
}
