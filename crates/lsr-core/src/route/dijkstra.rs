use tracing::{debug, trace};

use crate::error::{LsrError, Result};
use crate::network::{Cost, Network};
use crate::route::snapshot::Snapshot;
use crate::route::types::{ComputeMode, Computation, DiscoveryEvent, Route, Summary, TraceStats};

/// Position inside the relaxation loop of the node being expanded
#[derive(Debug, Clone, Copy)]
struct LinkCursor {
    node: usize,
    next: usize,
}

/// Lazily driven Dijkstra run over a network snapshot.
///
/// Each call to `next` advances the algorithm until the next strict
/// improvement and yields it as a [`DiscoveryEvent`]. The outer loop runs
/// exactly once per node; an iteration with no reachable unvisited node is
/// consumed without work. Dropping a trace part way leaves the network
/// untouched.
#[derive(Debug, Clone)]
pub struct Trace {
    graph: Snapshot,
    source: usize,
    dist: Vec<Option<u64>>,
    paths: Vec<Vec<usize>>,
    visited: Vec<bool>,
    iteration: usize,
    cursor: Option<LinkCursor>,
    stats: TraceStats,
}

impl Trace {
    /// Start a run from `source`. Fails if the source is not a node.
    pub fn start(network: &Network, source: &str) -> Result<Self> {
        let graph = Snapshot::of(network);
        let source_index = graph
            .index_of(source)
            .ok_or_else(|| LsrError::not_found("source node", source))?;

        let n = graph.len();
        let mut dist = vec![None; n];
        let mut paths = vec![Vec::new(); n];
        dist[source_index] = Some(0);
        paths[source_index].push(source_index);

        Ok(Self {
            graph,
            source: source_index,
            dist,
            paths,
            visited: vec![false; n],
            iteration: 0,
            cursor: None,
            stats: TraceStats::default(),
        })
    }

    pub fn source(&self) -> &str {
        self.graph.name(self.source)
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    /// True once every outer iteration has run and no links are pending
    pub fn is_finished(&self) -> bool {
        self.cursor.is_none() && self.iteration >= self.graph.len()
    }

    /// Run any remaining steps silently and build the summary
    pub fn finish(mut self) -> Summary {
        self.by_ref().for_each(drop);
        self.summary()
    }

    /// Unvisited node with the strictly smallest finite distance.
    /// Ties go to the lowest index, i.e. the first name in order.
    fn select_next(&self) -> Option<usize> {
        let mut best: Option<(usize, u64)> = None;
        for (index, dist) in self.dist.iter().enumerate() {
            if self.visited[index] {
                continue;
            }
            if let Some(d) = *dist {
                if best.is_none_or(|(_, b)| d < b) {
                    best = Some((index, d));
                }
            }
        }
        best.map(|(index, _)| index)
    }

    fn relax(&mut self, from: usize, to: usize, cost: Cost) -> Option<DiscoveryEvent> {
        self.stats.relaxation_checks += 1;

        let candidate = self.dist[from]? + u64::from(cost);
        if self.dist[to].is_some_and(|current| candidate >= current) {
            return None;
        }

        self.dist[to] = Some(candidate);
        let mut path = self.paths[from].clone();
        path.push(to);
        self.paths[to] = path;
        self.stats.improvements += 1;

        let event = DiscoveryEvent {
            step: self.stats.improvements,
            node: self.graph.name(to).to_string(),
            path: self.path_names(to),
            cost: candidate,
        };
        trace!(node = %event.node, cost = candidate, step = event.step, "discovery");
        Some(event)
    }

    fn path_names(&self, index: usize) -> Vec<String> {
        self.paths[index]
            .iter()
            .map(|&i| self.graph.name(i).to_string())
            .collect()
    }

    fn summary(&self) -> Summary {
        let routes = (0..self.graph.len())
            .filter(|&index| index != self.source)
            .map(|index| Route {
                node: self.graph.name(index).to_string(),
                path: self.path_names(index),
                cost: self.dist[index],
            })
            .collect();

        Summary {
            source: self.source().to_string(),
            routes,
            stats: self.stats,
        }
    }
}

impl Iterator for Trace {
    type Item = DiscoveryEvent;

    fn next(&mut self) -> Option<DiscoveryEvent> {
        loop {
            if let Some(cursor) = self.cursor {
                if let Some(&(to, cost)) = self.graph.links(cursor.node).get(cursor.next) {
                    self.cursor = Some(LinkCursor {
                        next: cursor.next + 1,
                        ..cursor
                    });
                    if let Some(event) = self.relax(cursor.node, to, cost) {
                        return Some(event);
                    }
                    continue;
                }
                self.cursor = None;
            }

            if self.iteration >= self.graph.len() {
                return None;
            }
            self.iteration += 1;
            self.stats.iterations += 1;

            if let Some(current) = self.select_next() {
                self.visited[current] = true;
                self.cursor = Some(LinkCursor {
                    node: current,
                    next: 0,
                });
            }
        }
    }
}

/// Compute shortest paths from `source` to every other node.
///
/// In single-step mode the discovery events are collected in the exact
/// order the relaxations happened. Use [`Trace`] directly to consume them
/// one at a time.
#[tracing::instrument(skip(network), fields(nodes = network.len()))]
pub fn compute(network: &Network, source: &str, mode: ComputeMode) -> Result<Computation> {
    let mut trace = Trace::start(network, source)?;

    let events = match mode {
        ComputeMode::SingleStep => Some(trace.by_ref().collect::<Vec<_>>()),
        ComputeMode::All => None,
    };
    let summary = trace.finish();

    debug!(
        iterations = summary.stats.iterations,
        relaxation_checks = summary.stats.relaxation_checks,
        improvements = summary.stats.improvements,
        reachable = summary.reachable_count(),
        "compute_done"
    );

    Ok(Computation { summary, events })
}
