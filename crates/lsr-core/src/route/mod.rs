//! Shortest-path computation over a network
//!
//! - `snapshot`: index-based copy of a network taken at compute time
//! - `dijkstra`: the step-trace state machine and `compute` entry point
//! - `types`: summary, route and discovery event types

pub mod dijkstra;
pub mod snapshot;
pub mod types;

pub use dijkstra::{compute, Trace};
pub use snapshot::Snapshot;
pub use types::{ComputeMode, Computation, DiscoveryEvent, Route, Summary, TraceStats};
