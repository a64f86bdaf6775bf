//! LSR Core Library
//!
//! Core domain logic for the lsr link-state routing simulator: the weighted
//! network model and the Dijkstra path engine with its step-trace protocol.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod network;
pub mod route;
