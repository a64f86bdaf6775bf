//! CLI commands for lsr

pub mod compute;
pub mod dispatch;
pub mod edit;
pub mod show;
