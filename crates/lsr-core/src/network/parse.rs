//! Parser for the network line format
//!
//! ```text
//! NAME: NEIGHBOR1:COST1 NEIGHBOR2:COST2 ...
//! ```

use crate::bail_malformed;
use crate::error::{LsrError, Result};

use super::node::Cost;

/// One parsed line: a node and the links it declares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineEntry {
    pub name: String,
    pub links: Vec<(String, Cost)>,
}

/// Parse a single network line.
///
/// Tokens may be separated by any run of whitespace. A line consisting of
/// only `NAME:` declares an isolated node.
pub fn parse_line(line: &str) -> Result<LineEntry> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(LsrError::EmptyInput {
            field: "line".to_string(),
        });
    }

    let mut tokens = trimmed.split_whitespace();
    let head = tokens.next().unwrap_or_default();

    let Some(name) = head.strip_suffix(':') else {
        bail_malformed!(trimmed, format!("node name '{}' must end with ':'", head));
    };
    let name = parse_name(trimmed, name)?;

    let mut links = Vec::new();
    for token in tokens {
        let Some((neighbor, cost)) = token.split_once(':') else {
            bail_malformed!(
                trimmed,
                format!("expected NEIGHBOR:COST, got '{}'", token)
            );
        };
        let neighbor = parse_name(trimmed, neighbor)?;
        let cost = cost.parse::<Cost>().map_err(|_| {
            LsrError::malformed_line(
                trimmed,
                format!("invalid cost '{}' for neighbor {}", cost, neighbor),
            )
        })?;
        links.push((neighbor, cost));
    }

    Ok(LineEntry { name, links })
}

fn parse_name(line: &str, name: &str) -> Result<String> {
    if name.is_empty() {
        bail_malformed!(line, "empty node name");
    }
    if name.contains(':') {
        bail_malformed!(line, format!("node name '{}' must not contain ':'", name));
    }
    Ok(name.to_string())
}
