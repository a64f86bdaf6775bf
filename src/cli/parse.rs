//! Value parsers for clap arguments

use lsr_core::format::OutputFormat;

/// Parse an output format name for clap (case-insensitive)
pub fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
