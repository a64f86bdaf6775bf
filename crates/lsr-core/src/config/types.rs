//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;

/// Default separator between node names in a rendered path
pub const DEFAULT_PATH_SEPARATOR: &str = ">";

/// Default acknowledgement prompt shown after each discovery in step mode
pub const DEFAULT_STEP_PROMPT: &str = "[press enter to continue]";

/// Top-level lsr configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LsrConfig {
    /// Output rendering options
    #[serde(default)]
    pub output: OutputConfig,

    /// Step-trace behavior
    #[serde(default)]
    pub trace: TraceConfig,
}

/// Output rendering options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Separator used when joining path node names
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Output format used when `--format` is not given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

/// Step-trace behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceConfig {
    /// Wait for an acknowledgement line after each discovery event
    #[serde(default = "default_pause")]
    pub pause: bool,

    /// Prompt printed while waiting
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            format: None,
        }
    }
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            pause: default_pause(),
            prompt: default_prompt(),
        }
    }
}

fn default_separator() -> String {
    DEFAULT_PATH_SEPARATOR.to_string()
}

fn default_pause() -> bool {
    true
}

fn default_prompt() -> String {
    DEFAULT_STEP_PROMPT.to_string()
}
