//! Configuration for lsr
//!
//! Read from `config.toml` in `$LSR_CONFIG_DIR`, or `<config dir>/lsr/`,
//! unless an explicit path is given.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::bail_usage;
use crate::error::{LsrError, Result};

pub use types::{
    LsrConfig, OutputConfig, TraceConfig, DEFAULT_PATH_SEPARATOR, DEFAULT_STEP_PROMPT,
};

const CONFIG_DIR: &str = "lsr";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "LSR_CONFIG_DIR";

impl LsrConfig {
    /// Default location of the config file, if one can be determined
    pub fn default_path() -> Option<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };

        Some(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LsrError::io_operation("read config", path.display(), e))?;
        let config: LsrConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must exist. The default location is optional and
    /// falls back to built-in defaults when absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail_usage!(format!("config file not found: {}", path.display()));
            }
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}
