//! Reading and writing network files (one network line per text line)

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{LsrError, Result};
use crate::trace_time;

use super::Network;

impl Network {
    /// Read a network file into a fresh network
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut network = Network::new();
        network.load_file(path)?;
        Ok(network)
    }

    /// Merge every non-blank line of a file into this network.
    ///
    /// Returns the number of lines applied. Lines before a malformed line
    /// stay applied.
    #[tracing::instrument(skip(self, path), fields(path = %path.display()))]
    pub fn load_file(&mut self, path: &Path) -> Result<usize> {
        let start = Instant::now();

        if !path.exists() {
            return Err(LsrError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = fs::read_to_string(path)
            .map_err(|e| LsrError::io_operation("read network", path.display(), e))?;

        let mut applied = 0;
        for (index, line) in content.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            self.load(line).map_err(|e| match e {
                LsrError::MalformedLine { line, reason } => LsrError::MalformedLine {
                    line,
                    reason: format!("line {}: {}", index + 1, reason),
                },
                other => other,
            })?;
            applied += 1;
        }

        trace_time!(start, "load_network", lines = applied, nodes = self.len());
        Ok(applied)
    }

    /// Write the serialized network to a file
    pub fn save_file(&self, path: &Path) -> Result<()> {
        fs::write(path, self.serialize())
            .map_err(|e| LsrError::io_operation("write network", path.display(), e))?;
        tracing::debug!(path = %path.display(), nodes = self.len(), "save_network");
        Ok(())
    }
}
