//! Analyzer configuration.
//!
//! The engine itself takes configuration as a plain value; the loader in
//! [`loader`] is a convenience for hosts that want file/env resolution.

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_GRAPH_MODULES, DEFAULT_SAMPLE_SIZE};
use crate::types::{ArchError, Result};

pub use loader::ConfigLoader;

/// Tuning knobs for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Files read and analyzed per language per run.
    pub sample_size: usize,
    /// Cap on project modules admitted into the dependency graph.
    pub max_graph_modules: usize,
    /// Files larger than this are skipped during extraction.
    pub max_file_size: u64,
    /// Extra ignore globs, unioned with patterns translated from the
    /// project's own ignore file.
    pub ignore: Vec<String>,
    /// Optional wall-clock budget for the whole run.
    pub deadline_secs: Option<u64>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            max_graph_modules: DEFAULT_MAX_GRAPH_MODULES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            ignore: Vec::new(),
            deadline_secs: None,
        }
    }
}

impl AnalyzerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.sample_size == 0 {
            return Err(ArchError::Config("sample_size must be at least 1".into()));
        }
        if self.max_graph_modules == 0 {
            return Err(ArchError::Config(
                "max_graph_modules must be at least 1".into(),
            ));
        }
        if self.deadline_secs == Some(0) {
            return Err(ArchError::Config(
                "deadline_secs must be positive when set".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.sample_size, 50);
        assert_eq!(config.max_graph_modules, 200);
    }

    #[test]
    fn test_validate_rejects_zero_sample() {
        let config = AnalyzerConfig {
            sample_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_deadline() {
        let config = AnalyzerConfig {
            deadline_secs: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
