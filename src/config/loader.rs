//! Configuration loader (Figment-based).
//!
//! Resolution chain: built-in defaults → `archlens.toml` in the working
//! directory (or an explicit path) → `ARCHLENS_*` environment variables.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use tracing::debug;

use super::AnalyzerConfig;
use crate::types::{ArchError, Result};

/// Default project config filename.
pub const CONFIG_FILE: &str = "archlens.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with the full resolution chain.
    pub fn load() -> Result<AnalyzerConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AnalyzerConfig::default()));

        let project_path = Path::new(CONFIG_FILE);
        if project_path.exists() {
            debug!("loading project config from {}", project_path.display());
            figment = figment.merge(Toml::file(project_path));
        }

        figment = figment.merge(Env::prefixed("ARCHLENS_"));

        let config: AnalyzerConfig = figment
            .extract()
            .map_err(|e| ArchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a specific file only (plus defaults).
    pub fn load_from_file(path: &Path) -> Result<AnalyzerConfig> {
        let config: AnalyzerConfig = Figment::new()
            .merge(Serialized::defaults(AnalyzerConfig::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| ArchError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}
