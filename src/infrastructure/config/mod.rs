use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::debug;

use crate::domain::dataset::IngestConfig;
use crate::domain::error::{AppError, Result};

pub const DEFAULT_CONFIG_FILE: &str = "charter.toml";
pub const ENV_PREFIX: &str = "CHARTER_";

/// Layers defaults, an optional TOML file and `CHARTER_*` environment
/// variables, in increasing precedence.
pub struct ConfigService {
    config_path: PathBuf,
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE)
    }
}

impl ConfigService {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(IngestConfig::default()))
            .merge(Toml::file(&self.config_path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load(&self) -> Result<IngestConfig> {
        let config = Self::extract(self.figment())?;
        debug!(
            config_path = %self.config_path.display(),
            numeric_threshold = config.numeric_threshold,
            "Ingestion config loaded"
        );
        Ok(config)
    }

    /// Extract and validate an `IngestConfig` from any figment.
    pub fn extract(figment: Figment) -> Result<IngestConfig> {
        let config: IngestConfig = figment
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid ingestion config: {}", e)))?;

        Ok(config)
    }
}
