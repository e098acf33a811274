use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::debug;

use crate::domain::dashboard_config::DashboardConfig;
use crate::domain::error::{AppError, Result};

/// Default config file, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "datalens.toml";

/// Prefix of environment overrides, e.g. `DATALENS_AI_DELAY_MS=500`
pub const ENV_PREFIX: &str = "DATALENS_";

pub struct ConfigService;

impl ConfigService {
    pub fn load() -> Result<DashboardConfig> {
        Self::load_from(DEFAULT_CONFIG_FILE)
    }

    /// Defaults, then the TOML file at `path` if it exists, then
    /// `DATALENS_*` variables (a `.env` file is read first)
    pub fn load_from(path: impl AsRef<Path>) -> Result<DashboardConfig> {
        let path = path.as_ref();
        if let Ok(env_file) = dotenvy::dotenv() {
            debug!(env_file = %env_file.display(), "Loaded .env file");
        }

        let config: DashboardConfig = Figment::from(Serialized::defaults(DashboardConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|e| AppError::ConfigError(format!("Failed to load configuration: {}", e)))?;

        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid configuration: {}", e)))?;

        debug!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }
}
