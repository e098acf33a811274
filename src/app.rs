use std::path::Path;

use tracing::info;

use crate::application::DashboardController;
use crate::domain::dashboard_config::DashboardConfig;
use crate::domain::error::Result;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::logging::init_tracing;

/// Load configuration from the environment, install logging and build the
/// controller a shell drives.
pub fn bootstrap() -> Result<DashboardController> {
    let config = ConfigService::load()?;
    Ok(start(config))
}

/// Same as [`bootstrap`], reading the TOML layer from `path`
pub fn bootstrap_from(path: impl AsRef<Path>) -> Result<DashboardController> {
    let config = ConfigService::load_from(path)?;
    Ok(start(config))
}

fn start(config: DashboardConfig) -> DashboardController {
    init_tracing(&config.log_filter);
    info!(
        image_delay_ms = config.image_delay_ms,
        ai_delay_ms = config.ai_delay_ms,
        numeric_inference = ?config.numeric_inference,
        "Dashboard core ready"
    );
    DashboardController::new(config)
}
