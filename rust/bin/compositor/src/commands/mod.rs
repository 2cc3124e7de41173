pub mod catalog;
pub mod generate;

use anyhow::Result;
use captcha_compositor::{CompositorConfig, RegistryReport};
use tracing::info;

/// Load the registry report named by the config.
fn load_report(config: &CompositorConfig) -> Result<RegistryReport> {
    let path = config.catalog.as_deref().ok_or_else(|| {
        anyhow::anyhow!("No catalog configured. Pass --catalog or set `catalog` in the config file.")
    })?;
    info!("Reading registry report {}", path.display());
    Ok(RegistryReport::load(path)?)
}
