use anyhow::{Result, bail};
use std::path::Path;

use um_auth::AccessConfig;

pub fn run(base_dir: &Path) -> Result<()> {
    let config_path = AccessConfig::default_path(base_dir);
    if config_path.exists() {
        bail!("config already exists at {}", config_path.display());
    }

    let config = AccessConfig::default_config();
    config.save(&config_path)?;
    tracing::info!(path = %config_path.display(), "wrote default access config");

    println!("Config written to {}", config_path.display());
    println!("  Groups:     {}", config.groups.len());
    println!("  Principals: {}", config.principals.len());
    Ok(())
}
