mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./mediatriage.toml",
        "~/.config/mediatriage/config.toml",
        "/etc/mediatriage/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.tool.endpoint.trim().is_empty() {
        anyhow::bail!("Re-encode tool endpoint cannot be empty");
    }

    if config.limits.max_size_gib <= 0.0 || !config.limits.max_size_gib.is_finite() {
        anyhow::bail!(
            "Size threshold must be a positive number of GiB, got {}",
            config.limits.max_size_gib
        );
    }

    if config.limits.supported_containers.is_empty() {
        anyhow::bail!("Supported container list cannot be empty");
    }

    if let Some(manifest) = &config.catalog.manifest {
        if !manifest.exists() {
            tracing::warn!("Catalog manifest does not exist: {:?}", manifest);
        }
    }

    Ok(())
}
