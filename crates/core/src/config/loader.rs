//! Loads `qrweave.toml` from a project directory.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::models::AppConfig;
use std::path::Path;

/// Name of the configuration file looked up inside the project directory.
pub const CONFIG_FILE: &str = "qrweave.toml";

/// Load configuration from `<dir>/qrweave.toml`.
///
/// A missing file is not an error; the built-in defaults are returned.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, fails to
/// parse, or contains out-of-range values.
pub async fn load_config(dir: &Path) -> ConfigResult<AppConfig> {
    let path = dir.join(CONFIG_FILE);

    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let contents = tokio::fs::read_to_string(&path)
        .await
        .map_err(|source| ConfigError::FileRead {
            path: path.clone(),
            source,
        })?;

    let config: AppConfig =
        toml::from_str(&contents).map_err(|source| ConfigError::TomlParse {
            path: path.clone(),
            source,
        })?;

    validate(&config, &path)?;
    Ok(config)
}

fn validate(config: &AppConfig, path: &Path) -> ConfigResult<()> {
    if config.renderer.size == 0 {
        return Err(ConfigError::InvalidConfig {
            path: path.to_path_buf(),
            reason: "renderer.size must be greater than zero".to_string(),
        });
    }
    Ok(())
}
