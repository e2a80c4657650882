//! Core TOML config loading: read from path or platform default.

use crate::schema::NebulabunConfig;
use crate::validation;
use nebulabun_common::ConfigError;
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Missing fields take serde defaults. Validation problems are logged as a
/// warning and the parsed config is returned as-is, except that a zero
/// width or height is replaced by its default.
pub fn load_from_path(path: &Path) -> Result<NebulabunConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let mut config: NebulabunConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }
    if config.window.replace_zero_dimensions() {
        warn!(
            "zero window size in {}, using {}x{}",
            path.display(),
            config.window.width,
            config.window.height
        );
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/nebulabun/config.toml`
///
/// A missing file is not an error; built-in defaults are returned.
pub fn load_default() -> Result<NebulabunConfig, ConfigError> {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(e) => {
            debug!("{e}, using defaults");
            return Ok(NebulabunConfig::default());
        }
    };

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config found at {}, using defaults", path.display());
            Ok(NebulabunConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load an explicitly requested file, or the default location otherwise.
///
/// Unlike the default location, an explicit path must exist.
pub fn load(explicit: Option<&Path>) -> Result<NebulabunConfig, ConfigError> {
    match explicit {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}
