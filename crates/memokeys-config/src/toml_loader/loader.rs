use crate::schema::MemoKeysConfig;
use crate::validation;
use memokeys_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info, warn};

use super::paths::{create_default_config, default_config_path};

/// Read and parse one settings file.
///
/// Out-of-range values are reported but kept: a typo in `memokeys.toml`
/// should not stop a quiz from starting.
pub fn load_from_path(path: &Path) -> Result<MemoKeysConfig, ConfigError> {
    let text = read_settings(path)?;
    let config = parse_settings(path, &text)?;

    if let Err(e) = validation::validate_settings(&config) {
        warn!(path = %path.display(), "keeping out-of-range settings: {e}");
    }
    info!(path = %path.display(), "settings loaded");
    Ok(config)
}

/// Settings from the per-user location. A first run seeds that location
/// with the commented template and then reads it back.
pub fn load_default() -> Result<MemoKeysConfig, ConfigError> {
    let path = default_config_path()?;

    if !path.exists() {
        info!(path = %path.display(), "first run, seeding settings file");
        if let Err(e) = create_default_config(&path) {
            warn!("{e}; continuing with built-in settings");
            return Ok(MemoKeysConfig::default());
        }
    }
    load_from_path(&path)
}

fn read_settings(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        },
    })
}

fn parse_settings(path: &Path, text: &str) -> Result<MemoKeysConfig, ConfigError> {
    debug!(path = %path.display(), bytes = text.len(), "parsing settings");
    toml::from_str(text).map_err(|e| ConfigError::ParseError(format!("{}: {e}", path.display())))
}
