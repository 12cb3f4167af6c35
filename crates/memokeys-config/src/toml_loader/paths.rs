use memokeys_common::ConfigError;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

const APP_DIR: &str = "memokeys";
const FILE_NAME: &str = "memokeys.toml";

/// `~/.config/memokeys/memokeys.toml` on Linux,
/// `~/Library/Application Support/memokeys/memokeys.toml` on macOS.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| settings_path_in(&base))
        .ok_or_else(|| ConfigError::Read {
            path: PathBuf::from(FILE_NAME),
            message: "no per-user config directory on this platform".into(),
        })
}

/// Where the settings file lives under a config root.
pub(crate) fn settings_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(FILE_NAME)
}

/// Seed `path` with the commented template. An existing file is left
/// alone, so a hand-edited config is never replaced.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |target: &Path, e: std::io::Error| ConfigError::Write {
        path: target.to_path_buf(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| write_error(parent, e))?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!(path = %path.display(), "settings file already present");
            return Ok(());
        }
        Err(e) => return Err(write_error(path, e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| write_error(path, e))?;

    info!(path = %path.display(), "wrote default settings");
    Ok(())
}
