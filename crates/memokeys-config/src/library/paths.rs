//! Shortcut library root resolution.

use std::path::{Path, PathBuf};

use crate::schema::DataConfig;

/// Environment variable that overrides the configured data directory.
pub const DATA_DIR_ENV: &str = "MEMOKEYS_DATA_DIR";

/// Pick the library root: explicit override, then `MEMOKEYS_DATA_DIR`,
/// then the settings file.
pub fn resolve_data_dir(override_dir: Option<&Path>, data: &DataConfig) -> PathBuf {
    if let Some(dir) = override_dir {
        return dir.to_path_buf();
    }
    match std::env::var_os(DATA_DIR_ENV) {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => data.dir.clone(),
    }
}
