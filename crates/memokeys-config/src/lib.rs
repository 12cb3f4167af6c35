//! MemoKeys data and settings.
//!
//! Reads shortcut JSON files and the `modes.json` index from a shortcut
//! library directory, validates them, and loads the `memokeys.toml`
//! settings file. All settings sections default, so partial files work.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use memokeys_config::{load_settings, ShortcutLibrary};
//!
//! let settings = load_settings(None).expect("failed to load settings");
//! let library = ShortcutLibrary::new(&settings.data.dir);
//! let loaded = library.load(settings.data.mode.as_deref()).expect("no library");
//! println!("{} shortcuts", loaded.len());
//! ```

pub mod library;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use library::{resolve_data_dir, LoadedShortcuts, ShortcutLibrary};
pub use schema::{MemoKeysConfig, ModeInfo, ShortcutEntry, ShortcutFile};

use memokeys_common::ConfigError;
use std::path::Path;

/// Load settings from an explicit path, or from the platform default
/// location when `path` is `None`.
pub fn load_settings(path: Option<&Path>) -> Result<MemoKeysConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}
