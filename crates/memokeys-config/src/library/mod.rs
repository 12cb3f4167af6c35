//! Shortcut library: a directory of shortcut JSON files plus a mode index.

mod loader;
mod paths;


pub use loader::{read_shortcut_file, LoadedShortcuts, ShortcutLibrary};
pub use paths::{resolve_data_dir, DATA_DIR_ENV};
