//! Schema types for shortcut data files, the mode index and the
//! `memokeys.toml` settings file.
//!
//! Settings structs use `serde(default)` so partial configs work. Shortcut
//! records are deserialized leniently and converted into validated
//! [`ShortcutEntry`] values one by one, so a single bad record does not
//! take the whole file down with it.

mod modes;
mod settings;
mod shortcut_file;

pub use modes::*;
pub use settings::*;
pub use shortcut_file::*;
