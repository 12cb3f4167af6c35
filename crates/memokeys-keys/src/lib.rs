//! Shortcut matching and live key tracking.
//!
//! - [`keymap`]: normalizing shortcut strings so icon and text forms compare equal.
//! - [`table`]: the combo to action table built from loaded shortcut data.
//! - [`tracker`]: the held-key state machine behind the live display.

pub mod keymap;
pub mod table;
pub mod tracker;

pub use keymap::{normalize, KeyCombo, Modifier, NamedKey};
pub use table::ShortcutTable;
pub use tracker::{ChordSink, ChordTracker, KeyId, KeyInput};
