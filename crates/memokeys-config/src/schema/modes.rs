//! Mode index types (`modes.json`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// File name of the mode index inside a shortcut library root.
pub const MODES_FILE: &str = "modes.json";

/// The `modes.json` document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModeIndex {
    #[serde(default)]
    pub modes: BTreeMap<String, ModeInfo>,
}

/// A named, curated subset of shortcut files.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModeInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Paths relative to the library root.
    #[serde(default)]
    pub files: Vec<String>,
}
