//! Shortcut data file types.

use std::collections::BTreeMap;

use memokeys_common::{DataError, Platform};
use serde::{Deserialize, Serialize};

/// A shortcut data file as it appears on disk.
///
/// ```json
/// { "name": "Mac Basics", "shortcuts": [ { "id": "copy", "action": "Copy", "mac": "Cmd+C" } ] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortcutFile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub shortcuts: Option<Vec<ShortcutRecord>>,
}

/// One raw record inside a [`ShortcutFile`]. Every field is optional here;
/// [`ShortcutEntry::try_from`] enforces the required ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShortcutRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub windows: Option<String>,
    #[serde(default)]
    pub linux: Option<String>,
}

impl ShortcutRecord {
    /// Raw combo for one platform, ignoring blank strings.
    pub fn combo(&self, platform: Platform) -> Option<&str> {
        let raw = match platform {
            Platform::Mac => self.mac.as_deref(),
            Platform::Windows => self.windows.as_deref(),
            Platform::Linux => self.linux.as_deref(),
        };
        raw.filter(|s| !s.trim().is_empty())
    }
}

/// A validated shortcut definition. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutEntry {
    pub id: String,
    pub action: String,
    /// Raw combo strings keyed by platform. Never empty.
    pub keys_by_platform: BTreeMap<Platform, String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

impl ShortcutEntry {
    /// Combo written for exactly this platform.
    pub fn combo_for(&self, platform: Platform) -> Option<&str> {
        self.keys_by_platform.get(&platform).map(String::as_str)
    }

    /// Best available combo for `platform`, walking its fallback chain.
    ///
    /// Returns the platform the combo was actually written for alongside it.
    pub fn best_combo(&self, platform: Platform) -> Option<(Platform, &str)> {
        platform
            .fallback_chain()
            .into_iter()
            .find_map(|p| self.combo_for(p).map(|combo| (p, combo)))
    }
}

impl TryFrom<ShortcutRecord> for ShortcutEntry {
    type Error = DataError;

    fn try_from(record: ShortcutRecord) -> Result<Self, Self::Error> {
        let mut keys_by_platform = BTreeMap::new();
        for platform in Platform::ALL {
            if let Some(combo) = record.combo(platform) {
                keys_by_platform.insert(platform, combo.to_string());
            }
        }

        let id = record
            .id
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| DataError::Validation("shortcut record is missing 'id'".into()))?;
        let action = record
            .action
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| {
                DataError::Validation(format!("shortcut '{id}' is missing 'action'"))
            })?;

        if keys_by_platform.is_empty() {
            return Err(DataError::Validation(format!(
                "shortcut '{id}' has no mac/windows/linux combo"
            )));
        }

        Ok(Self {
            id,
            action,
            keys_by_platform,
            category: record.category,
            difficulty: record.difficulty,
        })
    }
}
