use std::collections::BTreeMap;

use memokeys_common::Platform;
use memokeys_config::{LoadedShortcuts, ShortcutEntry};
use tracing::debug;

use crate::keymap::{icons_to_text, normalize};

/// Maps normalized combos to action descriptions for one platform.
///
/// Built from loaded [`ShortcutEntry`] values and rebuilt whenever the
/// mode or platform changes.
#[derive(Debug, Clone)]
pub struct ShortcutTable {
    platform: Platform,
    bindings: BTreeMap<String, String>,
}

impl ShortcutTable {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            bindings: BTreeMap::new(),
        }
    }

    /// Build the table for `platform`.
    ///
    /// Entries without a combo for `platform` use the first one found along
    /// [`Platform::fallback_chain`]. When two entries normalize to the same
    /// combo the later one wins.
    pub fn build(entries: &[ShortcutEntry], platform: Platform) -> Self {
        let mut table = Self::new(platform);
        for entry in entries {
            let Some((source, combo)) = entry.best_combo(platform) else {
                continue;
            };
            if source != platform {
                debug!(
                    "shortcut '{}' has no {platform} combo, using {source}",
                    entry.id
                );
            }
            table.insert(combo, &entry.action);
        }
        table
    }

    pub fn from_loaded(loaded: &LoadedShortcuts, platform: Platform) -> Self {
        Self::build(&loaded.entries, platform)
    }

    /// Insert one binding. Combos that normalize to nothing are ignored.
    pub fn insert(&mut self, combo: &str, action: &str) {
        let key = normalize(combo);
        if key.is_empty() {
            debug!("ignoring empty combo for '{action}'");
            return;
        }
        if let Some(previous) = self.bindings.insert(key.clone(), action.to_string()) {
            if previous != action {
                debug!("'{key}' rebound from '{previous}' to '{action}'");
            }
        }
    }

    /// Description for a combo typed in icon or text form.
    pub fn lookup(&self, raw: &str) -> Option<&str> {
        self.bindings
            .get(&normalize(raw))
            .or_else(|| self.bindings.get(&normalize(&icons_to_text(raw))))
            .map(String::as_str)
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.lookup(raw).is_some()
    }

    /// Normalized combo bound to `action` (reverse lookup). The smallest
    /// combo wins when several share an action.
    pub fn combo_for_action(&self, action: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, a)| a.as_str() == action)
            .map(|(combo, _)| combo.as_str())
    }

    /// Bindings in normalized-combo order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
