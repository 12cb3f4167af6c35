use indexmap::IndexSet;

use super::key::KeyId;

/// Keys currently held, in the order they went down.
#[derive(Debug, Clone, Default)]
pub struct PressedKeySet {
    keys: IndexSet<KeyId>,
}

impl PressedKeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` when the key was already held (auto-repeat).
    pub fn insert(&mut self, key: KeyId) -> bool {
        self.keys.insert(key)
    }

    /// Remove a key, keeping the order of the rest.
    pub fn remove(&mut self, key: &KeyId) -> bool {
        self.keys.shift_remove(key)
    }

    pub fn contains(&self, key: &KeyId) -> bool {
        self.keys.contains(key)
    }

    pub fn has_modifier(&self) -> bool {
        self.keys.iter().any(KeyId::is_modifier)
    }

    pub fn has_non_modifier(&self) -> bool {
        self.keys.iter().any(|k| !k.is_modifier())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyId> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
