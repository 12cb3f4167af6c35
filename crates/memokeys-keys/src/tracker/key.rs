use std::fmt;

use memokeys_common::DisplayMode;

use crate::keymap::{Modifier, NamedKey};

/// A key as reported by a keyboard hook: either the printable character
/// it produced or the name of a special key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    Named(String),
}

impl KeyInput {
    /// One-character strings become [`KeyInput::Char`], anything else
    /// [`KeyInput::Named`].
    pub fn parse(raw: &str) -> Self {
        let mut chars = raw.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => KeyInput::Char(c),
            _ => KeyInput::Named(raw.to_string()),
        }
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        KeyInput::Char(c)
    }
}

impl From<&str> for KeyInput {
    fn from(raw: &str) -> Self {
        KeyInput::parse(raw)
    }
}

impl fmt::Display for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyInput::Char(c) => write!(f, "{c}"),
            KeyInput::Named(name) => f.write_str(name),
        }
    }
}

/// Canonical identity of a held key.
///
/// Every alias of a key resolves to the same `KeyId`, so a key pressed as
/// `control` is released by `ctrl`, `ctrl_l` or `Control`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyId {
    Modifier(Modifier),
    Named(NamedKey),
    /// Printable character, stored lowercase.
    Char(char),
    /// Unrecognized key name, stored lowercase.
    Other(String),
}

impl KeyId {
    pub fn resolve(input: &KeyInput) -> Self {
        match input {
            KeyInput::Char(' ') => KeyId::Named(NamedKey::Space),
            KeyInput::Char(c) => KeyId::Char(lower(*c)),
            KeyInput::Named(name) => Self::resolve_name(name),
        }
    }

    fn resolve_name(name: &str) -> Self {
        if name == " " {
            return KeyId::Named(NamedKey::Space);
        }
        let name = name.trim().to_lowercase();
        if let Some(m) = Modifier::from_key_name(&name) {
            return KeyId::Modifier(m);
        }
        if let Some(key) = NamedKey::from_name(&name) {
            return KeyId::Named(key);
        }
        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => KeyId::Char(c),
            _ => KeyId::Other(name),
        }
    }

    pub fn is_modifier(&self) -> bool {
        matches!(self, KeyId::Modifier(_))
    }

    /// Label shown in the live display.
    pub fn label(&self, mode: DisplayMode) -> String {
        match self {
            KeyId::Modifier(m) => m.label(mode),
            KeyId::Named(key) => key.label(mode),
            KeyId::Char(c) => c.to_uppercase().collect(),
            KeyId::Other(name) => name.to_uppercase(),
        }
    }

    /// Name used when a held chord is spelled out (`Cmd`, `P`, `ENTER`).
    pub fn chord_name(&self) -> String {
        match self {
            KeyId::Modifier(m) => m.chord_name().to_string(),
            KeyId::Named(key) => key.name().to_uppercase(),
            KeyId::Char(c) => c.to_uppercase().collect(),
            KeyId::Other(name) => name.to_uppercase(),
        }
    }

    /// Bare letters only appear while a modifier is held.
    pub(crate) fn needs_modifier(&self) -> bool {
        matches!(self, KeyId::Char(c) if c.is_ascii_alphabetic())
    }
}

fn lower(c: char) -> char {
    let mut lowered = c.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
