use std::collections::BTreeSet;
use std::fmt;

use memokeys_common::DisplayMode;

use super::types::{Modifier, NamedKey};

/// A parsed shortcut: a set of modifiers plus at most one main key.
///
/// `Display` renders the normalized form produced by [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct KeyCombo {
    /// Sorted in canonical order (`alt < cmd < ctrl < shift`).
    pub modifiers: BTreeSet<Modifier>,
    /// Lowercase main key (`"c"`, `"enter"`, `"f5"`, `"+"`).
    pub key: Option<String>,
}

impl KeyCombo {
    /// Parse a free-form shortcut string such as `"Cmd + Shift + P"`,
    /// `"⌘⇧P"` or `"Control+C"`.
    ///
    /// Never fails. Whitespace is ignored, modifier glyphs and spellings
    /// are folded to canonical tokens, duplicate modifiers collapse, and
    /// when more than one non-modifier token is present the last one wins.
    pub fn parse(raw: &str) -> Self {
        let mut compact: String = raw
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| !c.is_whitespace())
            .collect();

        // "Cmd++" binds the plus key, as do a lone "+" and the glyph form "⌘+".
        let plus_key =
            compact == "+" || compact.ends_with("++") || ends_with_glyph_plus(&compact);
        if plus_key {
            compact.pop();
        }

        // Glyphs become standalone tokens so glued forms like "⌘⇧p" split.
        let mut expanded = String::with_capacity(compact.len() + 16);
        for c in compact.chars() {
            if let Some(m) = Modifier::from_glyph(c) {
                push_token(&mut expanded, m.token());
            } else if let Some(key) = NamedKey::from_glyph(c) {
                push_token(&mut expanded, &key.name());
            } else {
                expanded.push(c);
            }
        }

        let mut combo = KeyCombo::default();
        for token in expanded.split('+').filter(|t| !t.is_empty()) {
            match Modifier::from_token(token) {
                Some(m) => {
                    combo.modifiers.insert(m);
                }
                None => {
                    let key = NamedKey::from_name(token)
                        .map(NamedKey::name)
                        .unwrap_or_else(|| token.to_string());
                    combo.key = Some(key);
                }
            }
        }
        if plus_key {
            combo.key = Some("+".into());
        }
        combo
    }

    pub fn is_empty(&self) -> bool {
        self.modifiers.is_empty() && self.key.is_none()
    }

    /// Treat Cmd and Ctrl as the same modifier.
    pub fn with_cmd_as_ctrl(mut self) -> Self {
        if self.modifiers.remove(&Modifier::Cmd) {
            self.modifiers.insert(Modifier::Ctrl);
        }
        self
    }

    /// Render for people rather than lookup: glyphs run together on
    /// `Icons` (`⌘⇧P`), title-cased words joined by `+` on `Text`
    /// (`Cmd+Shift+P`). Modifiers follow [`Modifier::CHORD_ORDER`].
    pub fn display(&self, mode: DisplayMode) -> String {
        let mut parts: Vec<String> = Modifier::CHORD_ORDER
            .iter()
            .filter(|m| self.modifiers.contains(*m))
            .map(|m| match mode {
                DisplayMode::Icons => m.glyph().to_string(),
                DisplayMode::Text => m.chord_name().to_string(),
            })
            .collect();

        if let Some(key) = &self.key {
            let label = match NamedKey::from_name(key) {
                Some(named) => match mode {
                    DisplayMode::Icons => named.label(DisplayMode::Icons),
                    DisplayMode::Text => title_case(&named.name()),
                },
                None => key.to_uppercase(),
            };
            parts.push(label);
        }

        match mode {
            DisplayMode::Icons => parts.join(""),
            DisplayMode::Text => parts.join("+"),
        }
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens: Vec<&str> = self.modifiers.iter().map(|m| m.token()).collect();
        if let Some(key) = &self.key {
            tokens.push(key);
        }
        f.write_str(&tokens.join("+"))
    }
}

/// Canonicalize a shortcut string for comparison and table lookup.
///
/// `"Shift + Command + P"`, `"⌘⇧P"` and `"cmd+shift+p"` all become
/// `"cmd+shift+p"`. Idempotent.
pub fn normalize(raw: &str) -> String {
    KeyCombo::parse(raw).to_string()
}

/// Replace modifier glyphs with their text tokens, leaving everything
/// else untouched (`"⌘+C"` becomes `"cmd+C"`).
pub fn icons_to_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match Modifier::from_glyph(c) {
            Some(m) => out.push_str(m.token()),
            None => out.push(c),
        }
    }
    out
}

/// Lowercase with whitespace and `+` removed, so `"Ctrl + C"` and
/// `"ctrlc"` compare equal. Only used by the compact answer rule.
pub fn compact(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| !c.is_whitespace() && *c != '+')
        .collect()
}

/// `true` for a trailing `+` glued to a modifier glyph (`"⌘⇧+"`).
fn ends_with_glyph_plus(s: &str) -> bool {
    let mut tail = s.chars().rev();
    matches!(
        (tail.next(), tail.next()),
        (Some('+'), Some(c)) if Modifier::from_glyph(c).is_some()
    )
}

fn push_token(out: &mut String, token: &str) {
    out.push('+');
    out.push_str(token);
    out.push('+');
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
