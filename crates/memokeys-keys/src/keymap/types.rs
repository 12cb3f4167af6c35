use memokeys_common::DisplayMode;
use serde::{Deserialize, Serialize};

/// A keyboard modifier.
///
/// Declaration order is the canonical sort order used by normalized
/// combos (`alt < cmd < ctrl < shift`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    /// Alt key (Option on macOS).
    Alt,
    /// Command key on macOS; the Windows/Super key elsewhere.
    Cmd,
    Ctrl,
    Shift,
}

impl Modifier {
    /// Order modifiers appear in when a held chord is spelled out.
    pub const CHORD_ORDER: [Modifier; 4] = [
        Modifier::Cmd,
        Modifier::Ctrl,
        Modifier::Alt,
        Modifier::Shift,
    ];

    /// Canonical lowercase token used in normalized combos.
    pub fn token(self) -> &'static str {
        match self {
            Modifier::Alt => "alt",
            Modifier::Cmd => "cmd",
            Modifier::Ctrl => "ctrl",
            Modifier::Shift => "shift",
        }
    }

    /// Parse a combo token. Accepts the canonical tokens and the
    /// `command`, `control` and `option` spellings.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "cmd" | "command" => Some(Modifier::Cmd),
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "alt" | "option" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            _ => None,
        }
    }

    /// Parse a key name as reported by an OS keyboard hook or a browser
    /// `KeyboardEvent.key`, including left/right variants (`cmd_r`, `ctrl_l`).
    pub fn from_key_name(name: &str) -> Option<Self> {
        if let Some(m) = Self::from_token(name) {
            return Some(m);
        }
        let base = name
            .strip_suffix("_l")
            .or_else(|| name.strip_suffix("_r"))
            .unwrap_or(name);
        match base {
            "cmd" | "command" | "meta" | "super" | "os" | "win" => Some(Modifier::Cmd),
            "ctrl" | "control" => Some(Modifier::Ctrl),
            "alt" | "option" | "alt_gr" | "altgraph" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            _ => None,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Modifier::Alt => '\u{2325}',   // ⌥
            Modifier::Cmd => '\u{2318}',   // ⌘
            Modifier::Ctrl => '\u{2303}',  // ⌃
            Modifier::Shift => '\u{21E7}', // ⇧
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '\u{2325}' => Some(Modifier::Alt),
            '\u{2318}' => Some(Modifier::Cmd),
            '\u{2303}' => Some(Modifier::Ctrl),
            '\u{21E7}' => Some(Modifier::Shift),
            _ => None,
        }
    }

    /// Label shown while the modifier is held.
    pub fn label(self, mode: DisplayMode) -> String {
        match mode {
            DisplayMode::Icons => self.glyph().to_string(),
            DisplayMode::Text => self.token().to_uppercase(),
        }
    }

    /// Title-cased name used in spelled-out chords (`Cmd+Shift+P`).
    pub fn chord_name(self) -> &'static str {
        match self {
            Modifier::Alt => "Alt",
            Modifier::Cmd => "Cmd",
            Modifier::Ctrl => "Ctrl",
            Modifier::Shift => "Shift",
        }
    }
}

/// Non-printable keys with fixed labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Space,
    Tab,
    Escape,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    CapsLock,
    Home,
    End,
    PageUp,
    PageDown,
    /// F1 through F12.
    Function(u8),
}

impl NamedKey {
    /// Resolve a lowercase key name. Accepts OS-hook names (`return`,
    /// `caps_lock`, `page_up`), browser names (`arrowup`, `pagedown`) and
    /// the words used in text display mode (`esc`, `caps`, `pgup`).
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "enter" | "return" => NamedKey::Enter,
            "space" | "spacebar" => NamedKey::Space,
            "tab" => NamedKey::Tab,
            "escape" | "esc" => NamedKey::Escape,
            "backspace" => NamedKey::Backspace,
            "delete" | "del" => NamedKey::Delete,
            "up" | "arrowup" => NamedKey::Up,
            "down" | "arrowdown" => NamedKey::Down,
            "left" | "arrowleft" => NamedKey::Left,
            "right" | "arrowright" => NamedKey::Right,
            "caps_lock" | "capslock" | "caps" => NamedKey::CapsLock,
            "home" => NamedKey::Home,
            "end" => NamedKey::End,
            "page_up" | "pageup" | "pgup" => NamedKey::PageUp,
            "page_down" | "pagedown" | "pgdn" => NamedKey::PageDown,
            other => {
                let n: u8 = other.strip_prefix('f')?.parse().ok()?;
                if (1..=12).contains(&n) {
                    NamedKey::Function(n)
                } else {
                    return None;
                }
            }
        };
        Some(key)
    }

    /// Main-key glyphs folded back into words by `normalize`.
    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            '\u{21A9}' => Some(NamedKey::Enter),     // ↩
            '\u{2423}' => Some(NamedKey::Space),     // ␣
            '\u{21E5}' => Some(NamedKey::Tab),       // ⇥
            '\u{238B}' => Some(NamedKey::Escape),    // ⎋
            '\u{232B}' => Some(NamedKey::Backspace), // ⌫
            '\u{2326}' => Some(NamedKey::Delete),    // ⌦
            '\u{2191}' => Some(NamedKey::Up),        // ↑
            '\u{2193}' => Some(NamedKey::Down),      // ↓
            '\u{2190}' => Some(NamedKey::Left),      // ←
            '\u{2192}' => Some(NamedKey::Right),     // →
            '\u{21EA}' => Some(NamedKey::CapsLock),  // ⇪
            '\u{2196}' => Some(NamedKey::Home),      // ↖
            '\u{2198}' => Some(NamedKey::End),       // ↘
            '\u{21DE}' => Some(NamedKey::PageUp),    // ⇞
            '\u{21DF}' => Some(NamedKey::PageDown),  // ⇟
            _ => None,
        }
    }

    /// Canonical lowercase name used as the main key of a normalized combo.
    pub fn name(self) -> String {
        match self {
            NamedKey::Enter => "enter".into(),
            NamedKey::Space => "space".into(),
            NamedKey::Tab => "tab".into(),
            NamedKey::Escape => "escape".into(),
            NamedKey::Backspace => "backspace".into(),
            NamedKey::Delete => "delete".into(),
            NamedKey::Up => "up".into(),
            NamedKey::Down => "down".into(),
            NamedKey::Left => "left".into(),
            NamedKey::Right => "right".into(),
            NamedKey::CapsLock => "capslock".into(),
            NamedKey::Home => "home".into(),
            NamedKey::End => "end".into(),
            NamedKey::PageUp => "pageup".into(),
            NamedKey::PageDown => "pagedown".into(),
            NamedKey::Function(n) => format!("f{n}"),
        }
    }

    pub fn label(self, mode: DisplayMode) -> String {
        let (icon, text) = match self {
            NamedKey::Function(n) => return format!("F{n}"),
            NamedKey::Enter => ("\u{21A9}", "ENTER"),
            NamedKey::Space => ("\u{2423}", "SPACE"),
            NamedKey::Tab => ("\u{21E5}", "TAB"),
            NamedKey::Escape => ("\u{238B}", "ESC"),
            NamedKey::Backspace => ("\u{232B}", "BACKSPACE"),
            NamedKey::Delete => ("\u{2326}", "DELETE"),
            NamedKey::Up => ("\u{2191}", "UP"),
            NamedKey::Down => ("\u{2193}", "DOWN"),
            NamedKey::Left => ("\u{2190}", "LEFT"),
            NamedKey::Right => ("\u{2192}", "RIGHT"),
            NamedKey::CapsLock => ("\u{21EA}", "CAPS"),
            NamedKey::Home => ("\u{2196}", "HOME"),
            NamedKey::End => ("\u{2198}", "END"),
            NamedKey::PageUp => ("\u{21DE}", "PGUP"),
            NamedKey::PageDown => ("\u{21DF}", "PGDN"),
        };
        match mode {
            DisplayMode::Icons => icon.into(),
            DisplayMode::Text => text.into(),
        }
    }
}
