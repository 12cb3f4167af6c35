use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Operating system a shortcut combo is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Mac,
    Windows,
    Linux,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Mac, Platform::Windows, Platform::Linux];

    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Platform::Mac
        } else if cfg!(target_os = "windows") {
            Platform::Windows
        } else {
            Platform::Linux
        }
    }

    /// Platforms to try, in order, when picking a combo for `self`.
    pub fn fallback_chain(self) -> [Platform; 3] {
        match self {
            Platform::Mac => [Platform::Mac, Platform::Windows, Platform::Linux],
            Platform::Windows => [Platform::Windows, Platform::Linux, Platform::Mac],
            Platform::Linux => [Platform::Linux, Platform::Windows, Platform::Mac],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Mac => "mac",
            Platform::Windows => "windows",
            Platform::Linux => "linux",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mac" | "macos" | "darwin" | "osx" => Ok(Platform::Mac),
            "windows" | "win" => Ok(Platform::Windows),
            "linux" => Ok(Platform::Linux),
            other => Err(format!(
                "unknown platform '{other}' (expected mac, windows or linux)"
            )),
        }
    }
}

/// How modifier and special keys are rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Glyphs such as ⌘ and ↩.
    #[default]
    Icons,
    /// Words such as CMD and ENTER.
    Text,
}

impl DisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            DisplayMode::Icons => DisplayMode::Text,
            DisplayMode::Text => DisplayMode::Icons,
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "icons" | "icon" => Ok(DisplayMode::Icons),
            "text" => Ok(DisplayMode::Text),
            other => Err(format!("unknown display mode '{other}' (expected icons or text)")),
        }
    }
}

/// Rule used to decide whether a submitted answer matches the expected combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnswerRule {
    /// Compare normalized combos (`"Shift+Cmd+P" == "cmd+shift+p"`).
    #[default]
    Canonical,
    /// Compare with whitespace and `+` stripped (`"ctrlc" == "ctrl+c"`).
    Compact,
    /// Canonical comparison with Cmd and Ctrl treated as the same key.
    CrossPlatform,
}

impl FromStr for AnswerRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "canonical" => Ok(AnswerRule::Canonical),
            "compact" => Ok(AnswerRule::Compact),
            "cross_platform" => Ok(AnswerRule::CrossPlatform),
            other => Err(format!(
                "unknown answer rule '{other}' (expected canonical, compact or cross_platform)"
            )),
        }
    }
}
