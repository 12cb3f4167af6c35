//! `memokeys.toml` settings types.

use std::path::PathBuf;

use memokeys_common::{AnswerRule, DisplayMode, Platform};
use serde::{Deserialize, Serialize};

/// Root settings for the trainer.
///
/// Every section is optional; only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoKeysConfig {
    pub data: DataConfig,
    pub display: DisplayConfig,
    pub quiz: QuizConfig,
    pub logging: LoggingConfig,
}

/// Where shortcut data lives and which mode to load by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Shortcut library root. Relative paths resolve against the working directory.
    pub dir: PathBuf,
    /// Mode loaded when none is given on the command line. `None` loads every file.
    pub mode: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data/shortcuts"),
            mode: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    /// Platform whose combos are quizzed and looked up. `None` means the host platform.
    pub platform: Option<Platform>,
}

impl DisplayConfig {
    pub fn platform(&self) -> Platform {
        self.platform.unwrap_or_else(Platform::current)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Questions per run (valid range: 1-50).
    pub question_count: u32,
    pub answer_rule: AnswerRule,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_count: 5,
            answer_rule: AnswerRule::Canonical,
        }
    }
}

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive for the workspace crates at this level.
    pub fn directive(self) -> String {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        format!("memokeys={level}")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
