use std::path::PathBuf;

use clap::{Parser, Subcommand};
use memokeys_common::{AnswerRule, Platform};

/// MemoKeys: learn keyboard shortcuts by typing them.
#[derive(Parser, Debug)]
#[command(name = "memokeys", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Shortcut library directory (overrides MEMOKEYS_DATA_DIR and the config file).
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, or a full filter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the modes declared in modes.json.
    Modes {
        /// Print the mode index as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Look up the action bound to a shortcut.
    Lookup {
        /// Shortcut in text or icon form, e.g. "Cmd+Shift+P" or "⌘⇧P".
        combo: String,
        #[arg(long)]
        mode: Option<String>,
        #[arg(long)]
        platform: Option<Platform>,
    },

    /// Run a quiz, reading one answer per line from stdin ("skip" skips).
    Quiz {
        #[arg(long)]
        mode: Option<String>,
        #[arg(long)]
        platform: Option<Platform>,
        /// Number of questions.
        #[arg(long)]
        count: Option<u32>,
        /// Answer rule: canonical, compact or cross_platform.
        #[arg(long)]
        rule: Option<AnswerRule>,
    },

    /// Replay "down <key>" / "up <key>" lines from stdin through the live key display.
    Cast {
        #[arg(long)]
        mode: Option<String>,
        #[arg(long)]
        platform: Option<Platform>,
        /// Show text labels (CMD, ENTER) instead of icons.
        #[arg(long)]
        text: bool,
    },

    /// Check the settings file and every shortcut file in the library.
    Validate,
}

pub fn parse() -> Args {
    Args::parse()
}

/// Filter directive for `--log-level`: bare level names apply to the
/// memokeys crates only.
pub fn log_directive(level: &str) -> String {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => format!("memokeys={level}"),
        other => other.to_string(),
    }
}
