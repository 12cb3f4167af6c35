//! Subcommand implementations.
//!
//! Commands read from a `BufRead` and write to a `Write` so they can be
//! driven from tests as well as from stdin/stdout.

mod cast;
mod lookup;
mod modes;
mod quiz;
mod validate;

use std::io::{BufRead, Write};
use std::path::Path;

use memokeys_common::{Platform, Result};
use memokeys_config::{resolve_data_dir, LoadedShortcuts, MemoKeysConfig, ShortcutLibrary};
use memokeys_keys::ShortcutTable;
use tracing::{info, warn};

use crate::cli::Command;

/// Settings plus the shortcut library they point at.
pub struct Context {
    pub settings: MemoKeysConfig,
    pub library: ShortcutLibrary,
}

impl Context {
    pub fn new(settings: MemoKeysConfig, data_dir: Option<&Path>) -> Self {
        let root = resolve_data_dir(data_dir, &settings.data);
        info!("shortcut library: {}", root.display());
        Self {
            library: ShortcutLibrary::new(root),
            settings,
        }
    }

    /// `--platform` if given, else the settings, else the host.
    pub fn platform(&self, flag: Option<Platform>) -> Platform {
        flag.unwrap_or_else(|| self.settings.display.platform())
    }

    /// Load `mode`, falling back to the configured mode, then to everything.
    pub fn load(&self, mode: Option<&str>) -> Result<LoadedShortcuts> {
        let mode = mode.or(self.settings.data.mode.as_deref());
        let loaded = self.library.load(mode)?;
        if !loaded.is_complete() {
            warn!(
                "{} shortcut files failed to load; results may be incomplete",
                loaded.failures.len()
            );
        }
        Ok(loaded)
    }

    pub fn table(&self, mode: Option<&str>, platform: Platform) -> Result<ShortcutTable> {
        let loaded = self.load(mode)?;
        let table = ShortcutTable::from_loaded(&loaded, platform);
        info!("{} {platform} shortcuts ready", table.len());
        Ok(table)
    }
}

pub fn run(
    ctx: &Context,
    command: Command,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<()> {
    match command {
        Command::Modes { json } => modes::run(ctx, json, out),
        Command::Lookup {
            combo,
            mode,
            platform,
        } => lookup::run(ctx, &combo, mode.as_deref(), platform, out),
        Command::Quiz {
            mode,
            platform,
            count,
            rule,
        } => {
            let options = quiz::QuizOptions {
                platform: ctx.platform(platform),
                count: count.unwrap_or(ctx.settings.quiz.question_count) as usize,
                rule: rule.unwrap_or(ctx.settings.quiz.answer_rule),
                display: ctx.settings.display.mode,
            };
            quiz::run(ctx, mode.as_deref(), &options, input, out)
        }
        Command::Cast {
            mode,
            platform,
            text,
        } => {
            let display = if text {
                memokeys_common::DisplayMode::Text
            } else {
                ctx.settings.display.mode
            };
            cast::run(ctx, mode.as_deref(), ctx.platform(platform), display, input, out)
        }
        Command::Validate => validate::run(ctx, out),
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    use memokeys_config::MemoKeysConfig;

    use super::Context;

    /// A two-mode library with mac and windows combos.
    pub fn library() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("system")).unwrap();
        fs::create_dir_all(root.join("editors")).unwrap();
        fs::write(
            root.join("modes.json"),
            r#"{"modes": {
                "basic": {"name": "Basic", "description": "Everyday shortcuts",
                          "files": ["system/basic.json"]},
                "vscode": {"name": "VS Code", "description": "Basic + VS Code",
                           "files": ["system/basic.json", "editors/vscode.json"]}
            }}"#,
        )
        .unwrap();
        fs::write(
            root.join("system/basic.json"),
            r#"{"name": "Basic", "shortcuts": [
                {"id": "copy", "action": "Copy", "mac": "Cmd+C", "windows": "Ctrl+C"},
                {"id": "paste", "action": "Paste", "mac": "Cmd+V", "windows": "Ctrl+V"},
                {"id": "undo", "action": "Undo", "mac": "Cmd+Z", "windows": "Ctrl+Z"}
            ]}"#,
        )
        .unwrap();
        fs::write(
            root.join("editors/vscode.json"),
            r#"{"name": "VS Code", "shortcuts": [
                {"id": "palette", "action": "Command Palette", "mac": "Cmd+Shift+P",
                 "windows": "Ctrl+Shift+P"}
            ]}"#,
        )
        .unwrap();
        dir
    }

    /// The library shipped in the repository's `data/shortcuts`.
    pub fn shipped_library() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/shortcuts")
    }

    /// Run a command against the library at `root` and return its stdout.
    pub fn output(
        root: impl AsRef<Path>,
        command: crate::cli::Command,
        input: &str,
    ) -> memokeys_common::Result<String> {
        let ctx = Context::new(MemoKeysConfig::default(), Some(root.as_ref()));
        let mut reader = input.as_bytes();
        let mut out = Vec::new();
        super::run(&ctx, command, &mut reader, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }
}
