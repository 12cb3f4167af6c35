//! Shortcut library checks: mode index consistency and file structure.

use std::collections::HashSet;
use std::path::Path;

use memokeys_common::{DataError, Platform};
use tracing::info;

use super::helpers::validate_combo;
use crate::library::{read_shortcut_file, ShortcutLibrary};
use crate::schema::ShortcutFile;

/// Validate every mode and every shortcut file in a library.
pub fn validate_library(library: &ShortcutLibrary) -> Result<(), DataError> {
    let mut errors: Vec<String> = Vec::new();

    validate_modes(&mut errors, library);

    match library.shortcut_files() {
        Ok(files) if files.is_empty() => errors.push(format!(
            "no shortcut files found in {}",
            library.root().display()
        )),
        Ok(files) => {
            for path in &files {
                match read_shortcut_file(path) {
                    Ok(file) => validate_file(&mut errors, &display_path(library, path), &file),
                    Err(e) => errors.push(e.to_string()),
                }
            }
            info!("validated {} shortcut files", files.len());
        }
        Err(e) => errors.push(e.to_string()),
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(DataError::Validation(errors.join("; ")))
    }
}

fn validate_modes(errors: &mut Vec<String>, library: &ShortcutLibrary) {
    let modes = match library.modes() {
        Ok(modes) => modes,
        Err(e) => {
            errors.push(e.to_string());
            return;
        }
    };

    for (id, mode) in &modes {
        if mode.name.trim().is_empty() {
            errors.push(format!("mode '{id}' is missing 'name'"));
        }
        if mode.description.trim().is_empty() {
            errors.push(format!("mode '{id}' is missing 'description'"));
        }
        if mode.files.is_empty() {
            errors.push(format!("mode '{id}' lists no files"));
        }
        for file in &mode.files {
            if !library.root().join(file).is_file() {
                errors.push(format!("file {file} referenced in mode '{id}' does not exist"));
            }
        }
    }
}

fn validate_file(errors: &mut Vec<String>, name: &str, file: &ShortcutFile) {
    if file.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
        errors.push(format!("{name}: missing 'name' field"));
    }
    let Some(shortcuts) = &file.shortcuts else {
        errors.push(format!("{name}: missing 'shortcuts' field"));
        return;
    };

    let mut seen: HashSet<&str> = HashSet::new();
    for (i, record) in shortcuts.iter().enumerate() {
        let context = match record.id.as_deref() {
            Some(id) => format!("{name} shortcut '{id}'"),
            None => format!("{name} shortcut {i}"),
        };

        match record.id.as_deref() {
            None | Some("") => errors.push(format!("{context}: missing 'id'")),
            Some(id) => {
                if !seen.insert(id) {
                    errors.push(format!("{name}: duplicate shortcut id '{id}'"));
                }
            }
        }
        if record.action.as_deref().map_or(true, |a| a.trim().is_empty()) {
            errors.push(format!("{context}: missing 'action'"));
        }

        let mut has_platform = false;
        for platform in Platform::ALL {
            if let Some(combo) = record.combo(platform) {
                has_platform = true;
                validate_combo(errors, &format!("{context} ({platform})"), combo);
            }
        }
        if !has_platform {
            errors.push(format!("{context}: missing platform keys"));
        }
    }
}

fn display_path(library: &ShortcutLibrary, path: &Path) -> String {
    path.strip_prefix(library.root())
        .unwrap_or(path)
        .display()
        .to_string()
}
