//! Reading shortcut files and modes from a library root.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use memokeys_common::DataError;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::schema::{ModeIndex, ModeInfo, ShortcutEntry, ShortcutFile, MODES_FILE};

/// Read and parse one shortcut data file.
pub fn read_shortcut_file(path: &Path) -> Result<ShortcutFile, DataError> {
    if !path.is_file() {
        return Err(DataError::FileNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|e| DataError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&content).map_err(|e| DataError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Result of loading a set of shortcut files.
///
/// Files that could not be loaded are kept in `failures` so callers can
/// tell a degraded load apart from a plain lookup miss.
#[derive(Debug, Default)]
pub struct LoadedShortcuts {
    pub entries: Vec<ShortcutEntry>,
    /// Files that contributed entries (or were at least readable), in load order.
    pub files: Vec<PathBuf>,
    pub failures: Vec<(PathBuf, DataError)>,
}

impl LoadedShortcuts {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `true` when every requested file loaded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    fn load_file(&mut self, path: &Path) {
        let file = match read_shortcut_file(path) {
            Ok(file) => file,
            Err(e) => {
                warn!("error loading shortcuts from {}: {e}", path.display());
                self.failures.push((path.to_path_buf(), e));
                return;
            }
        };

        let records = file.shortcuts.unwrap_or_default();
        let before = self.entries.len();
        for record in records {
            match ShortcutEntry::try_from(record) {
                Ok(entry) => self.entries.push(entry),
                Err(e) => warn!("skipping shortcut in {}: {e}", path.display()),
            }
        }
        debug!(
            "loaded {} shortcuts from {}",
            self.entries.len() - before,
            path.display()
        );
        self.files.push(path.to_path_buf());
    }
}

/// A directory holding `modes.json` and shortcut files in subdirectories.
#[derive(Debug, Clone)]
pub struct ShortcutLibrary {
    root: PathBuf,
}

impl ShortcutLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn modes_path(&self) -> PathBuf {
        self.root.join(MODES_FILE)
    }

    /// All modes declared in `modes.json`, sorted by id.
    pub fn modes(&self) -> Result<BTreeMap<String, ModeInfo>, DataError> {
        let path = self.modes_path();
        if !path.is_file() {
            return Err(DataError::FileNotFound(path));
        }
        let content = std::fs::read_to_string(&path).map_err(|e| DataError::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let index: ModeIndex = serde_json::from_str(&content).map_err(|e| DataError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(index.modes)
    }

    /// Look up one mode by id.
    pub fn mode(&self, id: &str) -> Result<ModeInfo, DataError> {
        let mut modes = self.modes()?;
        modes.remove(id).ok_or_else(|| DataError::UnknownMode {
            mode: id.to_string(),
            available: modes.keys().cloned().collect::<Vec<_>>().join(", "),
        })
    }

    /// Every shortcut file under the root except `modes.json`, in sorted path order.
    pub fn shortcut_files(&self) -> Result<Vec<PathBuf>, DataError> {
        if !self.root.is_dir() {
            return Err(DataError::FileNotFound(self.root.clone()));
        }
        let mut files = collect_json_files(&self.root)?;
        files.retain(|p| p.file_name().and_then(|n| n.to_str()) != Some(MODES_FILE));
        files.sort();
        Ok(files)
    }

    /// Load the files listed by a mode, in the listed order.
    pub fn load_mode(&self, id: &str) -> Result<LoadedShortcuts, DataError> {
        let mode = self.mode(id)?;
        info!("loading mode: {} - {}", mode.name, mode.description);

        let mut loaded = LoadedShortcuts::default();
        for file in &mode.files {
            loaded.load_file(&self.root.join(file));
        }
        info!(
            "mode '{id}' loaded {} shortcuts from {} files",
            loaded.len(),
            loaded.files.len()
        );
        Ok(loaded)
    }

    /// Load every shortcut file in the library.
    pub fn load_all(&self) -> Result<LoadedShortcuts, DataError> {
        let mut loaded = LoadedShortcuts::default();
        for path in self.shortcut_files()? {
            loaded.load_file(&path);
        }
        info!(
            "loaded {} shortcuts from {} files in {}",
            loaded.len(),
            loaded.files.len(),
            self.root.display()
        );
        Ok(loaded)
    }

    /// Load a mode when one is given, otherwise everything.
    pub fn load(&self, mode: Option<&str>) -> Result<LoadedShortcuts, DataError> {
        match mode {
            Some(id) => self.load_mode(id),
            None => self.load_all(),
        }
    }
}

/// `*.json` files under `root`. Symlinks are not followed, so a link
/// pointing back up the tree cannot make the walk revisit files.
fn collect_json_files(root: &Path) -> Result<Vec<PathBuf>, DataError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| DataError::Read {
            path: e.path().unwrap_or(root).to_path_buf(),
            message: e.to_string(),
        })?;
        let is_json = entry.path().extension().and_then(|e| e.to_str()) == Some("json");
        if entry.file_type().is_file() && is_json {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}
