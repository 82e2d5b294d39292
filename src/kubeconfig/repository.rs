//! Discovery of kubeconfig files in a directory.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

use super::KubeConfig;

/// One discovered config file and the contexts it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub path: PathBuf,
    pub contexts: Vec<String>,
}

/// A file that was skipped during discovery, and why. Non-fatal.
#[derive(Debug, Clone)]
pub struct LoadWarning {
    pub path: PathBuf,
    pub message: String,
}

/// Result of scanning a config directory: usable entries plus skip warnings.
#[derive(Debug, Clone, Default)]
pub struct LoadedConfigs {
    pub entries: Vec<ConfigEntry>,
    pub warnings: Vec<LoadWarning>,
}

impl LoadedConfigs {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the entry declaring the named context, first match wins.
    pub fn find_context(&self, name: &str) -> Option<&ConfigEntry> {
        self.entries
            .iter()
            .find(|e| e.contexts.iter().any(|c| c == name))
    }

    /// All context names paired with their file, in scan order.
    pub fn iter_contexts(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries.iter().flat_map(|entry| {
            entry
                .contexts
                .iter()
                .map(move |c| (c.as_str(), entry.path.as_path()))
        })
    }
}

/// Returns true if a directory entry name should be considered a kubeconfig
/// candidate. Hidden files and obvious non-config extensions are skipped.
pub fn is_candidate_file(name: &str) -> bool {
    !name.starts_with('.')
        && !name.ends_with(".log")
        && !name.ends_with(".txt")
        && !name.ends_with(".md")
}

/// Scans the immediate entries of `dir` and parses each candidate file.
///
/// Fails only if the directory itself is missing or unreadable. Files that
/// fail to parse become warnings, files declaring zero contexts are silently
/// omitted. Entries come back sorted by file name so output is stable.
pub fn load_all(dir: &Path) -> Result<LoadedConfigs> {
    if !dir.is_dir() {
        return Err(Error::ConfigDirNotFound(dir.to_path_buf()));
    }

    let mut names: Vec<PathBuf> = fs::read_dir(dir)
        .map_err(|e| Error::io(dir, e))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    names.sort();

    let mut loaded = LoadedConfigs::default();

    for path in names {
        if path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !is_candidate_file(name) {
            continue;
        }

        let config = match KubeConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                loaded.warnings.push(LoadWarning {
                    path: path.clone(),
                    message: err.to_string(),
                });
                continue;
            }
        };

        let contexts = config.context_names();
        if !contexts.is_empty() {
            loaded.entries.push(ConfigEntry { path, contexts });
        }
    }

    Ok(loaded)
}
