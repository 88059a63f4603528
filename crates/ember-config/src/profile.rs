//! A named bundle of base path and per-type search directories

use ember_core::{EmberError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Project-specific asset configuration
///
/// Search directories are stored relative to `base` and looked up by asset
/// type. A type with no explicit entry defaults to a single directory named
/// after the type itself, so a fresh `image` loader searches `base/image`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigProfile {
    pub name: String,
    pub base: PathBuf,
    #[serde(default)]
    pub search_dirs: HashMap<String, Vec<String>>,
}

impl ConfigProfile {
    /// Create a profile with no explicit search directories
    pub fn new(name: &str, base: impl Into<PathBuf>) -> Self {
        Self {
            name: name.to_string(),
            base: base.into(),
            search_dirs: HashMap::new(),
        }
    }

    /// Absolute search directories for an asset type, in configured order
    ///
    /// Recomputed on every call: mutating `base` or the directory lists is
    /// visible on the next lookup.
    pub fn search_directories(&self, asset_type: &str) -> Vec<PathBuf> {
        match self.search_dirs.get(asset_type) {
            Some(dirs) => dirs.iter().map(|dir| self.base.join(dir)).collect(),
            None => vec![self.base.join(asset_type)],
        }
    }

    /// Candidate file paths for an asset, in configured order
    pub fn search_paths(&self, asset_type: &str, filename: &str) -> Vec<PathBuf> {
        self.search_directories(asset_type)
            .into_iter()
            .map(|dir| dir.join(filename))
            .collect()
    }

    /// Append search directories for an asset type, creating the entry if
    /// absent. Order is preserved and duplicates are not collapsed.
    pub fn add_search_dirs<I, S>(&mut self, asset_type: &str, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.search_dirs.entry(asset_type.to_string()).or_default();
        entry.extend(dirs.into_iter().map(Into::into));
    }

    /// Replace the search directories for an asset type
    pub fn set_search_dirs<I, S>(&mut self, asset_type: &str, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_dirs.insert(
            asset_type.to_string(),
            dirs.into_iter().map(Into::into).collect(),
        );
    }

    /// Insert the default `[asset_type]` entry if none exists yet
    pub fn ensure_default_dir(&mut self, asset_type: &str) {
        self.search_dirs
            .entry(asset_type.to_string())
            .or_insert_with(|| vec![asset_type.to_string()]);
    }

    /// Remove the search-directory entry for an asset type
    pub fn remove_search_dirs(&mut self, asset_type: &str) -> Result<()> {
        self.search_dirs
            .remove(asset_type)
            .map(|_| ())
            .ok_or_else(|| EmberError::SearchDirsNotFound(asset_type.to_string()))
    }

    /// Whether an asset type has an explicit search-directory entry
    pub fn has_search_dirs(&self, asset_type: &str) -> bool {
        self.search_dirs.contains_key(asset_type)
    }
}
