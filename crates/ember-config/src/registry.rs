//! Registry of named configuration profiles

use crate::ConfigProfile;
use ember_core::{EmberError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Environment variable naming the active profile for the process
pub const ACTIVE_PROFILE_VAR: &str = "EMBER_ASSETS_PROFILE";

/// Name of the profile used when no override is set
pub const DEFAULT_PROFILE: &str = "default";

const DEFAULT_BASE: &str = "assets";

/// Holds every declared profile and resolves the active one
///
/// Exactly one profile is active at a time: the override if one is set and
/// registered, otherwise `default`. The override is seeded from the
/// `EMBER_ASSETS_PROFILE` environment variable at construction and mutated
/// only through [`ConfigRegistry::set_active_override`].
#[derive(Debug)]
pub struct ConfigRegistry {
    profiles: HashMap<String, ConfigProfile>,
    active_override: Option<String>,
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRegistry {
    /// Create a registry holding the `default` profile
    pub fn new() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert(
            DEFAULT_PROFILE.to_string(),
            ConfigProfile::new(DEFAULT_PROFILE, DEFAULT_BASE),
        );
        Self {
            profiles,
            active_override: std::env::var(ACTIVE_PROFILE_VAR).ok(),
        }
    }

    /// Register a profile under its own name; last registration wins
    pub fn register(&mut self, profile: ConfigProfile) {
        self.profiles.insert(profile.name.clone(), profile);
    }

    /// Remove a profile; no error if it was never registered
    pub fn remove(&mut self, name: &str) {
        self.profiles.remove(name);
    }

    /// Whether a profile is registered under this name
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Get a profile by name
    pub fn get(&self, name: &str) -> Result<&ConfigProfile> {
        self.profiles
            .get(name)
            .ok_or_else(|| EmberError::ConfigNotFound(name.to_string()))
    }

    /// Get a profile by name for mutation
    pub fn get_mut(&mut self, name: &str) -> Result<&mut ConfigProfile> {
        self.profiles
            .get_mut(name)
            .ok_or_else(|| EmberError::ConfigNotFound(name.to_string()))
    }

    /// The currently active profile
    pub fn active(&self) -> Result<&ConfigProfile> {
        self.get(self.active_name())
    }

    /// The currently active profile, for mutation
    pub fn active_mut(&mut self) -> Result<&mut ConfigProfile> {
        let name = self.active_name().to_string();
        self.get_mut(&name)
    }

    /// Set or clear the active-profile override
    ///
    /// Clearing requires an explicit `None`; there is no zero-argument form
    /// that could silently no-op.
    pub fn set_active_override(&mut self, name: Option<&str>) {
        self.active_override = name.map(str::to_string);
    }

    /// The current override, if any
    pub fn active_override(&self) -> Option<&str> {
        self.active_override.as_deref()
    }

    /// Names of all registered profiles
    pub fn names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Merge profiles declared in a TOML document
    ///
    /// ```toml
    /// [profile.editor]
    /// base = "editor_assets"
    ///
    /// [profile.editor.search_dirs]
    /// text = ["text", "fallback"]
    /// ```
    pub fn load_profiles<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let file: ProfilesFile = toml::from_str(&content)?;
        for (name, decl) in file.profile {
            self.register(ConfigProfile {
                name,
                base: decl.base,
                search_dirs: decl.search_dirs,
            });
        }
        Ok(())
    }

    fn active_name(&self) -> &str {
        self.active_override.as_deref().unwrap_or(DEFAULT_PROFILE)
    }
}

#[derive(Debug, Deserialize)]
struct ProfilesFile {
    #[serde(default)]
    profile: HashMap<String, ProfileDecl>,
}

#[derive(Debug, Deserialize)]
struct ProfileDecl {
    base: PathBuf,
    #[serde(default)]
    search_dirs: HashMap<String, Vec<String>>,
}
