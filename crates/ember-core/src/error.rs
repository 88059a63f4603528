//! Error types for Ember

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Ember operations
#[derive(Debug, Error)]
pub enum EmberError {
    #[error("Asset not found: {filename} (searched: {})", format_searched(.searched))]
    AssetNotFound {
        filename: String,
        searched: Vec<PathBuf>,
    },

    #[error("Decode error for {path}: {message}")]
    DecodeError { path: PathBuf, message: String },

    #[error("No such loader: {0}")]
    LoaderNotFound(String),

    #[error("No search directories registered for asset type: {0}")]
    SearchDirsNotFound(String),

    #[error("Config not found: {0}")]
    ConfigNotFound(String),

    #[error("Invalid option '{key}': expected {expected}")]
    InvalidOption { key: String, expected: &'static str },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

impl EmberError {
    /// Whether this error means "the file is not there", as opposed to a
    /// genuine decode failure. The resolution loop treats these as a miss
    /// and moves on to the next candidate path; everything else aborts.
    pub fn is_missing_file(&self) -> bool {
        matches!(
            self,
            EmberError::IoError(e) if e.kind() == std::io::ErrorKind::NotFound
        )
    }
}

fn format_searched(paths: &[PathBuf]) -> String {
    let joined: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    joined.join(", ")
}

/// Result type alias for Ember operations
pub type Result<T> = std::result::Result<T, EmberError>;

impl From<toml::de::Error> for EmberError {
    fn from(err: toml::de::Error) -> Self {
        EmberError::TomlParseError(err.to_string())
    }
}
