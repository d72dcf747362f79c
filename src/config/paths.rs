//! Path management for library-cli
//!
//! Provides XDG-compliant path resolution for the settings file.
//!
//! ## Path Resolution Order
//!
//! 1. `LIBRARY_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/library-cli` or `~/.config/library-cli`
//! 3. Windows: `%APPDATA%\library-cli`

use std::path::PathBuf;

use crate::error::LibraryError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "LIBRARY_CLI_DATA_DIR";

/// Manages all paths used by library-cli
#[derive(Debug, Clone)]
pub struct LibraryPaths {
    /// Base directory for all library-cli files
    base_dir: PathBuf,
}

impl LibraryPaths {
    /// Create a new LibraryPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, LibraryError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create LibraryPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/library-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LibraryError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LibraryError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, LibraryError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                LibraryError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("library-cli"))
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, LibraryError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| LibraryError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("library-cli"))
}
