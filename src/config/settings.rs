//! User settings for library-cli
//!
//! Session behavior that users may want to tune: how many retries the
//! borrow/return prompts allow, whether demo records are loaded, and the
//! default log filter.

use serde::{Deserialize, Serialize};

use super::paths::LibraryPaths;
use crate::error::LibraryError;

/// User settings for library-cli
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Retries allowed after a mistyped user or book name
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Load the demo users and books at startup
    #[serde(default = "default_seed_demo_data")]
    pub seed_demo_data: bool,

    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_max_retries() -> u32 {
    3
}

fn default_seed_demo_data() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            max_retries: default_max_retries(),
            seed_demo_data: default_seed_demo_data(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &LibraryPaths) -> Result<Self, LibraryError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LibraryError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| LibraryError::Config(format!("Failed to parse settings file: {}", e)))?;

        if settings.log_level.trim().is_empty() {
            return Err(LibraryError::Config("log_level cannot be empty".into()));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LibraryPaths) -> Result<(), LibraryError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LibraryError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LibraryError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.max_retries, 3);
        assert!(settings.seed_demo_data);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings, Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            max_retries: 5,
            seed_demo_data: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.max_retries, 5);
        assert!(!loaded.seed_demo_data);
    }

    #[test]
    fn test_partial_file_uses_field_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"seed_demo_data": false}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert!(!loaded.seed_demo_data);
        assert_eq!(loaded.max_retries, 3);
    }

    #[test]
    fn test_empty_log_level_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"log_level": " "}"#).unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LibraryError::Config(_)));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LibraryPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        assert!(Settings::load_or_create(&paths).is_err());
    }
}
