//! Path management for the habit tracker
//!
//! Provides XDG-compliant path resolution for configuration, year files and
//! the audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `HABITS_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/habit-tracker` or `~/.config/habit-tracker`
//! 3. Windows: `%APPDATA%\habit-tracker`

use std::path::PathBuf;

use crate::error::HabitError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "HABITS_DATA_DIR";

/// Manages all paths used by the habit tracker
#[derive(Debug, Clone)]
pub struct HabitPaths {
    /// Base directory for all habit tracker data
    base_dir: PathBuf,
}

impl HabitPaths {
    /// Create a new HabitPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HabitError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create HabitPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per calendar year
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), HabitError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HabitError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| HabitError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if the tracker has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HabitError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME")
                .map_err(|_| HabitError::Config("HOME environment variable not set".into()))?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("habit-tracker"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HabitError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HabitError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("habit-tracker"))
}
