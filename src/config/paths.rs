//! Path management for hostel-ledger
//!
//! Provides XDG-compliant path resolution for the database, configuration,
//! and export files.
//!
//! ## Path Resolution Order
//!
//! 1. `HOSTEL_LEDGER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/hostel-ledger` or `~/.config/hostel-ledger`
//! 3. Windows: `%APPDATA%\hostel-ledger`

use std::path::PathBuf;

use crate::error::HostelError;

/// Manages all paths used by hostel-ledger
#[derive(Debug, Clone)]
pub struct HostelPaths {
    /// Base directory for all hostel-ledger data
    base_dir: PathBuf,
}

impl HostelPaths {
    /// Create a new HostelPaths instance
    ///
    /// Path resolution:
    /// 1. `HOSTEL_LEDGER_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/hostel-ledger` or `~/.config/hostel-ledger`
    /// 3. Windows: `%APPDATA%\hostel-ledger`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, HostelError> {
        let base_dir = if let Ok(custom) = std::env::var("HOSTEL_LEDGER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create HostelPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/hostel-ledger/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the SQLite database file
    pub fn db_file(&self) -> PathBuf {
        self.base_dir.join("payments.db")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the directory where exports are written by default
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/hostel-ledger/)
    /// - Export directory (~/.config/hostel-ledger/exports/)
    pub fn ensure_directories(&self) -> Result<(), HostelError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| HostelError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| HostelError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }

    /// Check if hostel-ledger has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, HostelError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("hostel-ledger"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, HostelError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| HostelError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("hostel-ledger"))
}
