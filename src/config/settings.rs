//! User settings for hostel-ledger
//!
//! Manages user preferences: the currency label used in reports, an optional
//! report-year override for the dashboard, and the export directory.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::HostelPaths;
use crate::error::HostelError;

fn default_schema_version() -> u32 {
    1
}

fn default_currency_label() -> String {
    "Ksh".to_string()
}

/// User settings for hostel-ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency label prefixed to amounts in reports (e.g. "Ksh")
    #[serde(default = "default_currency_label")]
    pub currency_label: String,

    /// Fixed report year for the dashboard; defaults to the current calendar
    /// year when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_year: Option<i32>,

    /// Directory where exports are written when no path is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_label: default_currency_label(),
            report_year: None,
            export_dir: None,
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if it
    /// doesn't exist
    pub fn load_or_create(paths: &HostelPaths) -> Result<Self, HostelError> {
        let settings_file = paths.settings_file();

        if settings_file.exists() {
            let contents = std::fs::read_to_string(&settings_file).map_err(|e| {
                HostelError::Config(format!(
                    "Failed to read {}: {}",
                    settings_file.display(),
                    e
                ))
            })?;
            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HostelError::Config(format!(
                    "Failed to parse {}: {}",
                    settings_file.display(),
                    e
                ))
            })?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            paths.ensure_directories()?;
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HostelPaths) -> Result<(), HostelError> {
        let settings_file = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_file, contents).map_err(|e| {
            HostelError::Config(format!(
                "Failed to write {}: {}",
                settings_file.display(),
                e
            ))
        })?;
        Ok(())
    }

    /// Resolve the export directory, falling back to the default under the
    /// base directory
    pub fn resolve_export_dir(&self, paths: &HostelPaths) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| paths.export_dir())
    }
}
