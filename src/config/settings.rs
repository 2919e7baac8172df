//! User settings for the ledger
//!
//! Manages the ledger file name, its on-disk format and display preferences.

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::error::LedgerError;
use crate::storage::{write_atomic, StorageFormat};

/// User settings for the ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Ledger file name, relative to the base directory
    #[serde(default = "default_ledger_file_name")]
    pub ledger_file_name: String,

    /// Line format of the ledger file
    #[serde(default)]
    pub storage_format: StorageFormat,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_ledger_file_name() -> String {
    "transactions.csv".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            ledger_file_name: default_ledger_file_name(),
            storage_format: StorageFormat::default(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                LedgerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        write_atomic(paths.settings_file(), |writer| {
            serde_json::to_writer_pretty(&mut *writer, self).map_err(|e| {
                LedgerError::Config(format!("Failed to serialize settings: {}", e))
            })?;
            writeln!(writer)?;
            Ok(())
        })
    }
}
