//! User settings for the expense splitter

use serde::{Deserialize, Serialize};

use super::paths::SplitterPaths;
use crate::analytics::DEFAULT_TOP_LIMIT;
use crate::error::SplitterError;

/// User preferences, stored in `config.json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// How many expenses `report top` shows when no limit is given
    #[serde(default = "default_top_expenses_limit")]
    pub top_expenses_limit: usize,

    /// Category used when `expense add` is given none
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_top_expenses_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

fn default_category() -> String {
    "other".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            top_expenses_limit: default_top_expenses_limit(),
            default_category: default_category(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &SplitterPaths) -> Result<Self, SplitterError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                SplitterError::Io(format!("Failed to read settings file: {}", e))
            })?;

            serde_json::from_str(&contents).map_err(|e| {
                SplitterError::Config(format!("Failed to parse settings file: {}", e))
            })
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SplitterPaths) -> Result<(), SplitterError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            SplitterError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            SplitterError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
