//! User settings for Billetera
//!
//! Display preferences, the biometric prompt text, logging and audit
//! switches. Every field has a default so older files keep loading.

use serde::{Deserialize, Serialize};

use super::paths::BilleteraPaths;
use crate::auth::AuthPrompt;
use crate::error::BilleteraError;
use crate::models::Category;

/// User settings for Billetera
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol shown before amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Category used when none is given
    #[serde(default)]
    pub default_category: Category,

    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Whether mutations are written to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Text of the biometric prompt
    #[serde(default)]
    pub biometric_prompt: AuthPrompt,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            default_category: Category::default(),
            log_level: default_log_level(),
            audit_enabled: default_true(),
            biometric_prompt: AuthPrompt::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BilleteraPaths) -> Result<Self, BilleteraError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                BilleteraError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BilleteraError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BilleteraPaths) -> Result<(), BilleteraError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BilleteraError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            BilleteraError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
