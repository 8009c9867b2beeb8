// SPDX-License-Identifier: MPL-2.0
//! Application configuration read from `settings.toml`.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and initial appearance
//! - `[prediction]` - Prediction service endpoint
//!
//! The file is read once at startup and never written back; the appearance
//! toggle in the window is session-only.
//!
//! # Examples
//!
//! ```no_run
//! use iced_vqa::config;
//!
//! let (config, warning) = config::load();
//! if warning.is_none() {
//!     println!("endpoint: {}", config.endpoint());
//! }
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::AppearancePreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Appearance the window starts in.
    #[serde(default)]
    pub appearance: AppearancePreference,
}

/// Prediction service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionConfig {
    /// Full URL of the `/predict` endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub prediction: PredictionConfig,
}

impl Config {
    /// Returns the configured prediction endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.prediction.endpoint
    }
}

// =============================================================================
// Load Functions
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns `(config, warning_key)`. A missing file yields defaults silently;
/// an unreadable or malformed file yields defaults plus the i18n key of a
/// warning.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
