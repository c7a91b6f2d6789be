// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[classification]` - Expected camera make/model and how they combine
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `EXIF_LENS_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use exif_lens::config::{self, Config};
//! use exif_lens::domain::metadata::MatchPolicy;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.classification.match_policy = Some(MatchPolicy::Any);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::metadata::{MatchPolicy, SecureProfile};
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Camera profile used to classify images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationConfig {
    /// `"all"` requires every criterion, `"any"` stops at the first match.
    #[serde(
        default = "default_match_policy",
        deserialize_with = "deserialize_match_policy",
        serialize_with = "serialize_match_policy",
        skip_serializing_if = "Option::is_none"
    )]
    pub match_policy: Option<MatchPolicy>,

    /// Expected value of the `Make` tag.
    #[serde(default = "default_secure_make", skip_serializing_if = "Option::is_none")]
    pub secure_make: Option<String>,

    /// Expected value of the `Model` tag.
    #[serde(default = "default_secure_model", skip_serializing_if = "Option::is_none")]
    pub secure_model: Option<String>,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            match_policy: default_match_policy(),
            secure_make: default_secure_make(),
            secure_model: default_secure_model(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub classification: ClassificationConfig,
}

impl Config {
    /// Builds the classifier profile, filling unset fields with defaults.
    #[must_use]
    pub fn secure_profile(&self) -> SecureProfile {
        let section = &self.classification;
        SecureProfile::camera(
            section
                .secure_make
                .as_deref()
                .unwrap_or(DEFAULT_SECURE_MAKE),
            section
                .secure_model
                .as_deref()
                .unwrap_or(DEFAULT_SECURE_MODEL),
            section.match_policy.unwrap_or(DEFAULT_MATCH_POLICY),
        )
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_match_policy() -> Option<MatchPolicy> {
    Some(DEFAULT_MATCH_POLICY)
}

fn default_secure_make() -> Option<String> {
    Some(DEFAULT_SECURE_MAKE.to_string())
}

fn default_secure_model() -> Option<String> {
    Some(DEFAULT_SECURE_MODEL.to_string())
}

fn deserialize_match_policy<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<MatchPolicy>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    MatchPolicy::parse(&raw)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("invalid match_policy: {}", raw)))
}

#[allow(clippy::ref_option)]
fn serialize_match_policy<S>(
    policy: &Option<MatchPolicy>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match policy {
        Some(policy) => serializer.serialize_str(policy.as_str()),
        None => serializer.serialize_none(),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the settings file path in the default config directory.
pub fn config_file_path() -> Option<PathBuf> {
    paths::get_app_config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!(
                            "Ignoring {}: {err}. Using default settings.",
                            path.display()
                        )),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`] if
/// it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
