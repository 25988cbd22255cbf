// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[gallery]` - Directory scan settings (sort order)
//! - `[lightbox]` - Lightbox presentation settings (backdrop, counter)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with an explicit path
//! 2. Set the `ICED_LIGHTBOX_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "IcedLightbox";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_LIGHTBOX_CONFIG_DIR";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    ModifiedDate,
    CreatedDate,
}

/// Surface drawn behind the lightbox image.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum BackdropStyle {
    /// Nearly opaque black; the gallery grid stays faintly visible.
    #[default]
    Dimmed,
    /// Fully opaque black.
    Black,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Directory scan settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Image file sorting order within the scanned directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            sort_order: Some(SortOrder::default()),
        }
    }
}

/// Lightbox presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Surface drawn behind the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<BackdropStyle>,

    /// Whether the "current/total" counter is shown.
    #[serde(
        default = "default_show_position_counter",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_position_counter: Option<bool>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            backdrop: Some(BackdropStyle::default()),
            show_position_counter: Some(DEFAULT_SHOW_POSITION_COUNTER),
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Directory scan settings.
    #[serde(default)]
    pub gallery: GalleryConfig,

    /// Lightbox presentation settings.
    #[serde(default)]
    pub lightbox: LightboxConfig,
}

impl Config {
    /// Effective sort order, falling back to the default when unset.
    #[must_use]
    pub fn sort_order(&self) -> SortOrder {
        self.gallery.sort_order.unwrap_or_default()
    }

    /// Effective backdrop style, falling back to the default when unset.
    #[must_use]
    pub fn backdrop(&self) -> BackdropStyle {
        self.lightbox.backdrop.unwrap_or_default()
    }

    /// Whether the position counter is shown.
    #[must_use]
    pub fn show_position_counter(&self) -> bool {
        self.lightbox
            .show_position_counter
            .unwrap_or(DEFAULT_SHOW_POSITION_COUNTER)
    }
}

fn default_show_position_counter() -> Option<bool> {
    Some(DEFAULT_SHOW_POSITION_COUNTER)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory, honoring the override chain:
/// explicit parameter, then environment variable, then platform default.
fn app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|path| path.join(APP_NAME))
}

/// Returns the config file path with an optional directory override.
fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    app_config_dir_with_override(base_dir).map(|mut path| {
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
/// the default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
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
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
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
