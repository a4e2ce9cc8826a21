// SPDX-License-Identifier: MPL-2.0
//! This module handles the toast settings, including loading and saving
//! them to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Default toast appearance and timing
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `TOASTY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use toasty::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.bottom_offset = 64.0;
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use crate::toast::{ToastFont, ToastUIConfig};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "Toasty";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "TOASTY_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Default toast appearance and timing.
///
/// Colours are `#RRGGBB` or `#RRGGBBAA` hex strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ToastSection {
    pub background_color: String,
    pub title_color: String,
    pub content_color: String,
    pub border_color: String,
    pub title_font_size: f32,
    pub content_font_size: f32,
    pub corner_radius: f32,
    pub border_width: f32,
    pub bottom_offset: f32,
    /// Toast width; a quarter of the window width when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_width: Option<f32>,
    pub tap_to_dismiss: bool,
    pub shadow: bool,
    pub fade_duration_ms: u64,
    pub flash_delay_secs: f64,
}

impl Default for ToastSection {
    fn default() -> Self {
        Self {
            background_color: format_hex_color(defaults::BACKGROUND_COLOR),
            title_color: format_hex_color(defaults::TITLE_COLOR),
            content_color: format_hex_color(defaults::CONTENT_COLOR),
            border_color: format_hex_color(defaults::BORDER_COLOR),
            title_font_size: defaults::TITLE_FONT_SIZE,
            content_font_size: defaults::CONTENT_FONT_SIZE,
            corner_radius: defaults::CORNER_RADIUS,
            border_width: defaults::BORDER_WIDTH,
            bottom_offset: defaults::BOTTOM_OFFSET,
            estimate_width: None,
            tap_to_dismiss: true,
            shadow: true,
            fade_duration_ms: defaults::FADE_DURATION_MS,
            flash_delay_secs: defaults::FLASH_DELAY_SECS,
        }
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastSection,
}

impl Config {
    /// Builds the default toast look from the settings.
    ///
    /// Unparseable colours fall back to their defaults.
    #[must_use]
    pub fn ui_config(&self) -> ToastUIConfig {
        let toast = &self.toast;
        ToastUIConfig {
            background_color: color_or_default(
                "background_color",
                &toast.background_color,
                defaults::BACKGROUND_COLOR,
            ),
            title_color: color_or_default("title_color", &toast.title_color, defaults::TITLE_COLOR),
            title_font: ToastFont::sized(toast.title_font_size),
            content_color: color_or_default(
                "content_color",
                &toast.content_color,
                defaults::CONTENT_COLOR,
            ),
            content_font: ToastFont::sized(toast.content_font_size),
            corner_radius: toast.corner_radius,
            border_width: toast.border_width,
            border_color: color_or_default(
                "border_color",
                &toast.border_color,
                defaults::BORDER_COLOR,
            ),
            bottom_offset: toast.bottom_offset,
            estimate_width: toast.estimate_width,
            tap_to_dismiss: toast.tap_to_dismiss,
            shadow_enabled: toast.shadow,
        }
    }

    /// Fade duration, clamped to the supported range.
    #[must_use]
    pub fn fade_duration(&self) -> Duration {
        Duration::from_millis(
            self.toast
                .fade_duration_ms
                .clamp(defaults::MIN_FADE_DURATION_MS, defaults::MAX_FADE_DURATION_MS),
        )
    }

    /// Flash delay; negative, non-finite or unrepresentable values fall back
    /// to the default.
    #[must_use]
    pub fn flash_delay(&self) -> Duration {
        let secs = self.toast.flash_delay_secs;
        Duration::try_from_secs_f64(secs).unwrap_or_else(|_| {
            tracing::warn!(secs, "invalid flash delay, using default");
            Duration::from_secs_f64(defaults::FLASH_DELAY_SECS)
        })
    }
}

// =============================================================================
// Colours
// =============================================================================

/// Parses a `#RRGGBB` or `#RRGGBBAA` colour.
pub fn parse_hex_color(value: &str) -> Result<Color> {
    let invalid = || Error::InvalidColor(value.to_string());
    let hex = value.trim().strip_prefix('#').ok_or_else(invalid)?;
    if !(hex.len() == 6 || hex.len() == 8) || !hex.is_ascii() {
        return Err(invalid());
    }

    let channel = |index: usize| {
        u8::from_str_radix(&hex[index * 2..index * 2 + 2], 16).map_err(|_| invalid())
    };
    let alpha = if hex.len() == 8 { channel(3)? } else { u8::MAX };

    Ok(Color::from_rgba8(
        channel(0)?,
        channel(1)?,
        channel(2)?,
        f32::from(alpha) / 255.0,
    ))
}

/// Formats a colour as `#RRGGBBAA`.
#[must_use]
pub fn format_hex_color(color: Color) -> String {
    let [r, g, b, a] = color.into_rgba8();
    format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
}

fn color_or_default(field: &str, value: &str, fallback: Color) -> Color {
    parse_hex_color(value).unwrap_or_else(|err| {
        tracing::warn!(field, %err, "using default colour");
        fallback
    })
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config directory: explicit override, then the environment
/// variable, then the platform config directory.
fn get_config_dir_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| std::env::var_os(ENV_CONFIG_DIR).map(PathBuf::from))
        .or_else(|| {
            dirs::config_dir().map(|mut path| {
                path.push(APP_NAME);
                path
            })
        })
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
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
                    tracing::warn!(path = %path.display(), %err, "failed to load settings");
                    return (
                        Config::default(),
                        Some(format!("failed to load {}: {err}", path.display())),
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
