// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from an optional
//! `settings.toml` file. The viewer never writes this file.
//!
//! # Configuration Sections
//!
//! - `[display]` - Zoom factor and resampling filter
//! - `[slideshow]` - Auto-advance interval
//! - `[window]` - Initial window size
//!
//! Every field is optional; a missing file or a missing field falls back to
//! the values in [`defaults`].
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `ICED_ALBUM_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_album::config;
//!
//! let (config, warning) = config::load();
//! if let Some(message) = warning {
//!     eprintln!("{message}");
//! }
//! println!("slideshow every {:?}", config.slideshow_interval());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// Display and rendering settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Factor applied by one zoom step.
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: Option<f64>,

    /// Name of the resampling filter (`lanczos3`, `catmull-rom`, `gaussian`,
    /// `triangle`, `nearest`).
    #[serde(default = "default_resample_filter")]
    pub resample_filter: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            zoom_factor: default_zoom_factor(),
            resample_filter: default_resample_filter(),
        }
    }
}

/// Slideshow settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Delay between automatic advances, in milliseconds.
    #[serde(default = "default_slideshow_interval_ms")]
    pub interval_ms: Option<u64>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_slideshow_interval_ms(),
        }
    }
}

/// Initial window geometry.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct WindowConfig {
    #[serde(default)]
    pub width: Option<u32>,

    #[serde(default)]
    pub height: Option<u32>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: Some(DEFAULT_WINDOW_WIDTH),
            height: Some(DEFAULT_WINDOW_HEIGHT),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub window: WindowConfig,
}

impl Config {
    /// Zoom step factor, clamped so persisted values cannot disable zooming
    /// or jump absurdly far.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        let factor = self.display.zoom_factor.unwrap_or(DEFAULT_ZOOM_FACTOR);
        if factor.is_finite() {
            factor.clamp(MIN_ZOOM_FACTOR, MAX_ZOOM_FACTOR)
        } else {
            DEFAULT_ZOOM_FACTOR
        }
    }

    /// Requested resampling filter name, before capability resolution.
    #[must_use]
    pub fn resample_filter(&self) -> &str {
        self.display
            .resample_filter
            .as_deref()
            .unwrap_or(DEFAULT_RESAMPLE_FILTER)
    }

    /// Slideshow interval, clamped to the supported range.
    #[must_use]
    pub fn slideshow_interval(&self) -> Duration {
        let millis = self
            .slideshow
            .interval_ms
            .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_MS)
            .clamp(MIN_SLIDESHOW_INTERVAL_MS, MAX_SLIDESHOW_INTERVAL_MS);
        Duration::from_millis(millis)
    }

    /// Initial window size; never smaller than the chrome around the canvas.
    #[must_use]
    pub fn window_size(&self) -> (u32, u32) {
        let width = self
            .window
            .width
            .unwrap_or(DEFAULT_WINDOW_WIDTH)
            .max(CANVAS_MARGIN_WIDTH + 1);
        let height = self
            .window
            .height
            .unwrap_or(DEFAULT_WINDOW_HEIGHT)
            .max(CANVAS_MARGIN_HEIGHT + 1);
        (width, height)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_zoom_factor() -> Option<f64> {
    Some(DEFAULT_ZOOM_FACTOR)
}

fn default_resample_filter() -> Option<String> {
    Some(DEFAULT_RESAMPLE_FILTER.to_string())
}

fn default_slideshow_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_MS)
}

// =============================================================================
// Load Functions
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

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
                            "Ignoring {}: {err}; using default settings",
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
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
