// SPDX-License-Identifier: MPL-2.0
//! This module handles the session's configuration: gesture tuning, overlay
//! timing and diagnostics, read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[gesture]` - Tap timeout and drag hysteresis
//! - `[adjustment]` - Brightness and volume drag gains
//! - `[overlay]` - Indicator dismiss and control-bar auto-hide delays
//! - `[diagnostics]` - Event buffer capacity
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set `CINESTREAM_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! The file is read-only: nothing here writes it back.
//!
//! # Examples
//!
//! ```no_run
//! use cinestream::config;
//!
//! // Load configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! let settings = config.session_settings();
//! assert!(settings.tap_timeout.millis() > 0);
//! ```

pub mod defaults;

// Re-export all default constants
pub use defaults::*;

use crate::domain::diagnostics::BufferCapacity;
use crate::domain::playback::AdjustmentGain;
use crate::domain::ui::{DragThreshold, OverlayDelay, TapTimeout};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "Cinestream";

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "CINESTREAM_CONFIG_DIR";

// =============================================================================
// Section Structs
// =============================================================================

/// Touch gesture recognition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GestureConfig {
    /// Movement in pixels (either axis) before a touch becomes a drag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drag_threshold_px: Option<f32>,

    /// Longest press in milliseconds still recognized as a tap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_timeout_ms: Option<u32>,
}

/// Drag-to-level gains. Magnitudes only; moving up always raises the level.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AdjustmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brightness_gain: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_gain: Option<f32>,
}

/// Overlay auto-hide timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct OverlayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicator_dismiss_ms: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_bar_hide_ms: Option<u32>,
}

/// Diagnostics collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DiagnosticsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_capacity: Option<usize>,
}

/// Full configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub gesture: GestureConfig,
    #[serde(default)]
    pub adjustment: AdjustmentConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Validated values the session runs with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionSettings {
    pub drag_threshold: DragThreshold,
    pub tap_timeout: TapTimeout,
    pub brightness_gain: AdjustmentGain,
    pub volume_gain: AdjustmentGain,
    pub indicator_dismiss: OverlayDelay,
    pub control_bar_hide: OverlayDelay,
    pub diagnostics_capacity: BufferCapacity,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Config::default().session_settings()
    }
}

impl Config {
    /// Resolves every field to its clamped domain value, filling gaps with
    /// defaults.
    #[must_use]
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            drag_threshold: DragThreshold::new(
                self.gesture
                    .drag_threshold_px
                    .unwrap_or(DEFAULT_DRAG_THRESHOLD_PX),
            ),
            tap_timeout: TapTimeout::new(
                self.gesture.tap_timeout_ms.unwrap_or(DEFAULT_TAP_TIMEOUT_MS),
            ),
            brightness_gain: AdjustmentGain::new(
                self.adjustment
                    .brightness_gain
                    .unwrap_or(DEFAULT_BRIGHTNESS_GAIN),
            ),
            volume_gain: AdjustmentGain::new(
                self.adjustment.volume_gain.unwrap_or(DEFAULT_VOLUME_GAIN),
            ),
            indicator_dismiss: OverlayDelay::new(
                self.overlay
                    .indicator_dismiss_ms
                    .unwrap_or(DEFAULT_INDICATOR_DISMISS_MS),
            ),
            control_bar_hide: OverlayDelay::new(
                self.overlay
                    .control_bar_hide_ms
                    .unwrap_or(DEFAULT_CONTROL_BAR_HIDE_MS),
            ),
            diagnostics_capacity: BufferCapacity::new(
                self.diagnostics
                    .buffer_capacity
                    .unwrap_or(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY),
            ),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Returns the configuration file location, honouring [`CONFIG_DIR_ENV`].
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|dir| !dir.is_empty()) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default location.
///
/// Never fails: a missing file yields defaults silently, an unreadable or
/// invalid file yields defaults plus a warning message.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    let Some(path) = default_config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(loaded) => loaded,
        Err(err) => (
            Config::default(),
            Some(format!("Could not read {}: {}", path.display(), err)),
        ),
    }
}

/// Loads the configuration from `path`.
///
/// Invalid TOML falls back to defaults and returns the parse error as a
/// warning.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn load_from_path(path: &Path) -> Result<(Config, Option<String>)> {
    let content = fs::read_to_string(path)?;
    match toml::from_str::<Config>(&content) {
        Ok(config) => Ok((config, None)),
        Err(err) => {
            let err = Error::from(err);
            Ok((
                Config::default(),
                Some(format!("Ignoring {}: {}", path.display(), err)),
            ))
        }
    }
}
