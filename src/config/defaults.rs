// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the playback-control session. Constants are organized by
//! category.
//!
//! # Categories
//!
//! - **Gesture**: Tap timeout and drag hysteresis
//! - **Adjustment**: Drag-to-level gains for brightness and volume
//! - **Overlay**: Indicator dismiss and control-bar auto-hide delays
//! - **Diagnostics**: Event buffer capacity

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Default movement (px, either axis) before a touch becomes a drag.
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 8.0;

/// Minimum drag threshold.
pub const MIN_DRAG_THRESHOLD_PX: f32 = 1.0;

/// Maximum drag threshold.
pub const MAX_DRAG_THRESHOLD_PX: f32 = 64.0;

/// Default longest press (ms) still recognized as a tap.
pub const DEFAULT_TAP_TIMEOUT_MS: u32 = 100;

/// Minimum tap timeout.
pub const MIN_TAP_TIMEOUT_MS: u32 = 40;

/// Maximum tap timeout.
pub const MAX_TAP_TIMEOUT_MS: u32 = 1000;

// ==========================================================================
// Adjustment Defaults
// ==========================================================================

/// Brightness change per pixel of vertical drag.
pub const DEFAULT_BRIGHTNESS_GAIN: f32 = 0.001;

/// Volume steps per pixel of vertical drag.
pub const DEFAULT_VOLUME_GAIN: f32 = 0.01;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Delay before a brightness/volume indicator hides itself.
pub const DEFAULT_INDICATOR_DISMISS_MS: u32 = 1500;

/// Delay before the playback-control bar hides itself.
pub const DEFAULT_CONTROL_BAR_HIDE_MS: u32 = 3000;

/// Minimum overlay delay.
pub const MIN_OVERLAY_DELAY_MS: u32 = 250;

/// Maximum overlay delay.
pub const MAX_OVERLAY_DELAY_MS: u32 = 30_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 256;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Gesture validation
    assert!(MIN_DRAG_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_DRAG_THRESHOLD_PX >= MIN_DRAG_THRESHOLD_PX);
    assert!(DEFAULT_DRAG_THRESHOLD_PX <= MAX_DRAG_THRESHOLD_PX);
    assert!(MIN_TAP_TIMEOUT_MS > 0);
    assert!(DEFAULT_TAP_TIMEOUT_MS >= MIN_TAP_TIMEOUT_MS);
    assert!(DEFAULT_TAP_TIMEOUT_MS <= MAX_TAP_TIMEOUT_MS);

    // Adjustment validation
    assert!(DEFAULT_BRIGHTNESS_GAIN > 0.0);
    assert!(DEFAULT_VOLUME_GAIN > 0.0);

    // Overlay validation
    assert!(MIN_OVERLAY_DELAY_MS > 0);
    assert!(DEFAULT_INDICATOR_DISMISS_MS >= MIN_OVERLAY_DELAY_MS);
    assert!(DEFAULT_INDICATOR_DISMISS_MS <= MAX_OVERLAY_DELAY_MS);
    assert!(DEFAULT_CONTROL_BAR_HIDE_MS >= MIN_OVERLAY_DELAY_MS);
    assert!(DEFAULT_CONTROL_BAR_HIDE_MS <= MAX_OVERLAY_DELAY_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
