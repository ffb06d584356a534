// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for gesture and overlay timing
//! values, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// TapTimeout
// =============================================================================

/// Tap timeout bounds in milliseconds.
pub mod tap_timeout_bounds {
    /// Minimum tap timeout.
    pub const MIN_MS: u32 = 40;
    /// Maximum tap timeout.
    pub const MAX_MS: u32 = 1000;
    /// Default tap timeout (the platform tap timeout).
    pub const DEFAULT_MS: u32 = 100;
}

/// Longest press that still counts as a tap.
///
/// The boundary is inclusive: a press lasting exactly the timeout is a tap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TapTimeout(u32);

impl TapTimeout {
    /// Creates a new tap timeout, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(tap_timeout_bounds::MIN_MS, tap_timeout_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the timeout as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }

    /// Returns true if a press of `elapsed` length is short enough for a tap.
    #[must_use]
    pub fn admits(self, elapsed: Duration) -> bool {
        elapsed <= self.as_duration()
    }
}

impl Default for TapTimeout {
    fn default() -> Self {
        Self(tap_timeout_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// DragThreshold
// =============================================================================

/// Drag threshold bounds in pixels.
pub mod drag_threshold_bounds {
    /// Minimum hysteresis.
    pub const MIN_PX: f32 = 1.0;
    /// Maximum hysteresis.
    pub const MAX_PX: f32 = 64.0;
    /// Default hysteresis (the platform touch slop).
    pub const DEFAULT_PX: f32 = 8.0;
}

/// Movement, in pixels along either axis, a pointer must exceed before a
/// touch sequence becomes a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragThreshold(f32);

impl DragThreshold {
    /// Creates a new drag threshold, clamping to valid range.
    #[must_use]
    pub fn new(px: f32) -> Self {
        let px = if px.is_nan() {
            drag_threshold_bounds::DEFAULT_PX
        } else {
            px
        };
        Self(px.clamp(drag_threshold_bounds::MIN_PX, drag_threshold_bounds::MAX_PX))
    }

    /// Returns the value in pixels.
    #[must_use]
    pub fn px(self) -> f32 {
        self.0
    }

    /// Returns true once the accumulated movement exceeds the threshold.
    #[must_use]
    pub fn is_exceeded_by(self, dx: f32, dy: f32) -> bool {
        dx.abs().max(dy.abs()) > self.0
    }
}

impl Default for DragThreshold {
    fn default() -> Self {
        Self(drag_threshold_bounds::DEFAULT_PX)
    }
}

// =============================================================================
// OverlayDelay
// =============================================================================

/// Overlay delay bounds in milliseconds.
pub mod overlay_delay_bounds {
    /// Minimum delay before an overlay auto-hides.
    pub const MIN_MS: u32 = 250;
    /// Maximum delay before an overlay auto-hides.
    pub const MAX_MS: u32 = 30_000;
    /// Default dismiss delay for the brightness/volume indicators.
    pub const DEFAULT_INDICATOR_MS: u32 = 1500;
    /// Default auto-hide delay for the playback-control bar.
    pub const DEFAULT_CONTROL_BAR_MS: u32 = 3000;
}

/// Inactivity interval after which an overlay hides itself.
///
/// # Example
///
/// ```
/// use cinestream::domain::ui::OverlayDelay;
///
/// let delay = OverlayDelay::new(1500);
/// assert_eq!(delay.millis(), 1500);
///
/// // Values outside range are clamped
/// assert_eq!(OverlayDelay::new(5).millis(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayDelay(u32);

impl OverlayDelay {
    /// Default dismiss delay for adjustment indicators.
    pub const INDICATOR: Self = Self(overlay_delay_bounds::DEFAULT_INDICATOR_MS);

    /// Default auto-hide delay for the control bar.
    pub const CONTROL_BAR: Self = Self(overlay_delay_bounds::DEFAULT_CONTROL_BAR_MS);

    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn new(millis: u32) -> Self {
        Self(millis.clamp(overlay_delay_bounds::MIN_MS, overlay_delay_bounds::MAX_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}
