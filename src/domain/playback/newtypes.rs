// SPDX-License-Identifier: MPL-2.0
//! Playback-control newtypes.
//!
//! This module provides type-safe wrappers for the two adjustable device
//! levels (display brightness and stream volume), the percentage shown on
//! their indicators, and the gain that maps a drag distance to a level
//! change. Every constructor clamps, so no mutation can leave a level out
//! of range.

// =============================================================================
// Percent
// =============================================================================

/// Whole percentage (0–100) displayed on an adjustment indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percent(u8);

impl Percent {
    /// Full scale.
    pub const FULL: Self = Self(100);

    /// Converts a ratio in `[0.0, 1.0]` to the nearest whole percentage.
    ///
    /// Out-of-range and NaN ratios are clamped.
    #[must_use]
    pub fn from_ratio(ratio: f32) -> Self {
        if ratio.is_nan() {
            return Self(0);
        }
        // Clamped to 0..=100 before the cast, so the truncation is exact.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent = (ratio.clamp(0.0, 1.0) * 100.0).round() as u8;
        Self(percent)
    }

    /// Returns the percentage value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Percent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Brightness
// =============================================================================

/// Display brightness bounds.
pub mod brightness_bounds {
    /// Completely dark.
    pub const MIN: f32 = 0.0;
    /// Fully bright.
    pub const MAX: f32 = 1.0;
}

/// Window brightness, guaranteed to be within `[0.0, 1.0]`.
///
/// # Example
///
/// ```
/// use cinestream::domain::playback::Brightness;
///
/// let level = Brightness::new(0.9).offset(0.5);
/// assert_eq!(level.value(), 1.0);
/// assert_eq!(level.percent().value(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Brightness(f32);

impl Brightness {
    /// Creates a new brightness level, clamping to valid range.
    ///
    /// NaN (an unset platform value) is treated as the minimum.
    #[must_use]
    pub fn new(level: f32) -> Self {
        if level.is_nan() {
            return Self(brightness_bounds::MIN);
        }
        Self(level.clamp(brightness_bounds::MIN, brightness_bounds::MAX))
    }

    /// Returns the level as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns a new level shifted by `delta`, clamped.
    #[must_use]
    pub fn offset(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }

    /// Percentage shown on the brightness indicator.
    #[must_use]
    pub fn percent(self) -> Percent {
        Percent::from_ratio(self.0 / brightness_bounds::MAX)
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self(brightness_bounds::MAX / 2.0)
    }
}

// =============================================================================
// VolumeLevel
// =============================================================================

/// Stream volume expressed against the device's maximum step.
///
/// The level is kept continuous so that slow drags accumulate; the device
/// only ever sees [`VolumeLevel::step`], the nearest integer step.
///
/// # Example
///
/// ```
/// use cinestream::domain::playback::VolumeLevel;
///
/// let volume = VolumeLevel::new(5.0, 15).offset(1.0);
/// assert_eq!(volume.step(), 6);
/// assert_eq!(volume.percent().value(), 40);
///
/// // Values outside range are clamped
/// assert_eq!(VolumeLevel::new(40.0, 15).step(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeLevel {
    level: f32,
    max: u32,
}

impl VolumeLevel {
    /// Creates a new volume level, clamping to `[0, max]`.
    ///
    /// A zero maximum is raised to one so the percentage stays defined.
    #[must_use]
    pub fn new(level: f32, max: u32) -> Self {
        let max = max.max(1);
        let level = if level.is_nan() { 0.0 } else { level };
        #[allow(clippy::cast_precision_loss)]
        let upper = max as f32;
        Self {
            level: level.clamp(0.0, upper),
            max,
        }
    }

    /// Creates a level from a device step.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_step(step: u32, max: u32) -> Self {
        Self::new(step as f32, max)
    }

    /// Returns the continuous level.
    #[must_use]
    pub fn value(self) -> f32 {
        self.level
    }

    /// Returns the device maximum.
    #[must_use]
    pub fn max(self) -> u32 {
        self.max
    }

    /// Returns the nearest integer device step.
    #[must_use]
    pub fn step(self) -> u32 {
        // level is clamped to [0, max], so the cast cannot wrap.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let step = self.level.round() as u32;
        step.min(self.max)
    }

    /// Returns a new level shifted by `delta`, clamped.
    #[must_use]
    pub fn offset(self, delta: f32) -> Self {
        Self::new(self.level + delta, self.max)
    }

    /// Percentage shown on the volume indicator (`step / max`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn percent(self) -> Percent {
        Percent::from_ratio(self.step() as f32 / self.max as f32)
    }
}

// =============================================================================
// AdjustmentGain
// =============================================================================

/// Gain bounds (level units per pixel).
pub mod gain_bounds {
    /// Smallest usable gain.
    pub const MIN: f32 = 0.000_01;
    /// Largest usable gain.
    pub const MAX: f32 = 1.0;
    /// Default brightness gain: a full-height swipe of 1000 px covers the range.
    pub const DEFAULT_BRIGHTNESS: f32 = 0.001;
    /// Default volume gain: one device step per 100 px.
    pub const DEFAULT_VOLUME: f32 = 0.01;
}

/// Magnitude of the level change per pixel of vertical drag.
///
/// Screen coordinates grow downwards, so a finger moving up produces a
/// negative `dy`. The gain is negative-sloped: moving up raises the level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentGain(f32);

impl AdjustmentGain {
    /// Creates a gain from its magnitude, clamping to valid range.
    ///
    /// The sign of `magnitude` is ignored.
    #[must_use]
    pub fn new(magnitude: f32) -> Self {
        let magnitude = if magnitude.is_nan() {
            gain_bounds::DEFAULT_VOLUME
        } else {
            magnitude.abs()
        };
        Self(magnitude.clamp(gain_bounds::MIN, gain_bounds::MAX))
    }

    /// Default gain for brightness drags.
    #[must_use]
    pub fn brightness() -> Self {
        Self(gain_bounds::DEFAULT_BRIGHTNESS)
    }

    /// Default gain for volume drags.
    #[must_use]
    pub fn volume() -> Self {
        Self(gain_bounds::DEFAULT_VOLUME)
    }

    /// Returns the magnitude.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Maps a raw vertical drag delta to a level change.
    #[must_use]
    pub fn level_change(self, delta_y: f32) -> f32 {
        -delta_y * self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, GAIN_EPSILON};

    #[test]
    fn percent_rounds_to_nearest() {
        assert_eq!(Percent::from_ratio(0.0).value(), 0);
        assert_eq!(Percent::from_ratio(0.404).value(), 40);
        assert_eq!(Percent::from_ratio(0.406).value(), 41);
        assert_eq!(Percent::from_ratio(1.0), Percent::FULL);
        assert_eq!(Percent::from_ratio(7.0), Percent::FULL);
        assert_eq!(Percent::from_ratio(f32::NAN).value(), 0);
        assert_eq!(Percent::from_ratio(0.5).to_string(), "50%");
    }

    #[test]
    fn brightness_clamps_to_unit_range() {
        assert_abs_diff_eq!(Brightness::new(-1.0).value(), 0.0);
        assert_abs_diff_eq!(Brightness::new(1.7).value(), 1.0);
        assert_abs_diff_eq!(Brightness::new(f32::NAN).value(), 0.0);
        assert_abs_diff_eq!(Brightness::new(0.25).value(), 0.25);
    }

    #[test]
    fn brightness_clamping_is_idempotent() {
        for raw in [-3.0_f32, -0.1, 0.0, 0.42, 1.0, 1.01, 99.0] {
            let once = Brightness::new(raw);
            let twice = Brightness::new(once.value());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn brightness_offset_saturates_at_full() {
        let level = Brightness::new(0.9).offset(0.3);
        assert_abs_diff_eq!(level.value(), 1.0);
        assert_eq!(level.percent(), Percent::FULL);
    }

    #[test]
    fn volume_level_clamps_and_rounds() {
        assert_eq!(VolumeLevel::new(-2.0, 15).step(), 0);
        assert_eq!(VolumeLevel::new(99.0, 15).step(), 15);
        assert_eq!(VolumeLevel::new(5.4, 15).step(), 5);
        assert_eq!(VolumeLevel::new(5.5, 15).step(), 6);
    }

    #[test]
    fn volume_level_accumulates_sub_step_changes() {
        let mut volume = VolumeLevel::from_step(5, 15);
        for _ in 0..3 {
            volume = volume.offset(0.125);
            assert_eq!(volume.step(), 5);
        }
        volume = volume.offset(0.125);
        assert_eq!(volume.step(), 6);
    }

    #[test]
    fn volume_level_zero_max_is_raised() {
        let volume = VolumeLevel::new(3.0, 0);
        assert_eq!(volume.max(), 1);
        assert_eq!(volume.step(), 1);
        assert_eq!(volume.percent(), Percent::FULL);
    }

    #[test]
    fn volume_percent_uses_device_step() {
        assert_eq!(VolumeLevel::from_step(6, 15).percent().value(), 40);
        assert_eq!(VolumeLevel::from_step(0, 15).percent().value(), 0);
        assert_eq!(VolumeLevel::from_step(15, 15).percent().value(), 100);
    }

    #[test]
    fn gain_moving_up_increases_level() {
        let gain = AdjustmentGain::new(0.01);
        assert_abs_diff_eq!(gain.level_change(-100.0), 1.0, epsilon = GAIN_EPSILON);
        assert_abs_diff_eq!(gain.level_change(100.0), -1.0, epsilon = GAIN_EPSILON);
    }

    #[test]
    fn gain_ignores_sign_and_clamps() {
        assert_abs_diff_eq!(AdjustmentGain::new(-0.01).value(), 0.01);
        assert_abs_diff_eq!(AdjustmentGain::new(5.0).value(), gain_bounds::MAX);
        assert_abs_diff_eq!(AdjustmentGain::new(0.0).value(), gain_bounds::MIN);
    }
}
