// SPDX-License-Identifier: MPL-2.0
//! Device platform port definition.
//!
//! Volume, window brightness and screen orientation live outside the
//! session. Reads return the live platform value, so external changes
//! (hardware volume keys, auto-rotate) are always visible.

use crate::domain::playback::{OrientationLock, PhysicalOrientation};

/// Port for device-level capabilities.
pub trait DevicePlatform {
    /// Highest media volume step (e.g. 15).
    fn max_volume(&self) -> u32;

    /// Current media volume step in `0..=max_volume()`.
    fn volume(&self) -> u32;

    fn set_volume(&mut self, step: u32);

    /// Current window brightness in `[0.0, 1.0]`.
    fn brightness(&self) -> f32;

    fn set_brightness(&mut self, level: f32);

    /// Orientation reported by the sensor right now.
    fn physical_orientation(&self) -> PhysicalOrientation;

    fn set_orientation_lock(&mut self, lock: OrientationLock);
}
