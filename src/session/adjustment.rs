// SPDX-License-Identifier: MPL-2.0
//! Brightness and volume adjustment controllers.
//!
//! Each controller maps a vertical drag tick to a clamped level, pushes the
//! new level to the device on every tick and reports it so the session can
//! show the matching indicator. Moving the finger up (negative `delta_y`)
//! raises the level.

use crate::application::port::DevicePlatform;
use crate::domain::playback::{AdjustmentGain, Brightness, Percent, VolumeLevel};

/// Window brightness controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessController {
    level: Brightness,
    gain: AdjustmentGain,
}

impl BrightnessController {
    #[must_use]
    pub fn new(gain: AdjustmentGain) -> Self {
        Self {
            level: Brightness::default(),
            gain,
        }
    }

    /// Re-reads the live level from the device.
    pub fn sync<D: DevicePlatform + ?Sized>(&mut self, device: &D) {
        self.level = Brightness::new(device.brightness());
    }

    /// Applies one drag tick and writes the result to the device.
    pub fn apply_delta<D: DevicePlatform + ?Sized>(
        &mut self,
        delta_y: f32,
        device: &mut D,
    ) -> Brightness {
        self.level = self.level.offset(self.gain.level_change(delta_y));
        device.set_brightness(self.level.value());
        self.level
    }

    #[must_use]
    pub fn level(&self) -> Brightness {
        self.level
    }

    #[must_use]
    pub fn percent(&self) -> Percent {
        self.level.percent()
    }
}

/// Media volume controller.
///
/// The level is kept continuous so that slow drags, whose ticks are each
/// smaller than one step, still add up. The device receives the rounded
/// step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeController {
    level: VolumeLevel,
    gain: AdjustmentGain,
}

impl VolumeController {
    #[must_use]
    pub fn new(gain: AdjustmentGain) -> Self {
        Self {
            level: VolumeLevel::from_step(0, 1),
            gain,
        }
    }

    /// Re-reads the live step and maximum from the device.
    pub fn sync<D: DevicePlatform + ?Sized>(&mut self, device: &D) {
        self.level = VolumeLevel::from_step(device.volume(), device.max_volume());
    }

    /// Applies one drag tick and writes the rounded step to the device.
    ///
    /// A device without a volume range (maximum 0) is never written to.
    pub fn apply_delta<D: DevicePlatform + ?Sized>(
        &mut self,
        delta_y: f32,
        device: &mut D,
    ) -> VolumeLevel {
        self.level = self.level.offset(self.gain.level_change(delta_y));
        let device_max = device.max_volume();
        if device_max == 0 {
            tracing::debug!("device has a fixed volume, skipping write");
            return self.level;
        }
        device.set_volume(self.level.step().min(device_max));
        self.level
    }

    #[must_use]
    pub fn level(&self) -> VolumeLevel {
        self.level
    }

    #[must_use]
    pub fn percent(&self) -> Percent {
        self.level.percent()
    }
}
