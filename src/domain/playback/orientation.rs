// SPDX-License-Identifier: MPL-2.0
//! Orientation-lock state machine.
//!
//! The rotate button cycles between free sensor rotation and a lock in the
//! orientation the device is physically held in at the moment of the press.

/// Orientation the device is physically held in, as reported by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalOrientation {
    Portrait,
    Landscape,
}

/// Requested screen orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrientationLock {
    /// Follow the sensor.
    #[default]
    Auto,
    /// Locked to portrait.
    LockedPortrait,
    /// Locked to landscape; the sensor may still flip between the two
    /// landscape sides.
    LockedLandscape,
}

impl OrientationLock {
    /// Returns the state after a rotate-button press.
    ///
    /// The transition depends on the live `physical` orientation, not only
    /// on the current lock: pressing while held in the orientation that is
    /// not locked moves the lock there instead of unlocking. Pressing while
    /// already locked in the held orientation unlocks.
    ///
    /// # Example
    ///
    /// ```
    /// use cinestream::domain::playback::{OrientationLock, PhysicalOrientation};
    ///
    /// let held = PhysicalOrientation::Portrait;
    /// let locked = OrientationLock::Auto.toggled(held);
    /// assert_eq!(locked, OrientationLock::LockedPortrait);
    /// assert_eq!(locked.toggled(held), OrientationLock::Auto);
    /// ```
    #[must_use]
    pub fn toggled(self, physical: PhysicalOrientation) -> Self {
        match physical {
            PhysicalOrientation::Portrait if self != Self::LockedPortrait => Self::LockedPortrait,
            PhysicalOrientation::Landscape if self != Self::LockedLandscape => {
                Self::LockedLandscape
            }
            _ => Self::Auto,
        }
    }

    /// Returns true if rotation is locked (drives the rotate icon).
    #[must_use]
    pub fn is_locked(self) -> bool {
        !matches!(self, Self::Auto)
    }
}

impl std::fmt::Display for OrientationLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::LockedPortrait => "portrait",
            Self::LockedLandscape => "landscape",
        };
        f.write_str(name)
    }
}
