// SPDX-License-Identifier: MPL-2.0
//! Playback-control domain types.
//!
//! This module contains the value objects the playback-control session is
//! built from: bounded adjustment levels, the orientation-lock and resize
//! state machines, and audio track descriptors.

pub mod newtypes;
pub mod orientation;
pub mod resize;
pub mod track;

// Re-export commonly used types
pub use newtypes::{AdjustmentGain, Brightness, Percent, VolumeLevel};
pub use orientation::{OrientationLock, PhysicalOrientation};
pub use resize::{ResizeMode, ScalingMode};
pub use track::{AudioCodec, AudioTrackGroup, TrackDescriptor, TrackId};
