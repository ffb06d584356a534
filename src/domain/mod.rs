// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback-control rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability and architectural purity.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`error`]: Domain error types ([`SessionError`](error::SessionError))
//! - [`media`]: Probed media details ([`VideoDetails`](media::VideoDetails))
//! - [`playback`]: Playback-control values ([`Brightness`](playback::Brightness),
//!   [`VolumeLevel`](playback::VolumeLevel), [`OrientationLock`](playback::OrientationLock),
//!   [`ResizeMode`](playback::ResizeMode), [`TrackDescriptor`](playback::TrackDescriptor))
//! - [`ui`]: Gesture and overlay tunables ([`TapTimeout`](ui::TapTimeout),
//!   [`DragThreshold`](ui::DragThreshold), [`OverlayDelay`](ui::OverlayDelay))

pub mod diagnostics;
pub mod error;
pub mod media;
pub mod playback;
pub mod ui;
