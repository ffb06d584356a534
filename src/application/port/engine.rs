// SPDX-License-Identifier: MPL-2.0
//! Media-playback engine port definition.
//!
//! The engine owns decoding and rendering. The session only issues commands
//! to it and reads its audio track list.
//!
//! # Design Notes
//!
//! - Commands are synchronous, non-blocking and infallible from the
//!   session's point of view; the engine reports nothing back
//! - The track list is read fresh on every call, the engine is authoritative
//! - Uses domain types only (`AudioTrackGroup`, `TrackId`, `ScalingMode`)

use crate::domain::media::MediaSource;
use crate::domain::playback::{AudioTrackGroup, ScalingMode, TrackId};

/// How the audio stream is routed by the platform mixer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioUsage {
    #[default]
    Media,
    Notification,
}

/// What kind of content the audio stream carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AudioContentType {
    #[default]
    Movie,
    Music,
    Speech,
}

/// Audio attributes applied once at session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioAttributes {
    pub usage: AudioUsage,
    pub content_type: AudioContentType,
    /// Let the engine pause on focus loss and resume on regain.
    pub handle_audio_focus: bool,
}

impl AudioAttributes {
    /// Attributes for full-screen movie playback.
    #[must_use]
    pub fn movie() -> Self {
        Self {
            usage: AudioUsage::Media,
            content_type: AudioContentType::Movie,
            handle_audio_focus: true,
        }
    }
}

/// Port for the external media-playback engine.
///
/// # Lifecycle
///
/// 1. `prepare()` the source and `set_audio_attributes()`
/// 2. `play()` / `pause()` any number of times
/// 3. `release()` exactly once; the session never calls anything afterwards
pub trait MediaEngine {
    /// Loads the media item and prepares the pipeline.
    fn prepare(&mut self, source: &MediaSource);

    /// Sets play intent to true.
    fn play(&mut self);

    /// Sets play intent to false. Resources are kept.
    fn pause(&mut self);

    /// Releases the decoder and renderer.
    fn release(&mut self);

    /// Returns the audio track groups of the current item, in engine order.
    fn audio_track_groups(&self) -> Vec<AudioTrackGroup>;

    /// Restricts audio selection to exactly `track`.
    fn set_audio_track_override(&mut self, track: TrackId);

    /// Re-enables the audio renderer after an override.
    fn enable_audio_renderer(&mut self);

    /// Applies the scaling mode to the rendering surface.
    fn set_resize_mode(&mut self, mode: ScalingMode);

    fn set_audio_attributes(&mut self, attributes: AudioAttributes);
}
