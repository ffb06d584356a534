// SPDX-License-Identifier: MPL-2.0
//! Audio track selection menu.
//!
//! The menu is a snapshot of the engine's track list taken when it opens.
//! Selection re-reads the list, so a track that disappeared in between is
//! reported instead of being passed to the engine.

use crate::application::port::MediaEngine;
use crate::domain::error::SessionError;
use crate::domain::playback::{TrackDescriptor, TrackId};

/// One row of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMenuEntry {
    pub track: TrackDescriptor,
    pub label: String,
    /// The renderer can decode this track.
    pub supported: bool,
    /// This track is the active override.
    pub active: bool,
}

/// Audio tracks in group-then-index order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackMenu {
    entries: Vec<TrackMenuEntry>,
}

impl TrackMenu {
    /// Builds the menu from the engine's current track list.
    ///
    /// Unsupported tracks are listed too; choosing one is rejected by
    /// [`select_track`].
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoTracksAvailable`] if the engine reports no
    /// audio track at all.
    pub fn open<E: MediaEngine + ?Sized>(
        engine: &E,
        active: Option<TrackId>,
    ) -> Result<Self, SessionError> {
        let entries: Vec<TrackMenuEntry> = engine
            .audio_track_groups()
            .into_iter()
            .flat_map(|group| group.tracks)
            .map(|track| TrackMenuEntry {
                label: track.label(),
                supported: track.codec().is_some(),
                active: Some(track.id) == active,
                track,
            })
            .collect();
        if entries.is_empty() {
            return Err(SessionError::NoTracksAvailable);
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[TrackMenuEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at menu position `position` (0-based).
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&TrackMenuEntry> {
        self.entries.get(position)
    }
}

/// Overrides the engine's audio selection with exactly `track` and
/// re-enables the audio renderer.
///
/// # Errors
///
/// - [`SessionError::TrackUnavailable`] if the engine no longer reports
///   `track`
/// - [`SessionError::UnsupportedFormat`] if its codec is not supported;
///   the engine is left untouched
pub fn select_track<E: MediaEngine + ?Sized>(
    engine: &mut E,
    track: TrackId,
) -> Result<TrackDescriptor, SessionError> {
    let descriptor = engine
        .audio_track_groups()
        .into_iter()
        .flat_map(|group| group.tracks)
        .find(|candidate| candidate.id == track)
        .ok_or(SessionError::TrackUnavailable(track))?;

    if descriptor.codec().is_none() {
        return Err(SessionError::UnsupportedFormat {
            mime: descriptor.mime,
        });
    }

    engine.set_audio_track_override(track);
    engine.enable_audio_renderer();
    Ok(descriptor)
}
