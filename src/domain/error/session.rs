// SPDX-License-Identifier: MPL-2.0
//! Errors raised by the playback-control session.
//!
//! None of these is fatal: the worst outcome is a rejected menu selection or
//! a placeholder label. Playback itself is never aborted by the control
//! layer.

use crate::domain::playback::TrackId;
use std::fmt;

/// Control-layer failure, shown to the user as a short message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The media path handed to the player is empty or not a local file.
    InvalidMediaPath,

    /// The track menu was opened but the engine reports no audio groups.
    NoTracksAvailable,

    /// The selected track uses a codec outside the supported set.
    UnsupportedFormat { mime: String },

    /// The selected track is no longer reported by the engine.
    TrackUnavailable(TrackId),

    /// The background duration/codec probe failed.
    MetadataProbeFailed(String),

    /// A call reached the session after the engine was released.
    EngineUnavailable,
}

impl SessionError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SessionError::InvalidMediaPath => "error-media-path-invalid",
            SessionError::NoTracksAvailable => "error-audio-tracks-none",
            SessionError::UnsupportedFormat { .. } => "error-audio-track-unsupported",
            SessionError::TrackUnavailable(_) => "error-audio-track-unavailable",
            SessionError::MetadataProbeFailed(_) => "error-metadata-probe",
            SessionError::EngineUnavailable => "error-engine-released",
        }
    }

    /// Returns true if the message should be surfaced as a toast.
    ///
    /// Probe failures only degrade a label and post-release calls are
    /// silent.
    #[must_use]
    pub fn is_user_visible(&self) -> bool {
        matches!(
            self,
            SessionError::InvalidMediaPath
                | SessionError::NoTracksAvailable
                | SessionError::UnsupportedFormat { .. }
                | SessionError::TrackUnavailable(_)
        )
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::InvalidMediaPath => write!(f, "Invalid video file path"),
            SessionError::NoTracksAvailable => write!(f, "No audio tracks available."),
            SessionError::UnsupportedFormat { .. } => write!(f, "Unsupported audio format."),
            SessionError::TrackUnavailable(id) => {
                write!(f, "Audio track {} is no longer available.", id)
            }
            SessionError::MetadataProbeFailed(msg) => write!(f, "Metadata probe failed: {}", msg),
            SessionError::EngineUnavailable => write!(f, "Playback engine already released"),
        }
    }
}

impl std::error::Error for SessionError {}
