// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for playback-session activity.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Gesture Actions
    // ==========================================================================
    /// A drag tick changed the display brightness.
    AdjustBrightness {
        /// Indicator percentage after the change.
        percent: u8,
    },

    /// A drag tick changed the device volume.
    AdjustVolume {
        /// Device step after the change.
        step: u32,
    },

    /// A tap toggled the playback-control bar.
    ToggleControls {
        /// Visibility after the toggle.
        visible: bool,
    },

    // ==========================================================================
    // Button Actions
    // ==========================================================================
    /// The rotate button changed the orientation lock.
    SetOrientationLock { lock: String },

    /// The crop button menu was opened.
    OpenResizeMenu,

    /// A crop/resize mode was applied.
    SetResizeMode { mode: String },

    /// The audio-track menu was opened.
    OpenTrackMenu {
        /// Number of tracks listed.
        tracks: usize,
    },

    /// An audio track override was issued.
    SelectAudioTrack { group: usize, index: usize },

    // ==========================================================================
    // Lifecycle Actions
    // ==========================================================================
    Pause,
    Resume,
    Destroy,
}

/// A diagnostic event with its monotonic timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred.
    pub at: Instant,
    /// The type and data of the event.
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind, at: Instant) -> Self {
        Self { at, kind }
    }
}

/// The type and associated data for a diagnostic event.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
    },

    /// Non-fatal problem: a rejected selection, a failed probe, a call after
    /// release.
    Warning {
        message: String,
    },

    Error {
        message: String,
    },
}
