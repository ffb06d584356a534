// SPDX-License-Identifier: MPL-2.0
//! Interactive playback-control session.
//!
//! Leaf-first:
//!
//! - [`timer`]: cancellable single-shot timers driven by explicit time
//! - [`gesture`]: tap/drag classification of pointer events
//! - [`adjustment`]: brightness and volume controllers
//! - [`overlay`]: mutually exclusive indicators and the control bar
//! - [`track_menu`]: audio track listing and selection override
//! - [`lifecycle`]: pause/resume/destroy with a single release
//! - [`probe`]: background metadata probing
//! - [`playback`]: the [`PlaybackSession`] aggregate
//! - [`driver`]: the single-task event loop

pub mod adjustment;
pub mod driver;
pub mod gesture;
pub mod lifecycle;
pub mod overlay;
pub mod playback;
pub mod probe;
pub mod timer;
pub mod track_menu;

pub use driver::{SessionDriver, EVENT_CHANNEL_CAPACITY};
pub use gesture::{AdjustTarget, Gesture, GestureClassifier, Point, PointerEvent};
pub use lifecycle::{LifecycleSignal, LifecycleState};
pub use overlay::{Indicator, IndicatorKind, OverlayEffect, OverlayManager};
pub use playback::{Effect, PlaybackSession, SessionEvent};
pub use probe::{ProbeRequest, ProbeResult};
pub use timer::{TimerHandle, TimerQueue};
pub use track_menu::{TrackMenu, TrackMenuEntry};
