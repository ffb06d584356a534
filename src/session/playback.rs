// SPDX-License-Identifier: MPL-2.0
//! The playback-control session.
//!
//! [`PlaybackSession`] owns the engine and device handles, both adjustment
//! controllers, the overlay manager and the small pieces of UI state (crop
//! mode, orientation lock, active track). Every input goes through
//! [`PlaybackSession::handle`] on a single execution context and returns
//! the [`Effect`]s the view layer must render. Time is always passed in, so
//! the whole state machine runs deterministically under test.

use std::time::Instant;

use crate::application::port::{AudioAttributes, DevicePlatform, MediaEngine};
use crate::config::SessionSettings;
use crate::diagnostics::{DiagnosticsCollector, UserAction};
use crate::domain::error::SessionError;
use crate::domain::media::{DetailsView, MediaSource, VideoDetails};
use crate::domain::playback::{OrientationLock, ResizeMode, TrackId};

use super::adjustment::{BrightnessController, VolumeController};
use super::gesture::{AdjustTarget, Gesture, GestureClassifier, PointerEvent};
use super::lifecycle::{Lifecycle, LifecycleSignal, LifecycleState};
use super::overlay::{IndicatorKind, OverlayEffect, OverlayManager};
use super::probe::{ProbeRequest, ProbeResult};
use super::track_menu::{select_track, TrackMenu};

/// Input from the surrounding UI shell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    /// Raw touch input on the playback surface.
    Pointer(PointerEvent),
    /// A tap recognised by the shell itself.
    SurfaceTapped,
    /// The playback surface changed width (rotation, split screen).
    SurfaceResized { width: f32 },
    RotatePressed,
    CropPressed,
    /// An entry of the crop menu was chosen.
    ResizeModeChosen(ResizeMode),
    AudioTrackPressed,
    /// An entry of the track menu was chosen.
    AudioTrackChosen(TrackId),
    /// Any touch on an overlay region.
    OverlayInteraction,
    Pause,
    Resume,
    Destroy,
}

/// Output for the view layer (and, for [`Effect::StartProbe`], the driver).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Overlay(OverlayEffect),
    /// Short transient message.
    Toast(String),
    ShowTrackMenu(TrackMenu),
    ShowResizeMenu { current: ResizeMode },
    OrientationLockChanged(OrientationLock),
    ResizeModeChanged(ResizeMode),
    /// New video details: the summary (`01:23 · 1080p · 1.5 MB`) and the
    /// panel rows.
    DetailsChanged(DetailsView),
    StartProbe(ProbeRequest),
    /// The engine was released; nothing further will happen.
    Released,
}

pub struct PlaybackSession<E, D> {
    source: MediaSource,
    engine: E,
    device: D,
    gestures: GestureClassifier,
    brightness: BrightnessController,
    volume: VolumeController,
    overlay: OverlayManager,
    orientation_lock: OrientationLock,
    resize_mode: ResizeMode,
    active_track: Option<TrackId>,
    lifecycle: Lifecycle,
    diagnostics: DiagnosticsCollector,
    details: Option<VideoDetails>,
    details_view: Option<DetailsView>,
    probe_generation: u64,
    pending_probe: Option<u64>,
}

impl<E: MediaEngine, D: DevicePlatform> PlaybackSession<E, D> {
    /// Enters the playback screen: prepares and starts the engine, reads the
    /// device levels, shows the control bar and requests a metadata probe.
    pub fn start(
        source: MediaSource,
        mut engine: E,
        device: D,
        settings: &SessionSettings,
        surface_width: f32,
        now: Instant,
    ) -> (Self, Vec<Effect>) {
        engine.prepare(&source);
        engine.set_audio_attributes(AudioAttributes::movie());
        engine.play();

        let mut brightness = BrightnessController::new(settings.brightness_gain);
        let mut volume = VolumeController::new(settings.volume_gain);
        brightness.sync(&device);
        volume.sync(&device);

        tracing::info!(uri = %source.uri(), "playback session started");
        let mut session = Self {
            source,
            engine,
            device,
            gestures: GestureClassifier::new(
                settings.drag_threshold,
                settings.tap_timeout,
                surface_width,
            ),
            brightness,
            volume,
            overlay: OverlayManager::new(settings.indicator_dismiss, settings.control_bar_hide),
            orientation_lock: OrientationLock::default(),
            resize_mode: ResizeMode::default(),
            active_track: None,
            lifecycle: Lifecycle::default(),
            diagnostics: DiagnosticsCollector::new(settings.diagnostics_capacity, now),
            details: None,
            details_view: None,
            probe_generation: 0,
            pending_probe: None,
        };

        let mut effects = Vec::with_capacity(2);
        effects.extend(session.overlay.hide_indicator().map(Effect::Overlay));
        effects.push(Effect::Overlay(session.overlay.show_control_bar(now)));
        if let Some(request) = session.request_probe() {
            effects.push(Effect::StartProbe(request));
        }
        (session, effects)
    }

    /// Handles one input event.
    pub fn handle(&mut self, event: SessionEvent, now: Instant) -> Vec<Effect> {
        if self.lifecycle.is_released() {
            self.reject_after_release(&event, now);
            return Vec::new();
        }

        match event {
            SessionEvent::Pointer(pointer) => self.on_pointer(pointer, now),
            SessionEvent::SurfaceTapped => vec![self.toggle_controls(now)],
            SessionEvent::SurfaceResized { width } => {
                self.gestures.set_surface_width(width);
                Vec::new()
            }
            SessionEvent::RotatePressed => {
                self.overlay.touch(now);
                self.rotate(now)
            }
            SessionEvent::CropPressed => {
                self.overlay.touch(now);
                self.diagnostics.log_action(UserAction::OpenResizeMenu, now);
                vec![Effect::ShowResizeMenu {
                    current: self.resize_mode,
                }]
            }
            SessionEvent::ResizeModeChosen(mode) => {
                self.overlay.touch(now);
                self.set_resize_mode(mode, now)
            }
            SessionEvent::AudioTrackPressed => {
                self.overlay.touch(now);
                self.open_track_menu(now)
            }
            SessionEvent::AudioTrackChosen(track) => {
                self.overlay.touch(now);
                self.choose_track(track, now)
            }
            SessionEvent::OverlayInteraction => {
                self.overlay.touch(now);
                Vec::new()
            }
            SessionEvent::Pause => self.lifecycle_call(LifecycleSignal::Pause, now),
            SessionEvent::Resume => self.lifecycle_call(LifecycleSignal::Resume, now),
            SessionEvent::Destroy => self.lifecycle_call(LifecycleSignal::Destroy, now),
        }
    }

    /// Fires every overlay timer due at `now`.
    pub fn expire(&mut self, now: Instant) -> Vec<Effect> {
        if self.lifecycle.is_released() {
            return Vec::new();
        }
        self.overlay
            .expire(now)
            .into_iter()
            .map(Effect::Overlay)
            .collect()
    }

    /// Earliest pending timer deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.lifecycle.is_released() {
            None
        } else {
            self.overlay.next_deadline()
        }
    }

    /// Starts a new probe generation for the current source. Any result of
    /// an earlier generation will be ignored.
    pub fn request_probe(&mut self) -> Option<ProbeRequest> {
        if self.lifecycle.is_released() {
            return None;
        }
        self.probe_generation += 1;
        self.pending_probe = Some(self.probe_generation);
        Some(ProbeRequest {
            generation: self.probe_generation,
            path: self.source.path().to_path_buf(),
        })
    }

    /// Applies a probe result delivered back to the session context.
    pub fn apply_probe(&mut self, result: ProbeResult, now: Instant) -> Vec<Effect> {
        if self.lifecycle.is_released() || self.pending_probe != Some(result.generation) {
            tracing::debug!(generation = result.generation, "discarding stale probe result");
            return Vec::new();
        }
        self.pending_probe = None;

        let view = match result.outcome {
            Ok(details) => {
                let view = details.view();
                self.details = Some(details);
                view
            }
            Err(err) => {
                tracing::warn!(%err, "metadata probe failed");
                self.diagnostics.log_warning(err.to_string(), now);
                self.details = None;
                DetailsView::unknown()
            }
        };
        self.details_view = Some(view.clone());
        vec![Effect::DetailsChanged(view)]
    }

    fn on_pointer(&mut self, pointer: PointerEvent, now: Instant) -> Vec<Effect> {
        match self.gestures.handle(pointer) {
            Gesture::None => Vec::new(),
            Gesture::Tap => vec![self.toggle_controls(now)],
            Gesture::Adjust {
                target,
                delta_y,
                drag_started,
            } => self.adjust(target, delta_y, drag_started, now),
        }
    }

    fn toggle_controls(&mut self, now: Instant) -> Effect {
        let effect = self.overlay.toggle_control_bar(now);
        self.diagnostics.log_action(
            UserAction::ToggleControls {
                visible: self.overlay.control_bar_visible(),
            },
            now,
        );
        Effect::Overlay(effect)
    }

    fn adjust(
        &mut self,
        target: AdjustTarget,
        delta_y: f32,
        drag_started: bool,
        now: Instant,
    ) -> Vec<Effect> {
        let (kind, percent) = match target {
            AdjustTarget::Brightness => {
                if drag_started {
                    self.brightness.sync(&self.device);
                }
                let level = self.brightness.apply_delta(delta_y, &mut self.device);
                self.diagnostics.log_action(
                    UserAction::AdjustBrightness {
                        percent: level.percent().value(),
                    },
                    now,
                );
                (IndicatorKind::Brightness, level.percent())
            }
            AdjustTarget::Volume => {
                if drag_started {
                    self.volume.sync(&self.device);
                }
                let level = self.volume.apply_delta(delta_y, &mut self.device);
                self.diagnostics
                    .log_action(UserAction::AdjustVolume { step: level.step() }, now);
                (IndicatorKind::Volume, level.percent())
            }
        };
        self.overlay
            .show_indicator(kind, percent, now)
            .into_iter()
            .map(Effect::Overlay)
            .collect()
    }

    fn rotate(&mut self, now: Instant) -> Vec<Effect> {
        let physical = self.device.physical_orientation();
        let lock = self.orientation_lock.toggled(physical);
        self.device.set_orientation_lock(lock);
        tracing::debug!(from = %self.orientation_lock, to = %lock, ?physical, "orientation lock");
        self.orientation_lock = lock;
        self.diagnostics.log_action(
            UserAction::SetOrientationLock {
                lock: lock.to_string(),
            },
            now,
        );
        vec![Effect::OrientationLockChanged(lock)]
    }

    fn set_resize_mode(&mut self, mode: ResizeMode, now: Instant) -> Vec<Effect> {
        self.engine.set_resize_mode(mode.scaling());
        self.resize_mode = mode;
        tracing::debug!(mode = mode.label(), "resize mode");
        self.diagnostics.log_action(
            UserAction::SetResizeMode {
                mode: mode.label().to_string(),
            },
            now,
        );
        vec![Effect::ResizeModeChanged(mode)]
    }

    fn open_track_menu(&mut self, now: Instant) -> Vec<Effect> {
        match TrackMenu::open(&self.engine, self.active_track) {
            Ok(menu) => {
                self.diagnostics
                    .log_action(UserAction::OpenTrackMenu { tracks: menu.len() }, now);
                vec![Effect::ShowTrackMenu(menu)]
            }
            Err(err) => self.reject(err, now),
        }
    }

    fn choose_track(&mut self, track: TrackId, now: Instant) -> Vec<Effect> {
        match select_track(&mut self.engine, track) {
            Ok(descriptor) => {
                self.active_track = Some(track);
                tracing::info!(%track, mime = %descriptor.mime, "audio track selected");
                self.diagnostics.log_action(
                    UserAction::SelectAudioTrack {
                        group: track.group,
                        index: track.index,
                    },
                    now,
                );
                vec![Effect::Toast(format!("Selected: {}", descriptor.label()))]
            }
            Err(err) => self.reject(err, now),
        }
    }

    fn lifecycle_call(&mut self, signal: LifecycleSignal, now: Instant) -> Vec<Effect> {
        if let Err(err) = self.lifecycle.apply(signal, &mut self.engine) {
            return self.reject(err, now);
        }
        tracing::info!(?signal, "lifecycle");
        let action = match signal {
            LifecycleSignal::Pause => UserAction::Pause,
            LifecycleSignal::Resume => UserAction::Resume,
            LifecycleSignal::Destroy => UserAction::Destroy,
        };
        self.diagnostics.log_action(action, now);

        if self.lifecycle.is_released() {
            self.overlay.cancel_all();
            self.pending_probe = None;
            vec![Effect::Released]
        } else {
            Vec::new()
        }
    }

    /// Logs a non-fatal failure and turns user-visible ones into a toast.
    fn reject(&mut self, err: SessionError, now: Instant) -> Vec<Effect> {
        tracing::warn!(%err, key = err.i18n_key(), "request rejected");
        self.diagnostics.log_warning(err.to_string(), now);
        if err.is_user_visible() {
            vec![Effect::Toast(err.to_string())]
        } else {
            Vec::new()
        }
    }

    fn reject_after_release(&mut self, event: &SessionEvent, now: Instant) {
        tracing::warn!(?event, "ignored after release");
        self.diagnostics
            .log_warning(SessionError::EngineUnavailable.to_string(), now);
    }
}

impl<E, D> PlaybackSession<E, D> {
    #[must_use]
    pub fn source(&self) -> &MediaSource {
        &self.source
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn device(&self) -> &D {
        &self.device
    }

    #[must_use]
    pub fn overlay(&self) -> &OverlayManager {
        &self.overlay
    }

    #[must_use]
    pub fn orientation_lock(&self) -> OrientationLock {
        self.orientation_lock
    }

    #[must_use]
    pub fn resize_mode(&self) -> ResizeMode {
        self.resize_mode
    }

    #[must_use]
    pub fn active_track(&self) -> Option<TrackId> {
        self.active_track
    }

    #[must_use]
    pub fn brightness(&self) -> &BrightnessController {
        &self.brightness
    }

    #[must_use]
    pub fn volume(&self) -> &VolumeController {
        &self.volume
    }

    #[must_use]
    pub fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.lifecycle.is_released()
    }

    #[must_use]
    pub fn details(&self) -> Option<&VideoDetails> {
        self.details.as_ref()
    }

    /// Summary line of the last applied probe result.
    #[must_use]
    pub fn details_label(&self) -> Option<&str> {
        self.details_view.as_ref().map(|view| view.summary.as_str())
    }

    #[must_use]
    pub fn details_view(&self) -> Option<&DetailsView> {
        self.details_view.as_ref()
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }
}
