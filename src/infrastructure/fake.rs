// SPDX-License-Identifier: MPL-2.0
//! In-memory engine and device adapters.
//!
//! Both are cheap-to-clone handles over shared state: the session owns one
//! clone, the caller keeps another to inspect recorded commands or to move
//! the simulated device (hardware volume keys, physical rotation).

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::port::{AudioAttributes, DevicePlatform, MediaEngine};
use crate::domain::media::MediaSource;
use crate::domain::playback::{
    AudioTrackGroup, OrientationLock, PhysicalOrientation, ScalingMode, TrackId,
};

fn lock<T>(state: &Mutex<T>) -> MutexGuard<'_, T> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// FakeEngine
// =============================================================================

/// A command received by [`FakeEngine`], in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Prepare(String),
    Play,
    Pause,
    Release,
    SetAudioTrackOverride(TrackId),
    EnableAudioRenderer,
    SetResizeMode(ScalingMode),
    SetAudioAttributes(AudioAttributes),
}

#[derive(Debug, Default)]
struct EngineState {
    groups: Vec<AudioTrackGroup>,
    commands: Vec<EngineCommand>,
    playing: bool,
}

/// Engine that plays nothing and records every command.
#[derive(Debug, Clone, Default)]
pub struct FakeEngine {
    state: Arc<Mutex<EngineState>>,
}

impl FakeEngine {
    /// Creates an engine reporting `groups` as its audio tracks.
    #[must_use]
    pub fn with_track_groups(groups: Vec<AudioTrackGroup>) -> Self {
        let engine = Self::default();
        engine.set_track_groups(groups);
        engine
    }

    /// Replaces the reported track list, as after a media item change.
    pub fn set_track_groups(&self, groups: Vec<AudioTrackGroup>) {
        lock(&self.state).groups = groups;
    }

    /// Every command received so far.
    #[must_use]
    pub fn commands(&self) -> Vec<EngineCommand> {
        lock(&self.state).commands.clone()
    }

    /// Number of `release()` calls received.
    #[must_use]
    pub fn release_count(&self) -> usize {
        self.count(|command| matches!(command, EngineCommand::Release))
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        lock(&self.state).playing
    }

    /// The last track override issued, if any.
    #[must_use]
    pub fn audio_override(&self) -> Option<TrackId> {
        lock(&self.state)
            .commands
            .iter()
            .rev()
            .find_map(|command| match command {
                EngineCommand::SetAudioTrackOverride(track) => Some(*track),
                _ => None,
            })
    }

    /// The last scaling mode applied, if any.
    #[must_use]
    pub fn scaling_mode(&self) -> Option<ScalingMode> {
        lock(&self.state)
            .commands
            .iter()
            .rev()
            .find_map(|command| match command {
                EngineCommand::SetResizeMode(mode) => Some(*mode),
                _ => None,
            })
    }

    fn count(&self, predicate: impl Fn(&EngineCommand) -> bool) -> usize {
        lock(&self.state)
            .commands
            .iter()
            .filter(|command| predicate(command))
            .count()
    }

    fn record(&self, command: EngineCommand) {
        tracing::trace!(?command, "engine command");
        lock(&self.state).commands.push(command);
    }
}

impl MediaEngine for FakeEngine {
    fn prepare(&mut self, source: &MediaSource) {
        self.record(EngineCommand::Prepare(source.uri()));
    }

    fn play(&mut self) {
        lock(&self.state).playing = true;
        self.record(EngineCommand::Play);
    }

    fn pause(&mut self) {
        lock(&self.state).playing = false;
        self.record(EngineCommand::Pause);
    }

    fn release(&mut self) {
        lock(&self.state).playing = false;
        self.record(EngineCommand::Release);
    }

    fn audio_track_groups(&self) -> Vec<AudioTrackGroup> {
        lock(&self.state).groups.clone()
    }

    fn set_audio_track_override(&mut self, track: TrackId) {
        self.record(EngineCommand::SetAudioTrackOverride(track));
    }

    fn enable_audio_renderer(&mut self) {
        self.record(EngineCommand::EnableAudioRenderer);
    }

    fn set_resize_mode(&mut self, mode: ScalingMode) {
        self.record(EngineCommand::SetResizeMode(mode));
    }

    fn set_audio_attributes(&mut self, attributes: AudioAttributes) {
        self.record(EngineCommand::SetAudioAttributes(attributes));
    }
}

// =============================================================================
// FakeDevice
// =============================================================================

#[derive(Debug)]
struct DeviceState {
    max_volume: u32,
    volume: u32,
    brightness: f32,
    orientation: PhysicalOrientation,
    lock: OrientationLock,
    volume_writes: Vec<u32>,
    brightness_writes: Vec<f32>,
}

/// Simulated device with a volume stream, a window and a rotation sensor.
#[derive(Debug, Clone)]
pub struct FakeDevice {
    state: Arc<Mutex<DeviceState>>,
}

impl Default for FakeDevice {
    /// 15 volume steps at 5, brightness 0.5, held in portrait.
    fn default() -> Self {
        Self::new(15, 5, 0.5, PhysicalOrientation::Portrait)
    }
}

impl FakeDevice {
    #[must_use]
    pub fn new(
        max_volume: u32,
        volume: u32,
        brightness: f32,
        orientation: PhysicalOrientation,
    ) -> Self {
        let max_volume = max_volume.max(1);
        Self {
            state: Arc::new(Mutex::new(DeviceState {
                max_volume,
                volume: volume.min(max_volume),
                brightness: brightness.clamp(0.0, 1.0),
                orientation,
                lock: OrientationLock::Auto,
                volume_writes: Vec::new(),
                brightness_writes: Vec::new(),
            })),
        }
    }

    /// Rotates the simulated device.
    pub fn rotate_to(&self, orientation: PhysicalOrientation) {
        lock(&self.state).orientation = orientation;
    }

    /// Changes the volume outside the session, like a hardware key.
    pub fn press_volume_key(&self, step: u32) {
        let mut state = lock(&self.state);
        state.volume = step.min(state.max_volume);
    }

    /// Current orientation lock requested by the session.
    #[must_use]
    pub fn orientation_lock(&self) -> OrientationLock {
        lock(&self.state).lock
    }

    /// Every volume step written by the session.
    #[must_use]
    pub fn volume_writes(&self) -> Vec<u32> {
        lock(&self.state).volume_writes.clone()
    }

    /// Every brightness level written by the session.
    #[must_use]
    pub fn brightness_writes(&self) -> Vec<f32> {
        lock(&self.state).brightness_writes.clone()
    }
}

impl DevicePlatform for FakeDevice {
    fn max_volume(&self) -> u32 {
        lock(&self.state).max_volume
    }

    fn volume(&self) -> u32 {
        lock(&self.state).volume
    }

    fn set_volume(&mut self, step: u32) {
        let mut state = lock(&self.state);
        state.volume = step.min(state.max_volume);
        let volume = state.volume;
        state.volume_writes.push(volume);
    }

    fn brightness(&self) -> f32 {
        lock(&self.state).brightness
    }

    fn set_brightness(&mut self, level: f32) {
        let mut state = lock(&self.state);
        state.brightness = level.clamp(0.0, 1.0);
        let brightness = state.brightness;
        state.brightness_writes.push(brightness);
    }

    fn physical_orientation(&self) -> PhysicalOrientation {
        lock(&self.state).orientation
    }

    fn set_orientation_lock(&mut self, lock_mode: OrientationLock) {
        tracing::trace!(lock = %lock_mode, "orientation lock");
        lock(&self.state).lock = lock_mode;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn engine_records_commands_in_order() {
        let mut engine = FakeEngine::default();
        let observer = engine.clone();
        let source = MediaSource::parse("/tmp/clip.mp4").unwrap();

        engine.prepare(&source);
        engine.play();
        engine.pause();
        engine.release();

        assert_eq!(
            observer.commands(),
            vec![
                EngineCommand::Prepare("file:///tmp/clip.mp4".into()),
                EngineCommand::Play,
                EngineCommand::Pause,
                EngineCommand::Release,
            ]
        );
        assert_eq!(observer.release_count(), 1);
        assert!(!observer.is_playing());
    }

    #[test]
    fn engine_reports_latest_override_and_scaling() {
        let mut engine = FakeEngine::with_track_groups(vec![AudioTrackGroup::from_formats(
            0,
            &[(None, "audio/mpeg")],
        )]);
        engine.set_audio_track_override(TrackId::new(0, 0));
        engine.set_audio_track_override(TrackId::new(1, 2));
        engine.set_resize_mode(ScalingMode::Stretch);

        assert_eq!(engine.audio_override(), Some(TrackId::new(1, 2)));
        assert_eq!(engine.scaling_mode(), Some(ScalingMode::Stretch));
        assert_eq!(engine.audio_track_groups().len(), 1);
    }

    #[test]
    fn device_clamps_and_records_writes() {
        let mut device = FakeDevice::new(15, 20, 1.5, PhysicalOrientation::Landscape);
        assert_eq!(device.volume(), 15);
        assert_abs_diff_eq!(device.brightness(), 1.0);

        device.set_volume(3);
        device.set_brightness(-0.2);
        assert_eq!(device.volume_writes(), vec![3]);
        assert_eq!(device.brightness_writes(), vec![0.0]);
    }

    #[test]
    fn device_handle_sees_external_changes() {
        let device = FakeDevice::default();
        let session_side = device.clone();

        device.rotate_to(PhysicalOrientation::Landscape);
        device.press_volume_key(9);

        assert_eq!(
            session_side.physical_orientation(),
            PhysicalOrientation::Landscape
        );
        assert_eq!(session_side.volume(), 9);
        assert!(session_side.volume_writes().is_empty());
    }
}
