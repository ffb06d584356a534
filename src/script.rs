// SPDX-License-Identifier: MPL-2.0
//! Textual event scripts for headless sessions.
//!
//! One command per line; `#` starts a comment:
//!
//! ```text
//! # drag up on the right half
//! down 800 500
//! move 800 400
//! up
//! wait 2000
//! track 2
//! destroy
//! ```

use std::time::Duration;

use tokio::sync::mpsc;

use crate::application::port::MediaEngine;
use crate::domain::playback::{AudioTrackGroup, PhysicalOrientation, ResizeMode, TrackId};
use crate::error::{Error, Result};
use crate::infrastructure::{FakeDevice, FakeEngine};
use crate::session::{Point, PointerEvent, SessionEvent};

/// One script command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptCommand {
    Down(Point),
    Move(Point),
    Up,
    Cancel,
    Tap,
    Rotate,
    /// Opens the crop menu.
    Crop,
    /// Chooses a crop menu entry.
    CropMode(ResizeMode),
    /// Opens the track menu.
    Tracks,
    /// Chooses the N-th track (1-based, across all groups).
    Track(usize),
    TouchOverlay,
    Pause,
    Resume,
    /// Physically rotates the simulated device.
    Orientation(PhysicalOrientation),
    Wait(Duration),
    Destroy,
}

/// A command with its 1-based source line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    pub line: usize,
    pub command: ScriptCommand,
}

/// Parses a whole script.
///
/// # Errors
///
/// Returns [`Error::Script`] for the first line that cannot be parsed.
pub fn parse(text: &str) -> Result<Vec<ScriptStep>> {
    text.lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let content = raw.split('#').next().unwrap_or_default().trim();
            (!content.is_empty()).then_some((index + 1, content))
        })
        .map(|(line, content)| {
            parse_command(content)
                .map(|command| ScriptStep { line, command })
                .map_err(|message| Error::Script { line, message })
        })
        .collect()
}

fn parse_command(content: &str) -> std::result::Result<ScriptCommand, String> {
    let mut words = content.split_whitespace();
    let name = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let command = match (name.as_str(), args.as_slice()) {
        ("down", [x, y]) => ScriptCommand::Down(parse_point(x, y)?),
        ("move", [x, y]) => ScriptCommand::Move(parse_point(x, y)?),
        ("up", []) => ScriptCommand::Up,
        ("cancel", []) => ScriptCommand::Cancel,
        ("tap", []) => ScriptCommand::Tap,
        ("rotate", []) => ScriptCommand::Rotate,
        ("crop", []) => ScriptCommand::Crop,
        ("crop", [mode]) => ScriptCommand::CropMode(
            ResizeMode::from_label(mode).ok_or_else(|| format!("unknown crop mode `{mode}`"))?,
        ),
        ("tracks", []) => ScriptCommand::Tracks,
        ("track", [n]) => match n.parse::<usize>() {
            Ok(position) if position > 0 => ScriptCommand::Track(position),
            _ => return Err(format!("track number must be 1 or more, got `{n}`")),
        },
        ("touch-overlay", []) => ScriptCommand::TouchOverlay,
        ("pause", []) => ScriptCommand::Pause,
        ("resume", []) => ScriptCommand::Resume,
        ("orientation", [value]) => match value.to_ascii_lowercase().as_str() {
            "portrait" => ScriptCommand::Orientation(PhysicalOrientation::Portrait),
            "landscape" => ScriptCommand::Orientation(PhysicalOrientation::Landscape),
            _ => return Err(format!("unknown orientation `{value}`")),
        },
        ("wait", [millis]) => ScriptCommand::Wait(Duration::from_millis(
            millis
                .parse::<u64>()
                .map_err(|_| format!("invalid wait `{millis}`"))?,
        )),
        ("destroy", []) => ScriptCommand::Destroy,
        (
            "down" | "move" | "up" | "cancel" | "tap" | "rotate" | "crop" | "tracks" | "track"
            | "touch-overlay" | "pause" | "resume" | "orientation" | "wait" | "destroy",
            _,
        ) => return Err(format!("wrong number of arguments for `{name}`")),
        _ => return Err(format!("unknown command `{name}`")),
    };
    Ok(command)
}

fn parse_point(x: &str, y: &str) -> std::result::Result<Point, String> {
    let coordinate = |value: &str| {
        value
            .parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("invalid coordinate `{value}`"))
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}

/// Parses a track list such as `en:audio/ac3,-:audio/mpeg` into one
/// audio group. `-` stands for "no language".
///
/// # Errors
///
/// Returns [`Error::Config`] for an entry without a `:` separator.
pub fn parse_track_list(list: &str) -> Result<AudioTrackGroup> {
    let formats = list
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (language, mime) = entry
                .split_once(':')
                .ok_or_else(|| Error::Config(format!("track `{entry}` is not LANG:MIME")))?;
            let language = Some(language.trim()).filter(|lang| *lang != "-");
            Ok((language, mime.trim()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(AudioTrackGroup::from_formats(0, &formats))
}

/// Plays `steps` into a session through `events`.
///
/// Pointer events are stamped with the current tokio time. Track numbers
/// are resolved against the engine's track list at the moment they run.
/// Returns early once the session stops accepting events.
pub async fn replay(
    steps: &[ScriptStep],
    events: &mpsc::Sender<SessionEvent>,
    engine: &FakeEngine,
    device: &FakeDevice,
) {
    for step in steps {
        let now = tokio::time::Instant::now().into_std();
        let event = match step.command {
            ScriptCommand::Wait(duration) => {
                tokio::time::sleep(duration).await;
                continue;
            }
            ScriptCommand::Orientation(orientation) => {
                device.rotate_to(orientation);
                continue;
            }
            ScriptCommand::Down(position) => {
                SessionEvent::Pointer(PointerEvent::Down { position, at: now })
            }
            ScriptCommand::Move(position) => {
                SessionEvent::Pointer(PointerEvent::Move { position, at: now })
            }
            ScriptCommand::Up => SessionEvent::Pointer(PointerEvent::Up { at: now }),
            ScriptCommand::Cancel => SessionEvent::Pointer(PointerEvent::Cancel),
            ScriptCommand::Tap => SessionEvent::SurfaceTapped,
            ScriptCommand::Rotate => SessionEvent::RotatePressed,
            ScriptCommand::Crop => SessionEvent::CropPressed,
            ScriptCommand::CropMode(mode) => SessionEvent::ResizeModeChosen(mode),
            ScriptCommand::Tracks => SessionEvent::AudioTrackPressed,
            ScriptCommand::Track(position) => match nth_track(engine, position) {
                Some(track) => SessionEvent::AudioTrackChosen(track),
                None => {
                    tracing::warn!(line = step.line, position, "no such track in the engine");
                    continue;
                }
            },
            ScriptCommand::TouchOverlay => SessionEvent::OverlayInteraction,
            ScriptCommand::Pause => SessionEvent::Pause,
            ScriptCommand::Resume => SessionEvent::Resume,
            ScriptCommand::Destroy => SessionEvent::Destroy,
        };
        tracing::debug!(line = step.line, ?event, "script");
        if events.send(event).await.is_err() {
            tracing::debug!(line = step.line, "session closed, stopping script");
            return;
        }
    }
}

fn nth_track(engine: &FakeEngine, position: usize) -> Option<TrackId> {
    engine
        .audio_track_groups()
        .into_iter()
        .flat_map(|group| group.tracks)
        .nth(position.checked_sub(1)?)
        .map(|track| track.id)
}
