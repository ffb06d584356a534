// SPDX-License-Identifier: MPL-2.0
//! Session driver tests on tokio's paused clock.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use cinestream::application::port::MetadataProbe;
use cinestream::config::SessionSettings;
use cinestream::domain::error::SessionError;
use cinestream::domain::media::{MediaSource, VideoDetails};
use cinestream::infrastructure::{FakeDevice, FakeEngine};
use cinestream::script;
use cinestream::session::{
    Effect, OverlayEffect, PlaybackSession, SessionDriver, SessionEvent, EVENT_CHANNEL_CAPACITY,
};
use tokio::sync::mpsc;
use tokio::time::Instant;

struct StaticProbe;

impl MetadataProbe for StaticProbe {
    fn probe(&self, _path: &Path) -> Result<VideoDetails, SessionError> {
        Ok(VideoDetails {
            duration: Some(Duration::from_secs(61)),
            mime: Some("video/h264".to_string()),
            resolution: Some((1280, 720)),
            bitrate_bps: Some(4_500_000),
            ..VideoDetails::default()
        })
    }
}

struct Harness {
    engine: FakeEngine,
    device: FakeDevice,
    events: mpsc::Sender<SessionEvent>,
    effects: mpsc::UnboundedReceiver<Effect>,
    driver: tokio::task::JoinHandle<PlaybackSession<FakeEngine, FakeDevice>>,
}

fn spawn_session() -> Harness {
    let engine = FakeEngine::default();
    let device = FakeDevice::default();
    let source = MediaSource::parse("/videos/clip.mp4").expect("valid path");
    let (session, initial) = PlaybackSession::start(
        source,
        engine.clone(),
        device.clone(),
        &SessionSettings::default(),
        1000.0,
        Instant::now().into_std(),
    );

    let (effects_tx, effects) = mpsc::unbounded_channel();
    let (events, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let driver = SessionDriver::new(session, initial, Arc::new(StaticProbe), effects_tx);
    Harness {
        engine,
        device,
        events,
        effects,
        driver: tokio::spawn(driver.run(events_rx)),
    }
}

async fn next_effect(effects: &mut mpsc::UnboundedReceiver<Effect>) -> Effect {
    effects.recv().await.expect("driver is still running")
}

#[tokio::test(start_paused = true)]
async fn control_bar_hides_after_its_delay() {
    let started = Instant::now();
    let mut harness = spawn_session();

    assert_eq!(
        next_effect(&mut harness.effects).await,
        Effect::Overlay(OverlayEffect::ControlBarShown)
    );
    loop {
        if next_effect(&mut harness.effects).await
            == Effect::Overlay(OverlayEffect::ControlBarHidden)
        {
            break;
        }
    }
    assert!(started.elapsed() >= Duration::from_millis(3000));

    drop(harness.events);
    let session = harness.driver.await.expect("driver task should not panic");
    assert!(session.is_released());
}

#[tokio::test(start_paused = true)]
async fn probe_result_reaches_the_view() {
    let mut harness = spawn_session();

    let mut details = None;
    while details.is_none() {
        if let Effect::DetailsChanged(view) = next_effect(&mut harness.effects).await {
            details = Some(view);
        }
    }
    let view = details.expect("details were delivered");
    assert_eq!(view.summary, "01:01 · 720p");
    assert_eq!(view.codec, "h264");
    assert_eq!(view.resolution, "1280 x 720");
    assert_eq!(view.bitrate, "4.50 Mbps");
    assert_eq!(view.size, "Unknown");

    drop(harness.events);
    let session = harness.driver.await.expect("driver task should not panic");
    assert_eq!(session.details_label(), Some("01:01 · 720p"));
    assert_eq!(
        session.details_view().map(|view| view.resolution.as_str()),
        Some("1280 x 720")
    );
}

#[tokio::test(start_paused = true)]
async fn closing_the_channel_releases_once() {
    let mut harness = spawn_session();
    harness
        .events
        .send(SessionEvent::Pause)
        .await
        .expect("driver accepts events");
    drop(harness.events);

    let session = harness.driver.await.expect("driver task should not panic");
    assert!(session.is_released());
    assert_eq!(harness.engine.release_count(), 1);

    let mut released = 0;
    while let Some(effect) = harness.effects.recv().await {
        if effect == Effect::Released {
            released += 1;
        }
    }
    assert_eq!(released, 1);
}

#[tokio::test(start_paused = true)]
async fn replayed_script_adjusts_volume_and_stops_after_destroy() {
    let harness = spawn_session();
    let steps = script::parse(
        "down 800 500\n\
         move 800 400\n\
         up\n\
         wait 500\n\
         destroy\n\
         rotate\n",
    )
    .expect("valid script");

    script::replay(&steps, &harness.events, &harness.engine, &harness.device).await;
    drop(harness.events);

    let session = harness.driver.await.expect("driver task should not panic");
    assert_eq!(harness.device.volume_writes().last(), Some(&6));
    assert_eq!(session.volume().percent().value(), 40);
    assert_eq!(harness.engine.release_count(), 1);
}
