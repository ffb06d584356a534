// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use cinestream::config::{self, Config};
use cinestream::domain::media::MediaSource;
use cinestream::domain::playback::{AudioCodec, AudioTrackGroup, PhysicalOrientation};
use cinestream::error::Result;
use cinestream::infrastructure::{FakeDevice, FakeEngine, FfmpegProbe};
use cinestream::script::{self, ScriptStep};
use cinestream::session::{
    Effect, OverlayEffect, PlaybackSession, SessionDriver, EVENT_CHANNEL_CAPACITY,
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Replays touch and button events against a headless playback session.

USAGE:
  cinestream <VIDEO> [OPTIONS]

OPTIONS:
  --config FILE      Read settings from FILE instead of the default location
  --script FILE      Event script to replay (default: start, then destroy)
  --width PX         Playback surface width [default: 1080]
  --landscape        Hold the simulated device in landscape
  --tracks LIST      Audio tracks as LANG:MIME,... (`-` for no language)
  --diagnostics      Print the diagnostics report as JSON when done
  -h, --help         Print this help
";

const DEFAULT_SURFACE_WIDTH: f32 = 1080.0;

struct Args {
    video: String,
    config: Option<PathBuf>,
    script: Option<PathBuf>,
    width: f32,
    landscape: bool,
    tracks: Option<String>,
    diagnostics: bool,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }
    let parsed = Args {
        config: args.opt_value_from_str("--config")?,
        script: args.opt_value_from_str("--script")?,
        width: args
            .opt_value_from_str("--width")?
            .unwrap_or(DEFAULT_SURFACE_WIDTH),
        landscape: args.contains("--landscape"),
        tracks: args.opt_value_from_str("--tracks")?,
        diagnostics: args.contains("--diagnostics"),
        video: args.free_from_str()?,
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(parsed))
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    let (config, warning) = match path {
        Some(path) => config::load_from_path(path)?,
        None => config::load(),
    };
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }
    Ok(config)
}

fn load_script(path: Option<&PathBuf>) -> Result<Vec<ScriptStep>> {
    match path {
        Some(path) => script::parse(&std::fs::read_to_string(path)?),
        None => Ok(Vec::new()),
    }
}

fn default_tracks() -> AudioTrackGroup {
    AudioTrackGroup::from_formats(
        0,
        &[
            (Some("en"), AudioCodec::Aac.mime()),
            (Some("fr"), AudioCodec::Ac3.mime()),
        ],
    )
}

fn describe(effect: &Effect) -> String {
    match effect {
        Effect::Overlay(OverlayEffect::IndicatorShown(indicator)) => {
            format!("{:?} indicator {}", indicator.kind, indicator.percent)
        }
        Effect::Overlay(OverlayEffect::IndicatorHidden(kind)) => format!("{kind:?} indicator hidden"),
        Effect::Overlay(OverlayEffect::ControlBarShown) => "control bar shown".to_string(),
        Effect::Overlay(OverlayEffect::ControlBarHidden) => "control bar hidden".to_string(),
        Effect::Toast(message) => format!("toast: {message}"),
        Effect::ShowTrackMenu(menu) => {
            let entries: Vec<String> = menu
                .entries()
                .iter()
                .enumerate()
                .map(|(position, entry)| {
                    let mut line = format!("{}. {}", position + 1, entry.label);
                    if !entry.supported {
                        line.push_str(" (unsupported)");
                    }
                    if entry.active {
                        line.push_str(" *");
                    }
                    line
                })
                .collect();
            format!("track menu: {}", entries.join(", "))
        }
        Effect::ShowResizeMenu { current } => format!("crop menu (current: {})", current.label()),
        Effect::OrientationLockChanged(lock) => format!("orientation lock: {lock}"),
        Effect::ResizeModeChanged(mode) => format!("crop: {}", mode.label()),
        Effect::DetailsChanged(view) => {
            let rows: Vec<String> = view
                .rows()
                .iter()
                .map(|(label, value)| format!("{label}={value}"))
                .collect();
            format!("details: {} [{}]", view.summary, rows.join(", "))
        }
        Effect::StartProbe(request) => format!("probe #{}", request.generation),
        Effect::Released => "released".to_string(),
    }
}

fn print_summary(session: &PlaybackSession<FakeEngine, FakeDevice>) {
    println!("--");
    println!("source:      {}", session.source().uri());
    println!("lifecycle:   {:?}", session.lifecycle_state());
    println!("orientation: {}", session.orientation_lock());
    println!("crop:        {}", session.resize_mode().label());
    println!("brightness:  {}", session.brightness().percent());
    println!("volume:      {}", session.volume().percent());
    match session.active_track() {
        Some(track) => println!("track:       {track}"),
        None => println!("track:       default"),
    }
    println!(
        "details:     {}",
        session.details_label().unwrap_or("(pending)")
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinestream=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    let prepared = load_config(args.config.as_ref()).and_then(|config| {
        let steps = load_script(args.script.as_ref())?;
        let tracks = match &args.tracks {
            Some(list) => script::parse_track_list(list)?,
            None => default_tracks(),
        };
        let source = MediaSource::parse(&args.video)?;
        Ok((config, steps, tracks, source))
    });
    let (config, steps, tracks, source) = match prepared {
        Ok(prepared) => prepared,
        Err(err) => {
            tracing::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let orientation = if args.landscape {
        PhysicalOrientation::Landscape
    } else {
        PhysicalOrientation::Portrait
    };
    let engine = FakeEngine::with_track_groups(vec![tracks]);
    let device = FakeDevice::new(15, 5, 0.5, orientation);
    let settings = config.session_settings();

    let (session, initial) = PlaybackSession::start(
        source,
        engine.clone(),
        device.clone(),
        &settings,
        args.width,
        tokio::time::Instant::now().into_std(),
    );

    let (effects_tx, mut effects_rx) = mpsc::unbounded_channel();
    let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let driver = SessionDriver::new(session, initial, Arc::new(FfmpegProbe), effects_tx);

    let feed = async move {
        script::replay(&steps, &events_tx, &engine, &device).await;
    };
    let print = async {
        while let Some(effect) = effects_rx.recv().await {
            println!("{}", describe(&effect));
        }
    };
    let (session, (), ()) = tokio::join!(driver.run(events_rx), feed, print);

    print_summary(&session);
    if args.diagnostics {
        match session
            .diagnostics()
            .export_json(tokio::time::Instant::now().into_std())
        {
            Ok(json) => println!("{json}"),
            Err(err) => {
                tracing::error!(%err, "could not export diagnostics");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
