// SPDX-License-Identifier: MPL-2.0
//! `FFmpeg` adapter implementing the [`MetadataProbe`] port trait.
//!
//! Only container and stream headers are read; no frame is decoded, so a
//! probe stays cheap enough to run for every opened file.
//!
//! [`MetadataProbe`]: crate::application::port::MetadataProbe

use std::fs;
use std::path::Path;
use std::sync::Once;
use std::time::Duration;

use crate::application::port::MetadataProbe;
use crate::domain::error::SessionError;
use crate::domain::media::VideoDetails;

static FFMPEG_INIT: Once = Once::new();

/// Initializes `FFmpeg` once per process and silences its warning output.
fn init_ffmpeg() -> Result<(), SessionError> {
    let mut init_result = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(SessionError::MetadataProbeFailed(format!(
                "FFmpeg initialization failed: {e}"
            )));
            return;
        }

        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}

fn probe_failed(context: &str, err: impl std::fmt::Display) -> SessionError {
    SessionError::MetadataProbeFailed(format!("{context}: {err}"))
}

/// Metadata probe backed by `FFmpeg` demuxers.
///
/// Fills the file size from the filesystem and the duration, codec,
/// resolution and bitrate from the best video stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct FfmpegProbe;

impl MetadataProbe for FfmpegProbe {
    fn probe(&self, path: &Path) -> Result<VideoDetails, SessionError> {
        let fs_metadata = fs::metadata(path).map_err(|e| probe_failed("Failed to stat file", e))?;
        if !fs_metadata.is_file() {
            return Err(SessionError::MetadataProbeFailed(format!(
                "{} is not a regular file",
                path.display()
            )));
        }

        init_ffmpeg()?;

        let ictx = ffmpeg_next::format::input(&path)
            .map_err(|e| probe_failed("Failed to open video file", e))?;
        let video_stream = ictx
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| SessionError::MetadataProbeFailed("No video stream found".into()))?;

        let codec_id = video_stream.parameters().id();
        let mime = (codec_id != ffmpeg_next::codec::Id::None)
            .then(|| format!("video/{}", codec_id.name()));

        let resolution =
            ffmpeg_next::codec::context::Context::from_parameters(video_stream.parameters())
                .ok()
                .and_then(|context| context.decoder().video().ok())
                .map(|decoder| (decoder.width(), decoder.height()))
                .filter(|&(width, height)| width > 0 && height > 0);

        #[allow(clippy::cast_precision_loss)]
        let duration_secs = if video_stream.duration() > 0 {
            let time_base = video_stream.time_base();
            video_stream.duration() as f64 * f64::from(time_base.numerator())
                / f64::from(time_base.denominator())
        } else if ictx.duration() > 0 {
            ictx.duration() as f64 / f64::from(ffmpeg_next::ffi::AV_TIME_BASE)
        } else {
            0.0
        };
        let duration = Duration::try_from_secs_f64(duration_secs)
            .ok()
            .filter(|duration| !duration.is_zero());

        // Stream bitrate first, then the container estimate.
        // SAFETY: the parameters pointer stays valid while `ictx` is alive
        let stream_bit_rate = unsafe { (*video_stream.parameters().as_ptr()).bit_rate };
        let bitrate_bps = [stream_bit_rate, ictx.bit_rate()]
            .into_iter()
            .find(|&rate| rate > 0)
            .and_then(|rate| u64::try_from(rate).ok());

        tracing::debug!(
            path = %path.display(),
            format = ictx.format().name(),
            ?resolution,
            duration_secs,
            "probed video file"
        );

        Ok(VideoDetails {
            size_bytes: Some(fs_metadata.len()),
            duration,
            mime,
            resolution,
            bitrate_bps,
        })
    }
}
