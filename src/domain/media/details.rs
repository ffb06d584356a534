// SPDX-License-Identifier: MPL-2.0
//! Probed video details and their display labels.

use std::time::Duration;

/// Placeholder shown for any detail the probe could not determine.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Details extracted from a video file by a metadata probe.
///
/// Every field is optional: probes fill in what they can, and labels fall
/// back to [`UNKNOWN_LABEL`] for the rest.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoDetails {
    pub size_bytes: Option<u64>,
    pub duration: Option<Duration>,
    /// Container or codec MIME type (e.g. `video/avc`).
    pub mime: Option<String>,
    /// Width and height in pixels.
    pub resolution: Option<(u32, u32)>,
    pub bitrate_bps: Option<u64>,
}

impl VideoDetails {
    /// Duration label (`MM:SS` or `HH:MM:SS`).
    #[must_use]
    pub fn duration_label(&self) -> String {
        self.duration
            .map_or_else(|| UNKNOWN_LABEL.to_string(), format_duration)
    }

    /// Quality label derived from the resolution.
    #[must_use]
    pub fn quality(&self) -> Option<QualityLabel> {
        self.resolution
            .map(|(width, height)| QualityLabel::from_short_side(width.min(height)))
    }

    /// Codec label: the subtype of the MIME type (`video/avc` → `avc`).
    #[must_use]
    pub fn codec_label(&self) -> String {
        self.mime
            .as_deref()
            .and_then(|mime| mime.split_once('/'))
            .map_or_else(|| UNKNOWN_LABEL.to_string(), |(_, sub)| sub.to_string())
    }

    /// Resolution label (`1920 x 1080`).
    #[must_use]
    pub fn resolution_label(&self) -> String {
        self.resolution.map_or_else(
            || UNKNOWN_LABEL.to_string(),
            |(width, height)| format!("{width} x {height}"),
        )
    }

    /// Bitrate label (`4.50 Mbps`).
    #[must_use]
    pub fn bitrate_label(&self) -> String {
        self.bitrate_bps
            .map_or_else(|| UNKNOWN_LABEL.to_string(), format_bitrate)
    }

    /// File size label (`1.5 MB`).
    #[must_use]
    pub fn size_label(&self) -> String {
        self.size_bytes
            .map_or_else(|| UNKNOWN_LABEL.to_string(), format_file_size)
    }

    /// Every label of the details panel, ready for display.
    #[must_use]
    pub fn view(&self) -> DetailsView {
        DetailsView {
            summary: self.summary(),
            duration: self.duration_label(),
            quality: self
                .quality()
                .map_or_else(|| UNKNOWN_LABEL.to_string(), |q| q.to_string()),
            codec: self.codec_label(),
            resolution: self.resolution_label(),
            bitrate: self.bitrate_label(),
            size: self.size_label(),
        }
    }

    /// One-line summary shown in the player: `01:23 · 1080p · 1.5 MB`.
    #[must_use]
    pub fn summary(&self) -> String {
        let quality = self
            .quality()
            .map_or_else(|| UNKNOWN_LABEL.to_string(), |q| q.to_string());
        let mut parts = vec![self.duration_label(), quality];
        if let Some(size) = self.size_bytes {
            parts.push(format_file_size(size));
        }
        parts.join(" · ")
    }
}

/// Display labels of a probed video: the one-line summary plus the rows of
/// the details panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsView {
    pub summary: String,
    pub duration: String,
    pub quality: String,
    pub codec: String,
    pub resolution: String,
    pub bitrate: String,
    pub size: String,
}

impl DetailsView {
    /// View shown when the probe failed.
    #[must_use]
    pub fn unknown() -> Self {
        let unknown = || UNKNOWN_LABEL.to_string();
        Self {
            summary: unknown(),
            duration: unknown(),
            quality: unknown(),
            codec: unknown(),
            resolution: unknown(),
            bitrate: unknown(),
            size: unknown(),
        }
    }

    /// Label/value rows of the details panel, in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Duration", self.duration.as_str()),
            ("Quality", self.quality.as_str()),
            ("Codec", self.codec.as_str()),
            ("Resolution", self.resolution.as_str()),
            ("Bitrate", self.bitrate.as_str()),
            ("Size", self.size.as_str()),
        ]
    }
}

/// Named quality bucket for a vertical resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityLabel {
    P144,
    P240,
    P360,
    P480,
    P720,
    P1080,
    K2,
    K4,
    AboveK4,
}

impl QualityLabel {
    /// Buckets the shorter side of the frame, so rotated phone footage gets
    /// the same label as its landscape counterpart.
    #[must_use]
    pub fn from_short_side(pixels: u32) -> Self {
        match pixels {
            0..=180 => Self::P144,
            181..=280 => Self::P240,
            281..=400 => Self::P360,
            401..=500 => Self::P480,
            501..=800 => Self::P720,
            801..=1120 => Self::P1080,
            1121..=1580 => Self::K2,
            1581..=2400 => Self::K4,
            _ => Self::AboveK4,
        }
    }
}

impl std::fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::P144 => "144p",
            Self::P240 => "240p",
            Self::P360 => "360p",
            Self::P480 => "480p",
            Self::P720 => "720p",
            Self::P1080 => "1080p",
            Self::K2 => "2K",
            Self::K4 => "4K",
            Self::AboveK4 => "4K+",
        };
        f.write_str(label)
    }
}

/// Formats a duration as `MM:SS`, or `HH:MM:SS` from one hour up.
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    if hours > 0 {
        format!("{hours:02}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes:02}:{seconds:02}")
    }
}

/// Formats a byte count with binary units (`512 B`, `1.5 KB`, `2.0 GB`).
#[must_use]
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 6] = ["KB", "MB", "GB", "TB", "PB", "EB"];
    if bytes < 1024 {
        return format!("{bytes} B");
    }
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", UNITS[unit])
}

/// Formats a bitrate in megabits per second (`4.50 Mbps`).
#[must_use]
pub fn format_bitrate(bits_per_second: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let mbps = bits_per_second as f64 / 1_000_000.0;
    format!("{mbps:.2} Mbps")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_switches_to_hours_format() {
        assert_eq!(format_duration(Duration::from_secs(0)), "00:00");
        assert_eq!(format_duration(Duration::from_millis(83_900)), "01:23");
        assert_eq!(format_duration(Duration::from_secs(3599)), "59:59");
        assert_eq!(format_duration(Duration::from_secs(3600)), "01:00:00");
        assert_eq!(format_duration(Duration::from_secs(7384)), "02:03:04");
    }

    #[test]
    fn quality_buckets_match_thresholds() {
        assert_eq!(QualityLabel::from_short_side(144), QualityLabel::P144);
        assert_eq!(QualityLabel::from_short_side(180), QualityLabel::P144);
        assert_eq!(QualityLabel::from_short_side(240), QualityLabel::P240);
        assert_eq!(QualityLabel::from_short_side(360), QualityLabel::P360);
        assert_eq!(QualityLabel::from_short_side(480), QualityLabel::P480);
        assert_eq!(QualityLabel::from_short_side(720), QualityLabel::P720);
        assert_eq!(QualityLabel::from_short_side(1080), QualityLabel::P1080);
        assert_eq!(QualityLabel::from_short_side(1440), QualityLabel::K2);
        assert_eq!(QualityLabel::from_short_side(2160), QualityLabel::K4);
        assert_eq!(QualityLabel::from_short_side(4320), QualityLabel::AboveK4);
    }

    #[test]
    fn portrait_footage_uses_short_side() {
        let details = VideoDetails {
            resolution: Some((1080, 1920)),
            ..VideoDetails::default()
        };
        assert_eq!(details.quality(), Some(QualityLabel::P1080));
        assert_eq!(details.resolution_label(), "1080 x 1920");
    }

    #[test]
    fn file_size_uses_binary_units() {
        assert_eq!(format_file_size(0), "0 B");
        assert_eq!(format_file_size(1023), "1023 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn bitrate_in_megabits() {
        assert_eq!(format_bitrate(4_500_000), "4.50 Mbps");
        assert_eq!(format_bitrate(0), "0.00 Mbps");
    }

    #[test]
    fn codec_label_takes_mime_subtype() {
        let details = VideoDetails {
            mime: Some("video/avc".to_string()),
            ..VideoDetails::default()
        };
        assert_eq!(details.codec_label(), "avc");
        assert_eq!(VideoDetails::default().codec_label(), UNKNOWN_LABEL);
    }

    #[test]
    fn summary_falls_back_to_placeholders() {
        assert_eq!(VideoDetails::default().summary(), "Unknown · Unknown");

        let details = VideoDetails {
            size_bytes: Some(1536),
            duration: Some(Duration::from_secs(83)),
            resolution: Some((1280, 720)),
            ..VideoDetails::default()
        };
        assert_eq!(details.summary(), "01:23 · 720p · 1.5 KB");
    }

    #[test]
    fn view_carries_every_panel_label() {
        let details = VideoDetails {
            size_bytes: Some(5 * 1024 * 1024),
            duration: Some(Duration::from_secs(61)),
            mime: Some("video/h264".to_string()),
            resolution: Some((1920, 1080)),
            bitrate_bps: Some(4_500_000),
        };
        let view = details.view();
        assert_eq!(view.summary, "01:01 · 1080p · 5.0 MB");
        assert_eq!(
            view.rows(),
            [
                ("Duration", "01:01"),
                ("Quality", "1080p"),
                ("Codec", "h264"),
                ("Resolution", "1920 x 1080"),
                ("Bitrate", "4.50 Mbps"),
                ("Size", "5.0 MB"),
            ]
        );
    }

    #[test]
    fn missing_fields_render_as_unknown_rows() {
        let view = VideoDetails::default().view();
        assert_eq!(view.summary, "Unknown · Unknown");
        assert!(view.rows().iter().all(|(_, value)| *value == UNKNOWN_LABEL));
        assert!(DetailsView::unknown()
            .rows()
            .iter()
            .all(|(_, value)| *value == UNKNOWN_LABEL));
        assert_eq!(DetailsView::unknown().summary, UNKNOWN_LABEL);
    }
}
