// SPDX-License-Identifier: MPL-2.0
//! Audio track descriptors reported by the playback engine.

/// Position of a track inside the engine's audio track groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId {
    pub group: usize,
    pub index: usize,
}

impl TrackId {
    #[must_use]
    pub fn new(group: usize, index: usize) -> Self {
        Self { group, index }
    }
}

impl std::fmt::Display for TrackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.group, self.index)
    }
}

/// Audio codecs the audio renderer can play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCodec {
    Aac,
    Mp3,
    Vorbis,
    Opus,
    Ac3,
    Eac3,
}

impl AudioCodec {
    /// Every supported codec.
    pub const SUPPORTED: [Self; 6] = [
        Self::Aac,
        Self::Mp3,
        Self::Vorbis,
        Self::Opus,
        Self::Ac3,
        Self::Eac3,
    ];

    /// Sample MIME type the engine reports for this codec.
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Aac => "audio/mp4a-latm",
            Self::Mp3 => "audio/mpeg",
            Self::Vorbis => "audio/vorbis",
            Self::Opus => "audio/opus",
            Self::Ac3 => "audio/ac3",
            Self::Eac3 => "audio/eac3",
        }
    }

    /// Looks up a codec by its exact sample MIME type.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        Self::SUPPORTED.into_iter().find(|codec| codec.mime() == mime)
    }
}

/// Snapshot of one audio track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackDescriptor {
    pub id: TrackId,
    /// Language tag, if the container declares one.
    pub language: Option<String>,
    /// Sample MIME type (e.g. `audio/ac3`).
    pub mime: String,
}

impl TrackDescriptor {
    #[must_use]
    pub fn new(id: TrackId, language: Option<&str>, mime: impl Into<String>) -> Self {
        Self {
            id,
            language: language
                .map(str::trim)
                .filter(|lang| !lang.is_empty())
                .map(str::to_string),
            mime: mime.into(),
        }
    }

    /// Menu label: `Track N` or `Track N – lang`, numbered from 1 within its group.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.language {
            Some(lang) => format!("Track {} – {}", self.id.index + 1, lang),
            None => format!("Track {}", self.id.index + 1),
        }
    }

    /// Codec of this track, if it is one the renderer supports.
    #[must_use]
    pub fn codec(&self) -> Option<AudioCodec> {
        AudioCodec::from_mime(&self.mime)
    }
}

/// One audio track group as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioTrackGroup {
    pub index: usize,
    pub tracks: Vec<TrackDescriptor>,
}

impl AudioTrackGroup {
    /// Builds a group from `(language, mime)` pairs, assigning track ids.
    #[must_use]
    pub fn from_formats(index: usize, formats: &[(Option<&str>, &str)]) -> Self {
        let tracks = formats
            .iter()
            .enumerate()
            .map(|(track, (language, mime))| {
                TrackDescriptor::new(TrackId::new(index, track), *language, *mime)
            })
            .collect();
        Self { index, tracks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_numbers_from_one() {
        let plain = TrackDescriptor::new(TrackId::new(0, 0), None, "audio/mpeg");
        assert_eq!(plain.label(), "Track 1");

        let tagged = TrackDescriptor::new(TrackId::new(2, 1), Some("fr"), "audio/ac3");
        assert_eq!(tagged.label(), "Track 2 – fr");
    }

    #[test]
    fn blank_language_is_dropped() {
        let track = TrackDescriptor::new(TrackId::new(0, 0), Some("  "), "audio/opus");
        assert!(track.language.is_none());
        assert_eq!(track.label(), "Track 1");
    }

    #[test]
    fn supported_codecs_resolve_by_mime() {
        for codec in AudioCodec::SUPPORTED {
            assert_eq!(AudioCodec::from_mime(codec.mime()), Some(codec));
        }
        assert_eq!(AudioCodec::from_mime("audio/ac3"), Some(AudioCodec::Ac3));
        assert_eq!(AudioCodec::from_mime("audio/flac"), None);
        assert_eq!(AudioCodec::from_mime("audio/true-hd"), None);
    }

    #[test]
    fn group_from_formats_assigns_ids() {
        let group = AudioTrackGroup::from_formats(1, &[(Some("en"), "audio/eac3"), (None, "audio/flac")]);
        assert_eq!(group.tracks[0].id, TrackId::new(1, 0));
        assert_eq!(group.tracks[1].id, TrackId::new(1, 1));
        assert!(group.tracks[0].codec().is_some());
        assert!(group.tracks[1].codec().is_none());
    }
}
