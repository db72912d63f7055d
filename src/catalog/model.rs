//! Catalog data model: media file descriptors and their tracks.
//!
//! Track language tags arrive from probing tools in several "no language"
//! spellings (absent, empty, `"und"`, `"unknown"`). They are collapsed into
//! the single [`Language::Unknown`] sentinel at the deserialization boundary
//! so downstream code never repeats the three-way check.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

const GIB: f64 = (1u64 << 30) as f64;

/// Language tag of a track.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum Language {
    /// No usable tag: absent, empty, `"und"`, or `"unknown"`.
    #[default]
    Unknown,
    /// A concrete language code (e.g. "eng", "spa").
    Tagged(String),
}

impl Language {
    /// Create a tagged language from a code.
    pub fn tagged(code: impl Into<String>) -> Self {
        Self::Tagged(code.into())
    }

    /// Whether this is the Unknown sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// The language code, if tagged.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Unknown => None,
            Self::Tagged(code) => Some(code),
        }
    }
}

impl From<Option<String>> for Language {
    fn from(raw: Option<String>) -> Self {
        match raw {
            None => Self::Unknown,
            Some(s) => {
                let code = s.trim().to_ascii_lowercase();
                match code.as_str() {
                    "" | "und" | "unknown" => Self::Unknown,
                    _ => Self::Tagged(code),
                }
            }
        }
    }
}

impl From<Language> for Option<String> {
    fn from(lang: Language) -> Self {
        match lang {
            Language::Unknown => None,
            Language::Tagged(code) => Some(code),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown"),
            Self::Tagged(code) => write!(f, "{}", code),
        }
    }
}

/// Kind of track, ordered audio before subtitle.
///
/// The ordering is load-bearing: remediation plans sort their assignments by
/// (kind, index), audio first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    /// Audio stream.
    Audio,
    /// Subtitle stream.
    Subtitle,
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Audio => write!(f, "audio"),
            Self::Subtitle => write!(f, "subtitle"),
        }
    }
}

impl std::str::FromStr for TrackKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "audio" => Ok(Self::Audio),
            "subtitle" => Ok(Self::Subtitle),
            _ => Err(format!("Invalid track kind: {}", s)),
        }
    }
}

/// Information about an audio track.
///
/// Tracks have no intrinsic identity; they are identified by position within
/// their kind's sequence, since two tracks may share codec and language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioTrack {
    /// Audio codec (e.g. "aac", "dts", "truehd").
    pub codec: String,
    /// Language tag, normalized on deserialization.
    #[serde(default)]
    pub language: Language,
    /// Number of channels, if known.
    #[serde(default)]
    pub channels: Option<u32>,
}

/// Information about a subtitle track.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubtitleTrack {
    /// Subtitle format (e.g. "subrip", "pgs").
    pub codec: String,
    /// Language tag, normalized on deserialization.
    #[serde(default)]
    pub language: Language,
}

/// A media file descriptor as supplied by a catalog source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaFile {
    /// Display name of the file.
    pub name: String,
    /// Path to the file; unique key within a catalog.
    pub path: PathBuf,
    /// File size in bytes.
    pub size: u64,
    /// Raw container format identifier as produced by a probing tool,
    /// possibly a comma-separated alias list (e.g. "matroska,webm").
    pub format: String,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: f64,
    /// Audio tracks, in stream order.
    #[serde(default)]
    pub audio_tracks: Vec<AudioTrack>,
    /// Subtitle tracks, in stream order.
    #[serde(default)]
    pub subtitle_tracks: Vec<SubtitleTrack>,
}

impl MediaFile {
    /// Check the descriptor's preconditions, failing fast on malformed input.
    pub fn validate(&self) -> Result<()> {
        if self.format.trim().is_empty() {
            return Err(Error::invalid_media_file(&self.path, "empty container format"));
        }
        if !self.duration.is_finite() || self.duration < 0.0 {
            return Err(Error::invalid_media_file(
                &self.path,
                format!("invalid duration: {}", self.duration),
            ));
        }
        for (i, track) in self.audio_tracks.iter().enumerate() {
            if track.codec.trim().is_empty() {
                return Err(Error::invalid_media_file(
                    &self.path,
                    format!("audio track {} has an empty codec", i),
                ));
            }
            if track.channels == Some(0) {
                return Err(Error::invalid_media_file(
                    &self.path,
                    format!("audio track {} has zero channels", i),
                ));
            }
        }
        for (i, track) in self.subtitle_tracks.iter().enumerate() {
            if track.codec.trim().is_empty() {
                return Err(Error::invalid_media_file(
                    &self.path,
                    format!("subtitle track {} has an empty codec", i),
                ));
            }
        }
        Ok(())
    }

    /// File size in GiB, derived from `size` so the two can never disagree.
    pub fn size_gib(&self) -> f64 {
        self.size as f64 / GIB
    }

    /// Number of tracks of the given kind.
    pub fn track_count(&self, kind: TrackKind) -> usize {
        match kind {
            TrackKind::Audio => self.audio_tracks.len(),
            TrackKind::Subtitle => self.subtitle_tracks.len(),
        }
    }

    /// Current language of the track at (kind, index), if it exists.
    pub fn track_language(&self, kind: TrackKind, index: usize) -> Option<&Language> {
        match kind {
            TrackKind::Audio => self.audio_tracks.get(index).map(|t| &t.language),
            TrackKind::Subtitle => self.subtitle_tracks.get(index).map(|t| &t.language),
        }
    }

    /// Number of audio tracks with an Unknown language.
    pub fn unknown_audio_count(&self) -> usize {
        self.audio_tracks
            .iter()
            .filter(|t| t.language.is_unknown())
            .count()
    }

    /// Number of subtitle tracks with an Unknown language.
    pub fn unknown_subtitle_count(&self) -> usize {
        self.subtitle_tracks
            .iter()
            .filter(|t| t.language.is_unknown())
            .count()
    }

    /// Whether any track of either kind has an Unknown language.
    pub fn has_unknown_tracks(&self) -> bool {
        self.unknown_audio_count() > 0 || self.unknown_subtitle_count() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_file() -> MediaFile {
        MediaFile {
            name: "test.mkv".into(),
            path: PathBuf::from("/movies/test.mkv"),
            size: 1 << 30,
            format: "matroska,webm".into(),
            duration: 3600.0,
            audio_tracks: vec![],
            subtitle_tracks: vec![],
        }
    }

    #[test]
    fn test_language_normalization() {
        assert_eq!(Language::from(None::<String>), Language::Unknown);
        assert_eq!(Language::from(Some("".to_string())), Language::Unknown);
        assert_eq!(Language::from(Some("und".to_string())), Language::Unknown);
        assert_eq!(Language::from(Some("unknown".to_string())), Language::Unknown);
        assert_eq!(Language::from(Some("UND".to_string())), Language::Unknown);
        assert_eq!(Language::from(Some(" und ".to_string())), Language::Unknown);
        assert_eq!(
            Language::from(Some("eng".to_string())),
            Language::tagged("eng")
        );
        assert_eq!(
            Language::from(Some("ENG".to_string())),
            Language::tagged("eng")
        );
    }

    #[test]
    fn test_language_deserialization() {
        let track: AudioTrack = serde_json::from_str(r#"{"codec":"aac"}"#).unwrap();
        assert!(track.language.is_unknown());

        let track: AudioTrack =
            serde_json::from_str(r#"{"codec":"aac","language":"und"}"#).unwrap();
        assert!(track.language.is_unknown());

        let track: AudioTrack =
            serde_json::from_str(r#"{"codec":"aac","language":"spa"}"#).unwrap();
        assert_eq!(track.language.code(), Some("spa"));
    }

    #[test]
    fn test_language_serialization_round_trip() {
        let json = serde_json::to_string(&Language::Unknown).unwrap();
        assert_eq!(json, "null");

        let json = serde_json::to_string(&Language::tagged("fre")).unwrap();
        assert_eq!(json, r#""fre""#);
    }

    #[test]
    fn test_track_kind_ordering() {
        assert!(TrackKind::Audio < TrackKind::Subtitle);
    }

    #[test]
    fn test_track_kind_from_str() {
        assert_eq!("audio".parse::<TrackKind>().ok(), Some(TrackKind::Audio));
        assert_eq!(
            "subtitle".parse::<TrackKind>().ok(),
            Some(TrackKind::Subtitle)
        );
        assert!("video".parse::<TrackKind>().is_err());
    }

    #[test]
    fn test_size_gib_derivation() {
        let mut file = minimal_file();
        file.size = 15 * (1 << 30);
        assert_eq!(file.size_gib(), 15.0);
    }

    #[test]
    fn test_validate_rejects_empty_format() {
        let mut file = minimal_file();
        file.format = "  ".into();
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_duration() {
        let mut file = minimal_file();
        file.duration = -1.0;
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_channels() {
        let mut file = minimal_file();
        file.audio_tracks.push(AudioTrack {
            codec: "aac".into(),
            language: Language::tagged("eng"),
            channels: Some(0),
        });
        assert!(file.validate().is_err());
    }

    #[test]
    fn test_unknown_counts() {
        let mut file = minimal_file();
        file.audio_tracks = vec![
            AudioTrack {
                codec: "dts".into(),
                language: Language::tagged("eng"),
                channels: Some(6),
            },
            AudioTrack {
                codec: "aac".into(),
                language: Language::Unknown,
                channels: Some(2),
            },
        ];
        file.subtitle_tracks = vec![SubtitleTrack {
            codec: "subrip".into(),
            language: Language::Unknown,
        }];

        assert_eq!(file.unknown_audio_count(), 1);
        assert_eq!(file.unknown_subtitle_count(), 1);
        assert!(file.has_unknown_tracks());
        assert_eq!(file.track_count(TrackKind::Audio), 2);
        assert_eq!(
            file.track_language(TrackKind::Audio, 0).unwrap().code(),
            Some("eng")
        );
        assert!(file.track_language(TrackKind::Subtitle, 1).is_none());
    }
}
