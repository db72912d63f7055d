//! Shared fixtures for integration tests.
//!
//! Builders for realistic media file descriptors covering the triage cases:
//! clean files, unknown-language tracks, oversized files, and unsupported
//! containers.

#![allow(dead_code)]

use mediatriage::catalog::{AudioTrack, Language, MediaFile, SubtitleTrack};
use std::path::PathBuf;

/// Convert a GiB figure to bytes.
pub fn gib(size: f64) -> u64 {
    (size * (1u64 << 30) as f64) as u64
}

fn audio(codec: &str, language: Option<&str>, channels: u32) -> AudioTrack {
    AudioTrack {
        codec: codec.into(),
        language: Language::from(language.map(str::to_string)),
        channels: Some(channels),
    }
}

fn subtitle(codec: &str, language: Option<&str>) -> SubtitleTrack {
    SubtitleTrack {
        codec: codec.into(),
        language: Language::from(language.map(str::to_string)),
    }
}

/// 15.2 GiB MKV with one untagged audio track and one untagged subtitle.
/// Needs a remux, nothing else.
pub fn matrix() -> MediaFile {
    MediaFile {
        name: "The Matrix (1999).mkv".into(),
        path: PathBuf::from("/movies/The Matrix (1999).mkv"),
        size: gib(15.2),
        format: "matroska,webm".into(),
        duration: 8160.0,
        audio_tracks: vec![
            audio("dts", Some("eng"), 6),
            audio("ac3", Some("spa"), 6),
            audio("aac", Some("und"), 2),
        ],
        subtitle_tracks: vec![
            subtitle("subrip", Some("eng")),
            subtitle("subrip", Some("spa")),
            subtitle("subrip", Some("und")),
        ],
    }
}

/// 25.8 GiB MKV, fully tagged. Needs a re-encode for size only.
pub fn blade_runner() -> MediaFile {
    MediaFile {
        name: "Blade Runner 2049 (2017).mkv".into(),
        path: PathBuf::from("/movies/Blade Runner 2049 (2017).mkv"),
        size: gib(25.8),
        format: "matroska,webm".into(),
        duration: 9840.0,
        audio_tracks: vec![audio("truehd", Some("eng"), 8), audio("ac3", Some("eng"), 6)],
        subtitle_tracks: vec![subtitle("pgs", Some("eng")), subtitle("pgs", Some("fre"))],
    }
}

/// 8.4 GiB MP4, fully tagged, no subtitles. Clean.
pub fn inception() -> MediaFile {
    MediaFile {
        name: "Inception (2010).mp4".into(),
        path: PathBuf::from("/movies/Inception (2010).mp4"),
        size: gib(8.4),
        format: "mov,mp4,m4a,3gp,3g2,mj2".into(),
        duration: 8880.0,
        audio_tracks: vec![audio("aac", Some("eng"), 6)],
        subtitle_tracks: vec![],
    }
}

/// 22.1 GiB MKV with an untagged audio track and an untagged subtitle.
/// Needs both a remux and a size re-encode.
pub fn interstellar() -> MediaFile {
    MediaFile {
        name: "Interstellar (2014).mkv".into(),
        path: PathBuf::from("/movies/Interstellar (2014).mkv"),
        size: gib(22.1),
        format: "matroska,webm".into(),
        duration: 10140.0,
        audio_tracks: vec![audio("dts", Some("unknown"), 6), audio("ac3", Some("eng"), 6)],
        subtitle_tracks: vec![
            subtitle("subrip", Some("eng")),
            subtitle("subrip", Some("unknown")),
        ],
    }
}

/// 3.2 GiB ASF with an untagged audio track and an untagged subtitle.
/// Needs both a remux and a container re-encode.
pub fn documentary() -> MediaFile {
    MediaFile {
        name: "Documentary (2020).wmv".into(),
        path: PathBuf::from("/movies/Documentary (2020).wmv"),
        size: gib(3.2),
        format: "asf".into(),
        duration: 5400.0,
        audio_tracks: vec![audio("wmav2", Some("und"), 2)],
        subtitle_tracks: vec![subtitle("srt", Some("unknown"))],
    }
}

/// 1.4 GiB AVI, fully tagged. Needs a container re-encode only.
pub fn old_movie() -> MediaFile {
    MediaFile {
        name: "Old Movie (1995).avi".into(),
        path: PathBuf::from("/movies/Old Movie (1995).avi"),
        size: gib(1.4),
        format: "avi".into(),
        duration: 6720.0,
        audio_tracks: vec![audio("mp3", Some("eng"), 2)],
        subtitle_tracks: vec![],
    }
}
