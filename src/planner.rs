//! Remediation plan construction.
//!
//! The planner turns a caller's language choices into an immutable
//! [`RemediationPlan`] that an external remuxer can execute exactly once.
//! Every request is validated against the descriptor passed in at build
//! time, never against cached inspection state, so a stale UI can not talk
//! the planner into overwriting a tag that has since been corrected.

use crate::catalog::{MediaFile, TrackKind};
use crate::{Error, Result};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Reference to one track within a file: kind plus 0-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TrackRef {
    /// Which track sequence the index points into.
    pub kind: TrackKind,
    /// 0-based position within that sequence.
    pub index: usize,
}

impl std::str::FromStr for TrackRef {
    type Err = String;

    /// Parse the wire form `"<kind>_<index>"`, e.g. `"audio_0"`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (kind, index) = s
            .split_once('_')
            .ok_or_else(|| format!("expected <kind>_<index>, got '{}'", s))?;
        let kind: TrackKind = kind.parse()?;
        let index: usize = index
            .parse()
            .map_err(|_| format!("invalid track index: '{}'", index))?;
        Ok(Self { kind, index })
    }
}

impl std::fmt::Display for TrackRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.kind, self.index)
    }
}

/// One validated track-language assignment within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageAssignment {
    /// The track being tagged.
    pub track: TrackRef,
    /// The 3-letter lowercase language code to write.
    pub language: String,
}

/// An immutable, validated set of language corrections for one file.
///
/// Assignments are canonically ordered by (kind, index), audio before
/// subtitle, regardless of the iteration order of the request map. A plan is
/// consumed exactly once by an executor; for a retry, build a new plan from
/// the file's current state.
#[derive(Debug, Clone, Serialize)]
pub struct RemediationPlan {
    path: PathBuf,
    assignments: Vec<LanguageAssignment>,
}

impl RemediationPlan {
    /// Path of the file this plan applies to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The assignments, in canonical order.
    pub fn assignments(&self) -> &[LanguageAssignment] {
        &self.assignments
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Whether the plan carries no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

/// Build a remediation plan from a file descriptor and requested languages.
///
/// Request keys are `"<kind>_<index>"` strings; values are language codes.
/// Fails with [`Error::InvalidTarget`] when a key is malformed, references a
/// track that does not exist, references a track whose language is already
/// tagged, targets a track that another key in the request already targets
/// (map keys are distinct, but "audio_2" and "audio_02" name the same
/// track), or carries a code that is not exactly three ASCII lowercase
/// letters. The code check re-validates caller input defensively even though
/// callers are expected to pick from a known vocabulary.
///
/// Fails with [`Error::EmptyPlan`] when the request is empty but the file
/// has Unknown-language tracks: a file needing remediation never gets a
/// silent no-op plan.
pub fn build_plan(
    file: &MediaFile,
    requested: &HashMap<String, String>,
) -> Result<RemediationPlan> {
    if requested.is_empty() && file.has_unknown_tracks() {
        return Err(Error::empty_plan(&file.path));
    }

    let mut seen: HashSet<TrackRef> = HashSet::with_capacity(requested.len());
    let mut assignments = Vec::with_capacity(requested.len());
    for (key, code) in requested {
        let track: TrackRef = key
            .parse()
            .map_err(|e: String| Error::invalid_target(key, e))?;

        // Distinct keys can spell the same track ("audio_2", "audio_02");
        // one track gets at most one assignment.
        if !seen.insert(track) {
            return Err(Error::invalid_target(
                key,
                format!("duplicate assignment for track {}", track),
            ));
        }

        let current = file.track_language(track.kind, track.index).ok_or_else(|| {
            Error::invalid_target(
                key,
                format!(
                    "file has {} {} track(s)",
                    file.track_count(track.kind),
                    track.kind
                ),
            )
        })?;

        if !current.is_unknown() {
            return Err(Error::invalid_target(
                key,
                format!("track is already tagged '{}'", current),
            ));
        }

        if !is_valid_language_code(code) {
            return Err(Error::invalid_target(
                key,
                format!("'{}' is not a 3-letter lowercase language code", code),
            ));
        }

        assignments.push(LanguageAssignment {
            track,
            language: code.clone(),
        });
    }

    // Canonical ordering makes plans comparable regardless of map iteration
    // order.
    assignments.sort_by_key(|a| a.track);

    Ok(RemediationPlan {
        path: file.path.clone(),
        assignments,
    })
}

fn is_valid_language_code(code: &str) -> bool {
    code.len() == 3 && code.bytes().all(|b| b.is_ascii_lowercase())
}
