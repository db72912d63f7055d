//! Plan execution boundary.
//!
//! The core never remuxes anything itself; it freezes intent into a
//! [`RemediationPlan`] and hands it to an executor. This module defines the
//! contract an executor must honor, plus the pure command formatting for the
//! reference executor (an ffmpeg stream-copy remux), so callers and tests can
//! see exactly what a plan means without spawning anything.

use crate::catalog::TrackKind;
use crate::planner::RemediationPlan;
use crate::Result;
use std::path::{Path, PathBuf};

/// External collaborator that applies a remediation plan.
///
/// Implementations must honor the application protocol:
///
/// - the plan is applied to a **copy** of the source file, never in place;
/// - the artifact's track languages reflect exactly the plan's assignments,
///   and every track not named in the plan is unchanged;
/// - application is idempotent at the plan level: applying the same plan
///   twice to the same source yields byte-for-byte-equivalent metadata
///   outcomes (payload is stream-copied, never re-encoded);
/// - on failure the original file is untouched and no partially-written
///   artifact is visible under its final name (write to a temporary
///   location, rename on completion).
///
/// Callers must hold a per-path in-flight marker (see
/// [`crate::pending::InFlight`]) so at most one plan per path is outstanding
/// at a time. A pending execution may be abandoned; the atomicity rules
/// above mean abandonment never corrupts the source.
pub trait PlanExecutor {
    /// Apply the plan, returning the path of the finished artifact.
    fn execute(&self, plan: &RemediationPlan) -> Result<PathBuf>;
}

/// Output path for a remuxed copy: `movie.mkv` becomes `movie_remuxed.mkv`.
pub fn remuxed_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match source.extension() {
        Some(ext) => format!("{}_remuxed.{}", stem, ext.to_string_lossy()),
        None => format!("{}_remuxed", stem),
    };
    source.with_file_name(name)
}

/// ffmpeg argument list for the reference executor.
///
/// Stream-copies every track and rewrites only the language tags named in
/// the plan: `-metadata:s:a:<index>` for audio, `-metadata:s:s:<index>` for
/// subtitles. Formatting is pure; the same plan always yields the same
/// argument list.
pub fn remux_arguments(plan: &RemediationPlan) -> Vec<String> {
    let mut args = vec![
        "-i".to_string(),
        plan.path().display().to_string(),
        "-c".to_string(),
        "copy".to_string(),
    ];

    for assignment in plan.assignments() {
        let selector = match assignment.track.kind {
            TrackKind::Audio => 'a',
            TrackKind::Subtitle => 's',
        };
        args.push(format!("-metadata:s:{}:{}", selector, assignment.track.index));
        args.push(format!("language={}", assignment.language));
    }

    args.push(remuxed_output_path(plan.path()).display().to_string());
    args
}
