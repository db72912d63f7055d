//! Triage inspection for catalog entries.
//!
//! The inspector decides, per media file, which remediation actions it needs
//! and why. It is a pure function of the descriptor: no I/O, deterministic,
//! safe to call from any number of threads. Rules are evaluated independently
//! in a fixed order, so a file can trigger several actions and an action can
//! accumulate several reasons.

use crate::catalog::MediaFile;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A remediation action a file may require.
///
/// The Ord impl keeps reports and plans deterministic: remux sorts before
/// re-encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemediationAction {
    /// Rewrite container metadata (language tags) without touching payload.
    Remux,
    /// Full transcode by an external tool.
    Reencode,
}

impl fmt::Display for RemediationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remux => write!(f, "remux"),
            Self::Reencode => write!(f, "re-encode"),
        }
    }
}

/// The rule that produced a reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// A track of either kind has an Unknown language tag.
    UnknownLanguage,
    /// The file exceeds the size threshold.
    FileSize,
    /// The container format is not in the supported list.
    Container,
}

/// A structured justification for an action.
///
/// Kept as (rule, detail) records rather than bare prose so callers and
/// tests can inspect structure instead of parsing strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    /// Which rule fired.
    pub rule: RuleKind,
    /// Human-readable detail for display.
    pub detail: String,
}

/// Result of inspecting one media file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    actions: BTreeSet<RemediationAction>,
    reasons: BTreeMap<RemediationAction, Vec<Reason>>,
}

impl Report {
    /// Whether the file needs no remediation at all.
    pub fn is_clean(&self) -> bool {
        self.actions.is_empty()
    }

    /// Whether the file requires the given action.
    pub fn requires(&self, action: RemediationAction) -> bool {
        self.actions.contains(&action)
    }

    /// The required actions, in canonical order.
    pub fn actions(&self) -> impl Iterator<Item = RemediationAction> + '_ {
        self.actions.iter().copied()
    }

    /// The reasons recorded for an action, in rule evaluation order.
    pub fn reasons_for(&self, action: RemediationAction) -> &[Reason] {
        self.reasons.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    fn add(&mut self, action: RemediationAction, rule: RuleKind, detail: String) {
        self.actions.insert(action);
        self.reasons
            .entry(action)
            .or_default()
            .push(Reason { rule, detail });
    }
}

/// Thresholds the inspector judges files against.
///
/// Container fitness is a lowercase substring match against the raw prober
/// format string (so `"matroska,webm"` counts as matroska). That taxonomy is
/// loose by design; it mirrors what probing tools actually emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectorLimits {
    /// Size threshold in GiB above which a file needs re-encoding.
    #[serde(default = "default_max_size_gib")]
    pub max_size_gib: f64,
    /// Container format substrings that need no re-encoding.
    #[serde(default = "default_supported_containers")]
    pub supported_containers: Vec<String>,
}

fn default_max_size_gib() -> f64 {
    20.0
}

fn default_supported_containers() -> Vec<String> {
    vec!["matroska".into(), "mp4".into(), "mov".into()]
}

impl Default for InspectorLimits {
    fn default() -> Self {
        Self {
            max_size_gib: default_max_size_gib(),
            supported_containers: default_supported_containers(),
        }
    }
}

/// Triage inspector for media files.
pub struct Inspector {
    limits: InspectorLimits,
}

impl Inspector {
    /// Create an inspector with the default limits.
    pub fn new() -> Self {
        Self::with_limits(InspectorLimits::default())
    }

    /// Create an inspector with custom limits.
    pub fn with_limits(limits: InspectorLimits) -> Self {
        Self { limits }
    }

    /// Compute the remediation actions a file requires and why.
    ///
    /// Rules, evaluated independently and in order:
    /// 1. any Unknown-language track → remux
    /// 2. size above the GiB threshold → re-encode
    /// 3. unsupported container → re-encode
    ///
    /// Rules 2 and 3 each append their own reason to the re-encode list.
    pub fn classify(&self, file: &MediaFile) -> Report {
        let mut report = Report::default();

        let unknown_audio = file.unknown_audio_count();
        let unknown_subtitles = file.unknown_subtitle_count();
        if unknown_audio > 0 || unknown_subtitles > 0 {
            report.add(
                RemediationAction::Remux,
                RuleKind::UnknownLanguage,
                format!(
                    "Fix unknown language tags on {} audio / {} subtitle track(s)",
                    unknown_audio, unknown_subtitles
                ),
            );
        }

        let size_gib = file.size_gib();
        if size_gib > self.limits.max_size_gib {
            report.add(
                RemediationAction::Reencode,
                RuleKind::FileSize,
                format!("Large file size ({:.1} GB)", size_gib),
            );
        }

        // Case-insensitive on both sides: probers emit "Matroska", configs
        // may spell "MP4".
        let format = file.format.to_lowercase();
        let supported = self
            .limits
            .supported_containers
            .iter()
            .any(|c| format.contains(&c.to_lowercase()));
        if !supported {
            report.add(
                RemediationAction::Reencode,
                RuleKind::Container,
                format!("Unsupported container format ({})", file.format),
            );
        }

        report
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}
