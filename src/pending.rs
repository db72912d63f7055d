//! Per-path in-flight markers for plan execution.
//!
//! The "at most one outstanding plan per file path" rule is a cooperative
//! contract: the core has no persistence, so the caller submitting plans is
//! the one who must hold the marker. This registry is that marker. The guard
//! releases on drop, so an abandoned execution can never leak its slot.

use parking_lot::RwLock;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Registry of file paths with an outstanding plan execution.
#[derive(Debug, Clone, Default)]
pub struct InFlight {
    paths: Arc<RwLock<HashSet<PathBuf>>>,
}

impl InFlight {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a path for execution.
    ///
    /// Returns `None` if a plan for this path is already outstanding. The
    /// returned guard holds the claim until dropped.
    pub fn try_begin(&self, path: impl Into<PathBuf>) -> Option<InFlightGuard> {
        let path = path.into();
        let mut paths = self.paths.write();
        if !paths.insert(path.clone()) {
            return None;
        }
        Some(InFlightGuard {
            path,
            registry: Arc::clone(&self.paths),
        })
    }

    /// Whether a plan for this path is currently outstanding.
    pub fn is_pending(&self, path: &Path) -> bool {
        self.paths.read().contains(path)
    }

    /// Number of outstanding claims.
    pub fn len(&self) -> usize {
        self.paths.read().len()
    }

    /// Whether no claims are outstanding.
    pub fn is_empty(&self) -> bool {
        self.paths.read().is_empty()
    }
}

/// Claim on one path, released when dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    path: PathBuf,
    registry: Arc<RwLock<HashSet<PathBuf>>>,
}

impl InFlightGuard {
    /// The claimed path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.registry.write().remove(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_is_refused() {
        let inflight = InFlight::new();
        let guard = inflight.try_begin("/movies/a.mkv");
        assert!(guard.is_some());
        assert!(inflight.try_begin("/movies/a.mkv").is_none());
        assert!(inflight.try_begin("/movies/b.mkv").is_some());
    }

    #[test]
    fn test_drop_releases_claim() {
        let inflight = InFlight::new();
        {
            let _guard = inflight.try_begin("/movies/a.mkv").unwrap();
            assert!(inflight.is_pending(Path::new("/movies/a.mkv")));
        }
        assert!(!inflight.is_pending(Path::new("/movies/a.mkv")));
        assert!(inflight.try_begin("/movies/a.mkv").is_some());
    }

    #[test]
    fn test_clones_share_state() {
        let inflight = InFlight::new();
        let other = inflight.clone();
        let _guard = inflight.try_begin("/movies/a.mkv").unwrap();
        assert!(other.is_pending(Path::new("/movies/a.mkv")));
        assert_eq!(other.len(), 1);
    }
}
