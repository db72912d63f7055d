//! Catalog sources.
//!
//! The triage core is agnostic to where descriptors come from; anything that
//! yields an ordered sequence of validated [`MediaFile`] records can act as a
//! source. The shipped implementation reads a JSON manifest, which is how
//! probing front-ends hand their scan results to this tool.

use super::model::MediaFile;
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A supplier of media file descriptors for one directory scope.
pub trait CatalogSource {
    /// Load the catalog, validating every entry.
    fn load(&self) -> Result<Vec<MediaFile>>;
}

/// Catalog source backed by a JSON manifest file.
///
/// The manifest is a JSON array of media file descriptors. Entries are
/// validated on load and must have unique paths.
pub struct JsonManifest {
    path: PathBuf,
    rebase_root: Option<PathBuf>,
}

impl JsonManifest {
    /// Create a source reading the manifest at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rebase_root: None,
        }
    }

    /// Rebase every entry's path onto `root`, keeping the file name.
    ///
    /// Manifests often record paths from the machine that produced them;
    /// rebasing points them at the directory being triaged here.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.rebase_root = Some(root.into());
        self
    }
}

impl CatalogSource for JsonManifest {
    fn load(&self) -> Result<Vec<MediaFile>> {
        let content = std::fs::read_to_string(&self.path)?;
        let mut files: Vec<MediaFile> = serde_json::from_str(&content)?;

        if let Some(root) = &self.rebase_root {
            for file in &mut files {
                file.path = rebase(&file.path, root);
            }
        }

        let mut seen: HashSet<&Path> = HashSet::new();
        for file in &files {
            file.validate()?;
            if !seen.insert(file.path.as_path()) {
                return Err(Error::invalid_media_file(
                    &file.path,
                    "duplicate path in catalog",
                ));
            }
        }

        tracing::debug!(
            "Loaded {} catalog entries from {:?}",
            files.len(),
            self.path
        );

        Ok(files)
    }
}

fn rebase(path: &Path, root: &Path) -> PathBuf {
    match path.file_name() {
        Some(name) => root.join(name),
        None => root.to_path_buf(),
    }
}
