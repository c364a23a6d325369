use super::{FileKind, SourceTree};
use crate::error::{Error, Result};
use crate::fs::{FileSystem, RealFileSystem};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Directory name marking version-control metadata; never descended into.
pub const VCS_MARKER: &str = ".git";

/// Walks a project root and classifies every regular file below it.
pub struct TreeScanner {
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
}

impl TreeScanner {
    pub fn new(root: PathBuf) -> Result<Self> {
        Self::with_fs(root, Arc::new(RealFileSystem::new()))
    }

    pub fn with_fs(root: PathBuf, fs: Arc<dyn FileSystem>) -> Result<Self> {
        if !fs.exists(&root) {
            return Err(Error::RootNotFound(root));
        }
        if !fs.is_dir(&root) {
            return Err(Error::NotADirectory(root));
        }

        debug!(root = %root.display(), "TreeScanner initialized");

        Ok(Self { root, fs })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Produces the sorted [`SourceTree`] for the root.
    ///
    /// Any unreadable directory aborts the scan; there is no partial result.
    pub fn scan(&self) -> Result<SourceTree> {
        let start = Instant::now();
        info!(root = %self.root.display(), "Starting tree scan");

        let files = self
            .fs
            .walk_files(&self.root, VCS_MARKER)
            .map_err(|source| Error::Traversal {
                path: self.root.clone(),
                source,
            })?;
        let files_scanned = files.len();

        let relative: Vec<String> = files.iter().map(|p| self.relative_path(p)).collect();
        let tree = SourceTree::from_paths(relative);

        for kind in FileKind::ALL {
            for path in tree.sequence(kind) {
                debug!(path = %path, kind = %kind, "Classified file");
            }
        }

        info!(
            files_scanned,
            compiled_sources = tree.compiled_sources().len(),
            headers = tree.headers().len(),
            assembly_sources = tree.assembly_sources().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Tree scan completed"
        );

        Ok(tree)
    }

    /// Root-relative, `/`-separated, with no leading `./`.
    fn relative_path(&self, path: &Path) -> String {
        let rel = path.strip_prefix(&self.root).unwrap_or(path);
        rel.components()
            .filter(|c| !matches!(c, std::path::Component::CurDir))
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }
}
