//! FileSystem trait definition

use std::io;
use std::path::{Path, PathBuf};

/// Abstraction over file system operations for testability
pub trait FileSystem: Send + Sync {
    /// Check if a path exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Read the raw contents of a file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file at `path` with `contents`
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Recursively list every regular file below `root`.
    ///
    /// Directories named `excluded_dir` are pruned together with
    /// everything beneath them. Returned paths are absolute (joined onto
    /// `root`) and come back in no particular order.
    fn walk_files(&self, root: &Path, excluded_dir: &str) -> io::Result<Vec<PathBuf>>;
}
