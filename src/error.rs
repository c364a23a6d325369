//! Error types for makegen
//!
//! Every failure is fatal: the run either produces a complete descriptor or
//! leaves the file system untouched. Each variant names the offending path.

use crate::config::ConfigError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Project root does not exist
    #[error("Project root does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    /// Project root exists but is a file
    #[error("Project root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A directory or entry could not be read while walking the tree
    #[error("Failed to traverse {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A header or compiled source could not be read for dependency extraction
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The descriptor could not be written
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
