//! Suffix-driven file classification

use serde::Serialize;
use std::fmt;

/// Category a file falls into, determined purely by its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    CompiledSource,
    Header,
    AssemblySource,
}

impl FileKind {
    pub const ALL: [FileKind; 3] = [
        FileKind::CompiledSource,
        FileKind::Header,
        FileKind::AssemblySource,
    ];

    pub fn suffix(self) -> &'static str {
        match self {
            FileKind::CompiledSource => ".c",
            FileKind::Header => ".h",
            FileKind::AssemblySource => ".asm",
        }
    }

    pub fn matches(self, path: &str) -> bool {
        path.ends_with(self.suffix())
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::CompiledSource => "compiled source",
            FileKind::Header => "header",
            FileKind::AssemblySource => "assembly source",
        };
        f.write_str(name)
    }
}

/// A relative path whose kinds are derived from its suffix on demand.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct FileRecord {
    path: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Every kind whose suffix test the path passes.
    ///
    /// The tests are evaluated independently rather than as a one-of-N
    /// dispatch, so a path can land in several categories at once.
    pub fn kinds(&self) -> Vec<FileKind> {
        FileKind::ALL
            .into_iter()
            .filter(|kind| kind.matches(&self.path))
            .collect()
    }

    pub fn is(&self, kind: FileKind) -> bool {
        kind.matches(&self.path)
    }
}
