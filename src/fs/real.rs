use super::FileSystem;
use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub struct RealFileSystem;

impl RealFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RealFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for RealFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        fs::read(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn walk_files(&self, root: &Path, excluded_dir: &str) -> io::Result<Vec<PathBuf>> {
        let excluded = excluded_dir.to_string();
        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(entry.depth() > 0 && is_dir && entry.file_name() == OsStr::new(&excluded))
            })
            .build();

        let mut files = Vec::new();
        for result in walker {
            let entry = result.map_err(walk_error)?;
            if is_listed_file(&entry) {
                files.push(entry.into_path());
            }
        }

        Ok(files)
    }
}

// Symlinks are never descended into, but a link whose target is a regular
// file is listed under its own name.
fn is_listed_file(entry: &ignore::DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_file() => true,
        Some(t) if t.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

// Keeps the underlying io kind (e.g. PermissionDenied) and the walker's message,
// which names the offending path.
fn walk_error(err: ignore::Error) -> io::Error {
    let kind = err
        .io_error()
        .map(|e| e.kind())
        .unwrap_or(io::ErrorKind::Other);
    io::Error::new(kind, err)
}
