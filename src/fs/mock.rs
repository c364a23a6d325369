use super::FileSystem;
use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Directory,
}

#[derive(Debug, Clone)]
struct MockEntry {
    content: Option<String>,
    kind: EntryKind,
    readable: bool,
}

/// In-memory file system; relative paths are resolved against `root`.
pub struct MockFileSystem {
    files: RwLock<HashMap<PathBuf, MockEntry>>,
    writes: RwLock<Vec<PathBuf>>,
    root: PathBuf,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::with_root(PathBuf::from("/mock"))
    }

    pub fn with_root(root: PathBuf) -> Self {
        let fs = Self {
            files: RwLock::new(HashMap::new()),
            writes: RwLock::new(Vec::new()),
            root,
        };
        let root = fs.root.clone();
        fs.insert(&root, None, EntryKind::Directory, true);
        fs
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.insert(path.as_ref(), Some(content.to_string()), EntryKind::File, true);
    }

    /// Adds a file that exists but fails every read with `PermissionDenied`.
    pub fn add_unreadable_file(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), Some(String::new()), EntryKind::File, false);
    }

    pub fn add_dir(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), None, EntryKind::Directory, true);
    }

    /// Adds a directory that makes any walk through it fail.
    pub fn add_unreadable_dir(&self, path: impl AsRef<Path>) {
        self.insert(path.as_ref(), None, EntryKind::Directory, false);
    }

    /// Paths passed to [`FileSystem::write`], in call order.
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.writes.read().unwrap().clone()
    }

    fn insert(&self, path: &Path, content: Option<String>, kind: EntryKind, readable: bool) {
        let path = self.normalize_path(path);
        let mut files = self.files.write().unwrap();

        if let Some(parent) = path.parent() {
            Self::ensure_parents(&mut files, parent);
        }

        files.insert(
            path,
            MockEntry {
                content,
                kind,
                readable,
            },
        );
    }

    fn normalize_path(&self, path: &Path) -> PathBuf {
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        joined
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    fn ensure_parents(files: &mut HashMap<PathBuf, MockEntry>, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            files.entry(current.clone()).or_insert(MockEntry {
                content: None,
                kind: EntryKind::Directory,
                readable: true,
            });
        }
    }

    fn entry(&self, path: &Path) -> Option<MockEntry> {
        let path = self.normalize_path(path);
        self.files.read().unwrap().get(&path).cloned()
    }
}

impl Default for MockFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, format!("{}: not found", path.display()))
}

fn permission_denied(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("{}: permission denied", path.display()),
    )
}

/// True when any directory between the walk root and `rel` (exclusive of the
/// entry itself unless it is a directory) carries the excluded name.
fn is_pruned(rel: &Path, kind: EntryKind, excluded: &str) -> bool {
    let components: Vec<_> = rel.components().collect();
    let dir_components = match kind {
        EntryKind::Directory => &components[..],
        EntryKind::File => &components[..components.len().saturating_sub(1)],
    };
    dir_components
        .iter()
        .any(|c| c.as_os_str() == std::ffi::OsStr::new(excluded))
}

impl FileSystem for MockFileSystem {
    fn exists(&self, path: &Path) -> bool {
        self.entry(path).is_some()
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.entry(path)
            .map(|e| e.kind == EntryKind::Directory)
            .unwrap_or(false)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        let entry = self.entry(path).ok_or_else(|| not_found(path))?;
        if !entry.readable {
            return Err(permission_denied(path));
        }
        entry.content.map(String::into_bytes).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: is a directory", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        let normalized = self.normalize_path(path);
        if self.is_dir(&normalized) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{}: is a directory", path.display()),
            ));
        }
        self.insert(&normalized, Some(contents.to_string()), EntryKind::File, true);
        self.writes.write().unwrap().push(normalized);
        Ok(())
    }

    fn walk_files(&self, root: &Path, excluded_dir: &str) -> io::Result<Vec<PathBuf>> {
        let root = self.normalize_path(root);
        let root_entry = self.entry(&root).ok_or_else(|| not_found(&root))?;
        if !root_entry.readable {
            return Err(permission_denied(&root));
        }

        let files = self.files.read().unwrap();
        let mut result = Vec::new();
        for (path, entry) in files.iter() {
            let rel = match path.strip_prefix(&root) {
                Ok(rel) if !rel.as_os_str().is_empty() => rel,
                _ => continue,
            };
            if is_pruned(rel, entry.kind, excluded_dir) {
                continue;
            }
            match entry.kind {
                EntryKind::Directory if !entry.readable => return Err(permission_denied(path)),
                EntryKind::Directory => {}
                EntryKind::File => result.push(path.clone()),
            }
        }

        Ok(result)
    }
}
