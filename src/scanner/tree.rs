use super::kind::{FileKind, FileRecord};
use serde::Serialize;

/// Classified project files, one ascending sequence per kind.
///
/// The sort order is what makes regeneration byte-identical, so the fields
/// are private and only ever populated through [`SourceTree::from_paths`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceTree {
    compiled_sources: Vec<String>,
    headers: Vec<String>,
    assembly_sources: Vec<String>,
}

impl SourceTree {
    /// Classifies relative paths and sorts each resulting sequence.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut tree = Self::default();

        for path in paths {
            let record = FileRecord::new(path);
            for kind in record.kinds() {
                tree.sequence_mut(kind).push(record.path().to_string());
            }
        }

        tree.compiled_sources.sort();
        tree.headers.sort();
        tree.assembly_sources.sort();
        tree
    }

    pub fn compiled_sources(&self) -> &[String] {
        &self.compiled_sources
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn assembly_sources(&self) -> &[String] {
        &self.assembly_sources
    }

    pub fn sequence(&self, kind: FileKind) -> &[String] {
        match kind {
            FileKind::CompiledSource => &self.compiled_sources,
            FileKind::Header => &self.headers,
            FileKind::AssemblySource => &self.assembly_sources,
        }
    }

    fn sequence_mut(&mut self, kind: FileKind) -> &mut Vec<String> {
        match kind {
            FileKind::CompiledSource => &mut self.compiled_sources,
            FileKind::Header => &mut self.headers,
            FileKind::AssemblySource => &mut self.assembly_sources,
        }
    }

    /// Files whose contents are scanned for dependencies: headers first,
    /// then compiled sources, each in sorted order.
    pub fn dependency_sources(&self) -> impl Iterator<Item = &str> {
        self.headers
            .iter()
            .chain(self.compiled_sources.iter())
            .map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.compiled_sources.len() + self.headers.len() + self.assembly_sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
