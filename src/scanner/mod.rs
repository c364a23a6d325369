//! Tree Scanner: project walk and source classification

mod kind;
mod tree;
mod tree_scanner;

pub use kind::{FileKind, FileRecord};
pub use tree::SourceTree;
pub use tree_scanner::{TreeScanner, VCS_MARKER};
