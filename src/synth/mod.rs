//! Descriptor Synthesizer: dependency extraction and Makefile rendering

mod descriptor;
mod include;
mod synthesizer;

pub use descriptor::{BuildDescriptor, Rule, Section};
pub use include::{extract_dependencies, match_line, IncludeLine};
pub use synthesizer::{
    assembly_object_name, compiled_object_name, object_names, write_descriptor, DependencyRule,
    Synthesizer,
};

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::scanner::TreeScanner;
use std::path::Path;
use std::sync::Arc;

/// Scans `root` and synthesizes its descriptor without writing anything.
pub fn generate(
    root: &Path,
    fs: Arc<dyn FileSystem>,
    config: &GeneratorConfig,
) -> Result<BuildDescriptor> {
    config.validate()?;

    let scanner = TreeScanner::with_fs(root.to_path_buf(), fs.clone())?;
    let tree = scanner.scan()?;

    Synthesizer::new(root.to_path_buf(), fs, config.clone()).synthesize(&tree)
}
