use super::descriptor::{BuildDescriptor, Rule, Section};
use super::include::extract_dependencies;
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::scanner::SourceTree;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

const COMPILE_FLAGS: &str = "-Wall -I . -ffreestanding -fno-stack-protector";

/// Direct dependencies declared by one header or compiled source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyRule {
    pub path: String,
    pub dependencies: Vec<String>,
}

/// `foo.c` -> `foo.o`
pub fn compiled_object_name(path: &str) -> String {
    format!("{}.o", path.strip_suffix(".c").unwrap_or(path))
}

/// `foo.asm` -> `foo-asm.o`, kept apart from `foo.o` built from `foo.c`
pub fn assembly_object_name(path: &str) -> String {
    format!("{}-asm.o", path.strip_suffix(".asm").unwrap_or(path))
}

/// Every object the final artifact links: assembly objects first, then
/// compiled objects, each in the tree's sorted order.
pub fn object_names(tree: &SourceTree) -> Vec<String> {
    tree.assembly_sources()
        .iter()
        .map(|p| assembly_object_name(p))
        .chain(tree.compiled_sources().iter().map(|p| compiled_object_name(p)))
        .collect()
}

/// Turns a [`SourceTree`] into a [`BuildDescriptor`].
///
/// Reads headers and compiled sources through the file system abstraction
/// but never writes; see [`write_descriptor`] for the output step.
pub struct Synthesizer {
    root: PathBuf,
    fs: Arc<dyn FileSystem>,
    config: GeneratorConfig,
}

impl Synthesizer {
    pub fn new(root: PathBuf, fs: Arc<dyn FileSystem>, config: GeneratorConfig) -> Self {
        Self { root, fs, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Extracts the dependency line for every header, then every compiled
    /// source. Assembly sources are never read.
    pub fn dependency_rules(&self, tree: &SourceTree) -> Result<Vec<DependencyRule>> {
        tree.dependency_sources()
            .map(|path| -> Result<DependencyRule> {
                let full_path = self.root.join(path);
                let bytes = self.fs.read(&full_path).map_err(|source| Error::Read {
                    path: full_path.clone(),
                    source,
                })?;
                let dependencies = extract_dependencies(&String::from_utf8_lossy(&bytes));

                debug!(path, dependencies = dependencies.len(), "Extracted dependencies");

                Ok(DependencyRule {
                    path: path.to_string(),
                    dependencies,
                })
            })
            .collect()
    }

    pub fn synthesize(&self, tree: &SourceTree) -> Result<BuildDescriptor> {
        let start = Instant::now();
        let config = &self.config;

        let dependency_rules = self.dependency_rules(tree)?;
        let objects = object_names(tree);

        let artifact = Rule::new(&config.artifact)
            .prerequisites(&objects)
            .recipe(format!(
                "{} -T {} -nostdlib -o {} $^",
                config.linker, config.linker_script, config.artifact
            ));

        let dependencies = dependency_rules
            .into_iter()
            .map(|rule| Rule::new(rule.path).prerequisites(rule.dependencies))
            .collect();

        let clean = Rule::new("clean").recipe(
            std::iter::once(format!("rm -rf {}", config.artifact))
                .chain(objects.iter().map(|o| format!(" {}", o)))
                .collect::<String>(),
        );

        let compile = Rule::new("%.o")
            .prerequisites(["%.c"])
            .recipe(format!("{} {} -o $@ -c $<", config.compiler, COMPILE_FLAGS));
        let assemble = Rule::new("%-asm.o")
            .prerequisites(["%.asm"])
            .recipe(format!("{} -f elf -o $@ $<", config.assembler));

        let run = Rule::new("run").recipe(format!("{} -kernel {}", config.emulator, config.artifact));
        let test = Rule::new("test").prerequisites([config.artifact.as_str(), "run"]);
        let regenerate = Rule::new("makefile").recipe(&config.regenerate_command);

        let descriptor = BuildDescriptor::new(vec![
            Section::new(Some("kernel binary"), vec![artifact]),
            Section::new(Some("dependencies"), dependencies),
            Section::new(Some("clean"), vec![clean]),
            Section::new(Some("how to compile .c to .o"), vec![compile]),
            Section::new(
                Some("how to compile file.asm to file-asm.o so it cannot clash with file.o"),
                vec![assemble],
            ),
            Section::new(None, vec![run]),
            Section::new(None, vec![test]),
            Section::new(None, vec![regenerate]),
        ]);

        info!(
            objects = objects.len(),
            dependency_rules = tree.headers().len() + tree.compiled_sources().len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Build descriptor synthesized"
        );

        Ok(descriptor)
    }
}

/// Renders the descriptor fully in memory, then replaces `path` in one write.
pub fn write_descriptor(fs: &dyn FileSystem, path: &Path, descriptor: &BuildDescriptor) -> Result<()> {
    let rendered = descriptor.render();
    fs.write(path, &rendered).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bytes = rendered.len(), "Build descriptor written");
    Ok(())
}
