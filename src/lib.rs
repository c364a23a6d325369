//! makegen - Makefile synthesizer for C/assembly source trees
//!
//! Walks a project tree, classifies `.c`, `.h` and `.asm` files by suffix,
//! extracts each header's and compiled source's `#include <...>` tokens and
//! renders a deterministic Makefile: link rule, per-file dependency lines,
//! clean target, compile pattern rules and utility targets.
//!
//! # Example Usage
//!
//! ```no_run
//! use makegen::{generate, write_descriptor, GeneratorConfig, RealFileSystem};
//! use std::path::Path;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), makegen::Error> {
//! let fs = Arc::new(RealFileSystem::new());
//! let config = GeneratorConfig::default();
//!
//! let descriptor = generate(Path::new("."), fs.clone(), &config)?;
//! write_descriptor(fs.as_ref(), Path::new("Makefile"), &descriptor)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`scanner`]: tree walk and suffix classification
//! - [`synth`]: dependency extraction and descriptor rendering
//! - [`fs`]: file system abstraction with real and in-memory backends

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod scanner;
pub mod synth;
pub mod util;

pub use config::{ConfigError, GeneratorConfig};
pub use error::{Error, Result};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
pub use scanner::{FileKind, FileRecord, SourceTree, TreeScanner};
pub use synth::{generate, write_descriptor, BuildDescriptor, DependencyRule, Synthesizer};
pub use util::{init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
