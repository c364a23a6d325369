//! Configuration management for makegen
//!
//! The generated descriptor references a handful of fixed names: the output
//! file, the final artifact, the toolchain commands and the regenerate hook.
//! `GeneratorConfig::default()` carries the built-in values; `from_env()`
//! overlays environment variables on top of them.
//!
//! # Environment Variables
//!
//! - `MAKEGEN_OUTPUT`: Descriptor file name - default: "Makefile"
//! - `MAKEGEN_ARTIFACT`: Final artifact name - default: "kernel.bin"
//! - `MAKEGEN_LINKER`: Linker command - default: "ld"
//! - `MAKEGEN_LINKER_SCRIPT`: Linker script - default: "linker.ld"
//! - `MAKEGEN_CC`: C compiler - default: "gcc"
//! - `MAKEGEN_AS`: Assembler - default: "nasm"
//! - `MAKEGEN_EMULATOR`: Emulator used by `run` - default: "qemu"
//! - `MAKEGEN_REGENERATE`: Command behind the `makefile` target - default: "makegen"
//!
//! # Example
//!
//! ```no_run
//! use makegen::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_env();
//! config.validate().expect("Invalid configuration");
//! ```

use std::env;
use thiserror::Error;

const DEFAULT_OUTPUT: &str = "Makefile";
const DEFAULT_ARTIFACT: &str = "kernel.bin";
const DEFAULT_LINKER: &str = "ld";
const DEFAULT_LINKER_SCRIPT: &str = "linker.ld";
const DEFAULT_COMPILER: &str = "gcc";
const DEFAULT_ASSEMBLER: &str = "nasm";
const DEFAULT_EMULATOR: &str = "qemu";
const DEFAULT_REGENERATE_COMMAND: &str = "makegen";

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Configuration value '{0}' must not be empty")]
    EmptyValue(&'static str),

    /// A value would split a rule across lines
    #[error("Configuration value '{field}' must be a single line, got {value:?}")]
    MultiLineValue { field: &'static str, value: String },

    #[error("Artifact name '{0}' collides with the object pattern rules (ends in .o)")]
    ArtifactIsObject(String),
}

/// Names and commands written into the generated descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Descriptor file name, relative to the project root
    pub output: String,

    /// Final linked artifact
    pub artifact: String,

    pub linker: String,

    pub linker_script: String,

    pub compiler: String,

    pub assembler: String,

    /// Emulator invoked by the `run` target
    pub emulator: String,

    /// Command the `makefile` target runs to regenerate the descriptor
    pub regenerate_command: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: DEFAULT_OUTPUT.to_string(),
            artifact: DEFAULT_ARTIFACT.to_string(),
            linker: DEFAULT_LINKER.to_string(),
            linker_script: DEFAULT_LINKER_SCRIPT.to_string(),
            compiler: DEFAULT_COMPILER.to_string(),
            assembler: DEFAULT_ASSEMBLER.to_string(),
            emulator: DEFAULT_EMULATOR.to_string(),
            regenerate_command: DEFAULT_REGENERATE_COMMAND.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Loads the configuration from `MAKEGEN_*` variables, falling back to
    /// the built-in defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |name: &str, fallback: String| env::var(name).unwrap_or(fallback);

        Self {
            output: var("MAKEGEN_OUTPUT", defaults.output),
            artifact: var("MAKEGEN_ARTIFACT", defaults.artifact),
            linker: var("MAKEGEN_LINKER", defaults.linker),
            linker_script: var("MAKEGEN_LINKER_SCRIPT", defaults.linker_script),
            compiler: var("MAKEGEN_CC", defaults.compiler),
            assembler: var("MAKEGEN_AS", defaults.assembler),
            emulator: var("MAKEGEN_EMULATOR", defaults.emulator),
            regenerate_command: var("MAKEGEN_REGENERATE", defaults.regenerate_command),
        }
    }

    /// Validates the configuration
    ///
    /// Every value ends up verbatim inside a rule line, so none may be empty
    /// or contain a line break.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("output", &self.output),
            ("artifact", &self.artifact),
            ("linker", &self.linker),
            ("linker_script", &self.linker_script),
            ("compiler", &self.compiler),
            ("assembler", &self.assembler),
            ("emulator", &self.emulator),
            ("regenerate_command", &self.regenerate_command),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::EmptyValue(field));
            }
            if value.contains('\n') || value.contains('\r') {
                return Err(ConfigError::MultiLineValue {
                    field,
                    value: value.clone(),
                });
            }
        }

        if self.artifact.ends_with(".o") {
            return Err(ConfigError::ArtifactIsObject(self.artifact.clone()));
        }

        Ok(())
    }
}
