//! Output formatting for `makegen scan`
//!
//! A [`ScanReport`] renders as JSON, YAML or human-readable text.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write as _;

use super::commands::OutputFormatArg;
use crate::scanner::SourceTree;
use crate::synth::{object_names, DependencyRule};

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format
    Yaml,
    /// Human-readable formatted text
    Human,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Human => OutputFormat::Human,
        }
    }
}

/// Classified tree plus the dependencies extracted from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub root: String,
    pub tree: SourceTree,
    pub objects: Vec<String>,
    pub dependencies: Vec<DependencyRule>,
}

impl ScanReport {
    pub fn new(root: impl Into<String>, tree: SourceTree, dependencies: Vec<DependencyRule>) -> Self {
        let objects = object_names(&tree);
        Self {
            root: root.into(),
            tree,
            objects,
            dependencies,
        }
    }
}

/// Output formatter for scan reports
pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self, report: &ScanReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(report)
                .context("Failed to serialize scan report to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(report).context("Failed to serialize scan report to YAML")
            }
            OutputFormat::Human => Ok(self.format_human(report)),
        }
    }

    fn format_human(&self, report: &ScanReport) -> String {
        let mut out = String::new();
        let tree = &report.tree;

        let _ = writeln!(out, "Project root: {}", report.root);
        let _ = writeln!(out);

        let groups = [
            ("Compiled sources", tree.compiled_sources()),
            ("Headers", tree.headers()),
            ("Assembly sources", tree.assembly_sources()),
        ];
        for (title, paths) in groups {
            let _ = writeln!(out, "{} ({}):", title, paths.len());
            for path in paths {
                let _ = writeln!(out, "  {}", path);
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "Dependencies:");
        for rule in &report.dependencies {
            if rule.dependencies.is_empty() {
                let _ = writeln!(out, "  {} (none)", rule.path);
            } else {
                let _ = writeln!(out, "  {} -> {}", rule.path, rule.dependencies.join(", "));
            }
        }

        out
    }
}
