//! Command handlers; each returns the process exit code.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, error, info};

use super::commands::{GenerateArgs, ScanArgs};
use super::output::{OutputFormatter, ScanReport};
use crate::config::GeneratorConfig;
use crate::fs::{FileSystem, RealFileSystem};
use crate::scanner::TreeScanner;
use crate::synth::{self, Synthesizer};

pub fn handle_generate(args: &GenerateArgs) -> i32 {
    report_exit(run_generate(args))
}

pub fn handle_scan(args: &ScanArgs) -> i32 {
    report_exit(run_scan(args))
}

fn report_exit(result: Result<()>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("makegen: {:#}", e);
            1
        }
    }
}

fn resolve_root(root: &Option<PathBuf>) -> Result<PathBuf> {
    match root {
        Some(path) => Ok(path.clone()),
        None => env::current_dir().context("Failed to get current directory"),
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let root = resolve_root(&args.root)?;
    let config = GeneratorConfig::from_env();
    debug!(?config, "Loaded generator config");

    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem::new());
    let descriptor = synth::generate(&root, fs.clone(), &config)
        .with_context(|| format!("Failed to generate descriptor for {}", root.display()))?;

    if args.stdout {
        print!("{}", descriptor);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| root.join(&config.output));
    synth::write_descriptor(fs.as_ref(), &output, &descriptor)?;

    info!(output = %output.display(), "Done");
    Ok(())
}

fn run_scan(args: &ScanArgs) -> Result<()> {
    let root = resolve_root(&args.root)?;
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem::new());

    let tree = TreeScanner::with_fs(root.clone(), fs.clone())?.scan()?;
    let dependencies = Synthesizer::new(root.clone(), fs, GeneratorConfig::default())
        .dependency_rules(&tree)?;

    let report = ScanReport::new(root.display().to_string(), tree, dependencies);
    let output = OutputFormatter::new(args.format.into()).format(&report)?;
    println!("{}", output.trim_end());

    Ok(())
}
