//! CLI integration tests
//!
//! These tests drive the compiled binary: command parsing, the default
//! generate behaviour, scan output formats, error reporting and exit codes.

mod support;

use std::fs;
use std::path::PathBuf;
use std::process::Command;
use support::{add_vcs_metadata, copy_fixture, expected_makefile, fixture_path};
use tempfile::TempDir;

/// Helper to get the path to the makegen binary
fn makegen_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_makegen"))
}

fn makegen() -> Command {
    let mut cmd = Command::new(makegen_bin());
    for var in [
        "MAKEGEN_OUTPUT",
        "MAKEGEN_ARTIFACT",
        "MAKEGEN_LINKER",
        "MAKEGEN_LINKER_SCRIPT",
        "MAKEGEN_CC",
        "MAKEGEN_AS",
        "MAKEGEN_EMULATOR",
        "MAKEGEN_REGENERATE",
        "MAKEGEN_LOG_LEVEL",
        "MAKEGEN_LOG_JSON",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help() {
    let output = makegen().arg("--help").output().expect("Failed to execute makegen");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("makegen"));
    assert!(stdout.contains("generate"));
    assert!(stdout.contains("scan"));
}

#[test]
fn test_cli_version() {
    let output = makegen().arg("--version").output().expect("Failed to execute makegen");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_bare_invocation_writes_makefile_in_cwd() {
    let temp = copy_fixture("kernel");

    let output = makegen()
        .current_dir(temp.path())
        .output()
        .expect("Failed to execute makegen");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let written = fs::read_to_string(temp.path().join("Makefile")).unwrap();
    assert_eq!(written, expected_makefile("kernel"));
}

#[test]
fn test_rerun_overwrites_with_identical_bytes() {
    let temp = copy_fixture("kernel");
    add_vcs_metadata(temp.path());
    fs::write(temp.path().join("Makefile"), "stale contents\n").unwrap();

    for _ in 0..2 {
        let status = makegen()
            .current_dir(temp.path())
            .arg("-q")
            .status()
            .expect("Failed to execute makegen");
        assert!(status.success());
    }

    let written = fs::read_to_string(temp.path().join("Makefile")).unwrap();
    assert_eq!(written, expected_makefile("kernel"));
}

#[test]
fn test_generate_stdout_does_not_write() {
    let temp = copy_fixture("kernel");

    let output = makegen()
        .args(["generate", "--stdout"])
        .arg(temp.path())
        .output()
        .expect("Failed to execute makegen");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected_makefile("kernel"));
    assert!(!temp.path().join("Makefile").exists());
}

#[test]
fn test_generate_custom_output_path() {
    let temp = copy_fixture("kernel");
    let out_dir = TempDir::new().unwrap();
    let target = out_dir.path().join("kernel.mk");

    let status = makegen()
        .arg("generate")
        .arg(temp.path())
        .arg("-o")
        .arg(&target)
        .status()
        .expect("Failed to execute makegen");

    assert!(status.success());
    assert_eq!(fs::read_to_string(&target).unwrap(), expected_makefile("kernel"));
    assert!(!temp.path().join("Makefile").exists());
}

#[test]
fn test_env_overrides_reach_descriptor() {
    let output = makegen()
        .env("MAKEGEN_ARTIFACT", "xelix.bin")
        .env("MAKEGEN_REGENERATE", "tools/makefile.py")
        .args(["generate", "--stdout"])
        .arg(fixture_path("kernel"))
        .output()
        .expect("Failed to execute makegen");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("xelix.bin: boot/boot-asm.o"));
    assert!(stdout.contains("test: xelix.bin run\n"));
    assert!(stdout.ends_with("makefile:\n\ttools/makefile.py\n"));
}

#[test]
fn test_invalid_env_config_fails() {
    let output = makegen()
        .env("MAKEGEN_ARTIFACT", "kernel.o")
        .args(["generate", "--stdout"])
        .arg(fixture_path("kernel"))
        .output()
        .expect("Failed to execute makegen");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("kernel.o"));
}

#[test]
fn test_missing_root_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist");

    let output = makegen()
        .arg("generate")
        .arg(&missing)
        .output()
        .expect("Failed to execute makegen");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist"));
    assert!(!missing.join("Makefile").exists());
}

#[test]
fn test_scan_json() {
    let output = makegen()
        .args(["scan", "--format", "json"])
        .arg(fixture_path("kernel"))
        .output()
        .expect("Failed to execute makegen");

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(value["tree"]["assembly_sources"][0], "boot/boot.asm");
    assert_eq!(value["objects"][0], "boot/boot-asm.o");
    assert_eq!(value["dependencies"][0]["path"], "hw/serial.h");
    assert_eq!(value["dependencies"][4]["path"], "main.c");
}

#[test]
fn test_scan_human() {
    let output = makegen()
        .arg("scan")
        .arg(fixture_path("kernel"))
        .output()
        .expect("Failed to execute makegen");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Assembly sources (2):"));
    assert!(stdout.contains("main.c -> log.h, hw/serial.h, idt.h"));
}

#[test]
fn test_logs_go_to_stderr() {
    let output = makegen()
        .args(["generate", "--stdout", "-v"])
        .arg(fixture_path("kernel"))
        .output()
        .expect("Failed to execute makegen");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), expected_makefile("kernel"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Tree scan completed"));
}

#[test]
fn test_json_logs_from_env() {
    let output = makegen()
        .env("MAKEGEN_LOG_JSON", "true")
        .args(["generate", "--stdout", "-v"])
        .arg(fixture_path("kernel"))
        .output()
        .expect("Failed to execute makegen");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().expect("no log output");
    let record: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(record["fields"].is_object());
}
