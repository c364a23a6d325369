//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

pub fn expected_makefile(name: &str) -> String {
    fs::read_to_string(fixture_path(&format!("{}.expected.mk", name)))
        .expect("Failed to read expected Makefile")
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).expect("Failed to create directory");
    for entry in fs::read_dir(from).expect("Failed to read fixture directory") {
        let entry = entry.expect("Failed to read fixture entry");
        let target = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).expect("Failed to copy fixture file");
        }
    }
}

/// Copies a fixture tree into a fresh temp dir so tests can write into it.
pub fn copy_fixture(name: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    copy_dir(&fixture_path(name), dir.path());
    dir
}

/// Adds version-control metadata that must never show up in the output.
pub fn add_vcs_metadata(root: &Path) {
    fs::create_dir_all(root.join(".git/objects")).unwrap();
    fs::write(root.join(".git/objects/packed.c"), "#include <secret.h>\n").unwrap();
    fs::create_dir_all(root.join("hw/.git")).unwrap();
    fs::write(root.join("hw/.git/config.h"), "").unwrap();
}
