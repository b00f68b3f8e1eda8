//! Purpose: Keep filesystem tests isolated and panic-safe.
//!
//! Config initialization tests create, overwrite and delete files. They must
//! do so inside `tempfile::TempDir` roots passed explicitly to the API, never
//! by changing the process working directory (tests run in parallel threads
//! that share one cwd).
//!
//! Non-scope: This test does not verify runtime behavior; it only checks
//! source code patterns. Files are analyzed statically.
//!
//! Invariants:
//! - Test files never call `std::env::set_current_dir`
//! - Test files never use `std::env::temp_dir()` or hardcoded /tmp paths
//! - TempDir instances are bound to a named variable

use std::fs;
use std::path::{Path, PathBuf};

/// This crate's own sources mention the forbidden patterns as string literals.
const SELF_DIR: &str = "architecture-tests";

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .expect("architecture-tests lives two levels below the workspace root")
        .to_path_buf()
}

/// Returns (path, content) for every Rust file under `crates/` containing tests.
fn test_sources() -> Vec<(PathBuf, String)> {
    let crates_dir = workspace_root().join("crates");
    assert!(
        crates_dir.exists(),
        "crates/ directory not found at {:?}",
        crates_dir
    );

    walkdir::WalkDir::new(&crates_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .filter(|e| !e.path().components().any(|c| c.as_os_str() == SELF_DIR))
        .filter_map(|e| {
            let content = fs::read_to_string(e.path()).ok()?;
            content
                .contains("#[test]")
                .then(|| (e.path().to_path_buf(), content))
        })
        .collect()
}

#[test]
fn test_sources_are_found() {
    assert!(
        !test_sources().is_empty(),
        "expected test sources under crates/"
    );
}

#[test]
fn test_no_working_directory_changes() {
    let violations: Vec<String> = test_sources()
        .into_iter()
        .filter(|(_, content)| content.contains("set_current_dir"))
        .map(|(path, _)| {
            format!(
                "{}: changes the working directory - pass a TempDir root instead",
                path.display()
            )
        })
        .collect();

    assert!(
        violations.is_empty(),
        "Found tests that change the process working directory:\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_no_manual_temp_dir_usage() {
    let mut violations: Vec<String> = Vec::new();

    for (path, content) in test_sources() {
        if content.contains("std::env::temp_dir()") {
            violations.push(format!(
                "{}: uses std::env::temp_dir() - prefer tempfile::TempDir for RAII cleanup",
                path.display()
            ));
        }

        if content.contains("\"/tmp") {
            violations.push(format!(
                "{}: contains hardcoded /tmp path - prefer tempfile crate",
                path.display()
            ));
        }
    }

    assert!(
        violations.is_empty(),
        "Found manual temp file patterns (not panic-safe):\n{}",
        violations.join("\n")
    );
}

#[test]
fn test_tempdir_bindings_retained() {
    let mut violations: Vec<String> = Vec::new();

    for (path, content) in test_sources() {
        for (i, line) in content.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.starts_with("let _ = TempDir::new()")
                || trimmed.starts_with("let _ = tempfile::")
            {
                violations.push(format!(
                    "{}:{}: TempDir bound to `_` is deleted immediately - use a named variable",
                    path.display(),
                    i + 1
                ));
            }

            if trimmed.contains("TempDir::new()")
                && !trimmed.starts_with("let ")
                && !trimmed.starts_with("//")
            {
                violations.push(format!(
                    "{}:{}: TempDir not retained - bind it to a variable for RAII cleanup",
                    path.display(),
                    i + 1
                ));
            }
        }
    }

    assert!(
        violations.is_empty(),
        "Found TempDir instances not properly retained:\n{}",
        violations.join("\n")
    );
}
