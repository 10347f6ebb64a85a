//! Hygiene: source-level budgets for the charts crate.
//!
//! Layout code runs inside the render path of the UI, so nothing here may
//! panic or silently swallow a failure. Every budget is zero.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, excluding sibling `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(Path::new("src"), &mut files);
    files
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if !path_str.ends_with(".rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

fn hits(pattern: &str) -> Vec<(String, usize)> {
    source_files()
        .into_iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then_some((file.path, count))
        })
        .collect()
}

fn check(pattern: &str, budget: usize) {
    let found = hits(pattern);
    let count: usize = found.iter().map(|(_, c)| c).sum();
    let listing = found
        .iter()
        .map(|(path, c)| format!("  {path}: {c}"))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(count <= budget, "`{pattern}` budget exceeded: found {count}, max {budget}.\n{listing}");
}

#[test]
fn source_tree_is_visible() {
    assert!(!source_files().is_empty(), "run from the charts crate root");
}

#[test]
fn no_unwrap() {
    check(".unwrap()", 0);
}

#[test]
fn no_expect() {
    check(".expect(", 0);
}

#[test]
fn no_panic_family() {
    for pattern in ["panic!(", "unreachable!(", "todo!(", "unimplemented!("] {
        check(pattern, 0);
    }
}

#[test]
fn no_silent_discard() {
    check("let _ =", 0);
    check(".ok()", 0);
}

#[test]
fn no_dead_code_allowances() {
    check("#[allow(dead_code)]", 0);
}
