//! Hygiene — enforces coding standards at test time
//!
//! These tests scan the toolkit source tree for antipatterns. Each pattern has
//! a budget (ideally zero). If you must add one, you have to fix an existing
//! one first; the budget never grows.
#![allow(clippy::absurd_extreme_comparisons)]

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget, what it costs us)`.
const BUDGETS: [(&str, usize, &str); 11] = [
    // Panics abort the whole page's WASM module.
    (".unwrap()", 0, "panics"),
    (".expect(", 0, "panics"),
    ("panic!(", 0, "panics"),
    ("unreachable!(", 0, "panics"),
    ("todo!(", 0, "unfinished stub"),
    ("unimplemented!(", 0, "unfinished stub"),
    // Silent loss: discards errors without inspecting.
    ("let _ =", 0, "silently discarded result"),
    (".ok()", 0, "silently discarded error"),
    // Output goes through tracing.
    ("println!(", 0, "bypasses tracing"),
    ("eprintln!(", 0, "bypasses tracing"),
    ("#[allow(dead_code)]", 0, "hidden dead code"),
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production `.rs` files under `src/`, excluding `*_test.rs`.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") && !path.to_string_lossy().ends_with("_test.rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .filter_map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (count > 0).then(|| (file.path.display().to_string(), count))
        })
        .collect()
}

#[test]
fn source_tree_is_not_empty() {
    assert!(source_files().len() > 10, "run from the toolkit crate root");
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    let mut failures = Vec::new();
    for (pattern, budget, cost) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, c)| c).sum();
        if count > budget {
            let detail: Vec<String> = found.iter().map(|(path, c)| format!("    {path}: {c}")).collect();
            failures.push(format!("{pattern} ({cost}): found {count}, max {budget}\n{}", detail.join("\n")));
        }
    }
    assert!(failures.is_empty(), "budget exceeded:\n{}", failures.join("\n"));
}

/// Every `#[path = "x_test.rs"]` must point at a sibling that exists.
#[test]
fn test_modules_resolve() {
    let mut missing = Vec::new();
    for file in source_files() {
        let dir = file.path.parent().map(Path::to_path_buf).unwrap_or_default();
        for line in file.content.lines() {
            let Some(rest) = line.trim().strip_prefix("#[path = \"") else {
                continue;
            };
            let Some(name) = rest.split('"').next() else {
                continue;
            };
            if !dir.join(name).is_file() {
                missing.push(format!("{} -> {name}", file.path.display()));
            }
        }
    }
    assert!(missing.is_empty(), "missing test modules:\n{}", missing.join("\n"));
}
